mod errors;
mod timestamp;
mod tinybar;

pub use timestamp::ConsensusTimestamp;
pub use tinybar::Tinybar;

/// Account identifier in `shard.realm.num` form, passed through uninterpreted.
pub type AccountId = String;
pub type TransactionId = String;
