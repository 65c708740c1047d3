mod page;
mod transaction;

pub use page::{AccountPage, ApiTransaction};
pub use transaction::{TransactionRecord, TransferRecord};
