use crate::types::{AccountId, Tinybar, TransactionId};

/// A transaction kept by the fetcher, ready to be flattened.
///
/// The consensus timestamp has already been rendered as local calendar time.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TransactionRecord {
    /// ISO-8601 calendar time of consensus.
    pub consensus_timestamp: String,
    /// Payer-scoped transaction ID, e.g. `0.0.1001-1700000000-000000000`.
    pub transaction_id: TransactionId,
    /// Transfers in the order the mirror node listed them.
    pub transfers: Vec<TransferRecord>
}

/// A single credit or debit line of a transaction.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TransferRecord {
    pub account: AccountId,
    pub amount: Tinybar
}
