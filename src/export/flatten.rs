use serde::Serialize;

use crate::models::TransactionRecord;
use crate::types::{AccountId, Tinybar, TransactionId};

/// One exported CSV row: a single transfer tagged with its parent transaction.
///
/// Field order is the column order; the transaction columns always come first.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct FlatRow {
    pub consensus_timestamp: String,
    pub transaction_id: TransactionId,
    pub account: AccountId,
    pub amount: Tinybar
}

impl FlatRow {
    pub const HEADER: [&'static str; 4] = ["consensus_timestamp", "transaction_id", "account", "amount"];
}

/// Emits one row per transfer. Transactions without transfers produce no rows.
pub fn flatten(records: &[TransactionRecord]) -> Vec<FlatRow> {
    records.iter()
        .flat_map(|record| record.transfers.iter().map(move |transfer| FlatRow {
            consensus_timestamp: record.consensus_timestamp.clone(),
            transaction_id: record.transaction_id.clone(),
            account: transfer.account.clone(),
            amount: transfer.amount
        }))
        .collect()
}
