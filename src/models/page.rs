use chrono::TimeZone;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::str::FromStr;
use tracing::warn;

use crate::models::{TransactionRecord, TransferRecord};
use crate::types::{AccountId, ConsensusTimestamp, Tinybar, TransactionId};

/// One page of the mirror node's account endpoint.
///
/// Every field is optional; a page without `transactions` contributes nothing
/// and a page without `links.next` is the last one. Malformed entries are
/// skipped instead of rejecting the page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountPage {
    #[serde(default, deserialize_with = "lenient_list")]
    pub transactions: Option<Vec<ApiTransaction>>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub links: Option<Links>
}

impl AccountPage {
    pub fn next_link(&self) -> Option<&str> {
        self.links.as_ref()?.next.as_deref()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Links {
    #[serde(default, deserialize_with = "string_or_number")]
    pub next: Option<String>
}

/// A transaction exactly as the mirror node reports it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiTransaction {
    /// `seconds.nanoseconds`, sent as a string but tolerated as a number.
    #[serde(default, deserialize_with = "string_or_number")]
    pub consensus_timestamp: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub transaction_id: Option<TransactionId>,
    /// `null` or a non-list value reads as no transfers.
    #[serde(default, deserialize_with = "lenient_transfers")]
    pub transfers: Vec<ApiTransfer>
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiTransfer {
    #[serde(default, deserialize_with = "string_or_number")]
    pub account: Option<AccountId>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: Tinybar
}

impl ApiTransaction {
    /// True when at least one transfer credits or debits `account`.
    pub fn involves(&self, account: &str) -> bool {
        self.transfers.iter()
            .any(|transfer| transfer.account.as_deref() == Some(account))
    }

    /// Converts the wire transaction into its exported form, rendering the
    /// consensus timestamp as calendar time in `zone`.
    ///
    /// A missing or unparsable timestamp falls back to the epoch.
    pub fn into_record<Tz: TimeZone>(self, zone: &Tz) -> TransactionRecord {
        let timestamp = match self.consensus_timestamp.as_deref() {
            Some(value) => ConsensusTimestamp::from_str(value).unwrap_or_else(|error| {
                warn!("Transaction [{}] has an unusable consensus timestamp [{value}]: {error}", self.transaction_id.as_deref().unwrap_or_default());
                ConsensusTimestamp::epoch()
            }),
            None => {
                warn!("Transaction [{}] has no consensus timestamp", self.transaction_id.as_deref().unwrap_or_default());
                ConsensusTimestamp::epoch()
            }
        };

        TransactionRecord {
            consensus_timestamp: timestamp.to_readable(zone),
            transaction_id: self.transaction_id.unwrap_or_default(),
            transfers: self.transfers.into_iter()
                .map(|transfer| TransferRecord {
                    account: transfer.account.unwrap_or_default(),
                    amount: transfer.amount
                })
                .collect()
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(value)) => Ok(Some(value)),
        Some(Value::Number(value)) => Ok(Some(value.to_string())),
        _ => Ok(None)
    }
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<Tinybar, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;

    match value.as_ref().and_then(Value::as_i64) {
        Some(raw) => Ok(Tinybar::new(raw)),
        None => {
            warn!("Transfer amount [{}] is not an integer, using 0", value.unwrap_or_default());
            Ok(Tinybar::default())
        }
    }
}

fn lenient_transfers<'de, D>(deserializer: D) -> Result<Vec<ApiTransfer>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_list(deserializer)?.unwrap_or_default())
}

/// Reads a JSON list entry by entry, dropping entries that do not decode.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(entries)) => Ok(Some(entries.into_iter()
            .filter_map(|entry| serde_json::from_value(entry)
                .map_err(|error| warn!("Skipping malformed entry: {error}"))
                .ok())
            .collect())),
        Some(other) => {
            warn!("Expected a list, found [{other}]");
            Ok(None)
        }
        None => Ok(None)
    }
}

fn lenient_object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(value) => Ok(serde_json::from_value(value)
            .map_err(|error| warn!("Ignoring malformed section: {error}"))
            .ok()),
        None => Ok(None)
    }
}
