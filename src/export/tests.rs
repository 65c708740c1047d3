use super::{flatten, write_filtered, write_primary, FlatRow};

use std::fs;

use anyhow::Result;
use tempfile::TempDir;

use crate::models::{TransactionRecord, TransferRecord};
use crate::types::Tinybar;

fn record(timestamp: &str, id: &str, transfers: &[(&str, i64)]) -> TransactionRecord {
    TransactionRecord {
        consensus_timestamp: timestamp.to_string(),
        transaction_id: id.to_string(),
        transfers: transfers.iter()
            .map(|(account, amount)| TransferRecord { account: account.to_string(), amount: Tinybar::new(*amount) })
            .collect()
    }
}

fn sample_records() -> Vec<TransactionRecord> {
    vec![
        record("2023-11-14T22:13:20", "tx-1", &[("0.0.1001", -150_000_000), ("0.0.2002", 150_000_000)]),
        record("2023-11-14T22:13:19", "tx-2", &[]),
        record("2023-11-14T22:13:18.500000", "tx-3", &[("0.0.1001", -123_456_789_012), ("0.0.98", 123_456_789_012), ("0.0.3003", 0)]),
    ]
}

#[test]
fn test_flatten_emits_one_row_per_transfer() {
    let rows = flatten(&sample_records());

    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0], FlatRow {
        consensus_timestamp: "2023-11-14T22:13:20".to_string(),
        transaction_id: "tx-1".to_string(),
        account: "0.0.1001".to_string(),
        amount: Tinybar::new(-150_000_000)
    });
    assert!(rows.iter().all(|row| row.transaction_id != "tx-2"));
    assert_eq!(rows[4].transaction_id, "tx-3");
    assert_eq!(rows[4].account, "0.0.3003");
}

#[test]
fn test_primary_file_has_fixed_header_and_formatted_amounts() -> Result<()> {
    let directory = TempDir::new()?;
    let rows = flatten(&sample_records());

    let path = write_primary(directory.path(), "0.0.1001", &rows)?;

    assert_eq!(path, directory.path().join("0.0.1001.csv"));

    let content = fs::read_to_string(&path)?;
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines[0], "consensus_timestamp,transaction_id,account,amount");
    assert_eq!(lines[1], "2023-11-14T22:13:20,tx-1,0.0.1001,-1.50000000");
    assert_eq!(lines[3], "2023-11-14T22:13:18.500000,tx-3,0.0.1001,\"-1,234.56789012\"");
    assert_eq!(lines[5], "2023-11-14T22:13:18.500000,tx-3,0.0.3003,0.00000000");
    assert_eq!(lines.len(), 6);

    Ok(())
}

#[test]
fn test_primary_file_without_rows_contains_only_header() -> Result<()> {
    let directory = TempDir::new()?;

    let path = write_primary(directory.path(), "0.0.1001", &[])?;

    assert_eq!(fs::read_to_string(path)?, "consensus_timestamp,transaction_id,account,amount\n");

    Ok(())
}

#[test]
fn test_primary_file_overwrites_previous_run() -> Result<()> {
    let directory = TempDir::new()?;
    let rows = flatten(&sample_records());

    write_primary(directory.path(), "0.0.1001", &rows)?;
    let path = write_primary(directory.path(), "0.0.1001", &rows[..1])?;

    assert_eq!(fs::read_to_string(path)?.lines().count(), 2);

    Ok(())
}

#[test]
fn test_filtered_file_keeps_only_exact_cell_matches() -> Result<()> {
    let directory = TempDir::new()?;
    let rows = flatten(&sample_records());
    let primary = write_primary(directory.path(), "0.0.1001", &rows)?;

    let filtered = write_filtered(directory.path(), "0.0.1001", &primary, "0.0.98")?;

    assert_eq!(filtered, directory.path().join("filtered_0.0.1001.csv"));

    let content = fs::read_to_string(filtered)?;

    assert_eq!(content, "consensus_timestamp,transaction_id,account,amount\n2023-11-14T22:13:18.500000,tx-3,0.0.98,\"1,234.56789012\"\n");

    Ok(())
}

#[test]
fn test_filtered_file_matches_any_column_including_unquoted_amounts() -> Result<()> {
    let directory = TempDir::new()?;
    let primary = write_primary(directory.path(), "0.0.1001", &flatten(&sample_records()))?;

    let by_transaction = write_filtered(directory.path(), "0.0.1001", &primary, "tx-1")?;

    assert_eq!(fs::read_to_string(&by_transaction)?.lines().count(), 3);

    let by_amount = write_filtered(directory.path(), "0.0.1001", &primary, "-1,234.56789012")?;
    let lines: Vec<String> = fs::read_to_string(&by_amount)?.lines().map(String::from).collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[1].contains("tx-3,0.0.1001"));

    Ok(())
}

#[test]
fn test_filtered_file_is_sound_and_complete() -> Result<()> {
    let directory = TempDir::new()?;
    let primary = write_primary(directory.path(), "0.0.1001", &flatten(&sample_records()))?;

    let filtered = write_filtered(directory.path(), "0.0.1001", &primary, "0.0.1001")?;
    let primary_content = fs::read_to_string(&primary)?;
    let filtered_content = fs::read_to_string(&filtered)?;

    let expected: Vec<&str> = primary_content.lines().skip(1)
        .filter(|line| line.split(',').any(|cell| cell == "0.0.1001"))
        .collect();
    let actual: Vec<&str> = filtered_content.lines().skip(1).collect();

    assert_eq!(filtered_content.lines().next(), primary_content.lines().next());
    assert_eq!(actual, expected);
    assert_eq!(actual.len(), 2);

    Ok(())
}

#[test]
fn test_filtered_file_rejects_substring_matches() -> Result<()> {
    let directory = TempDir::new()?;
    let primary = write_primary(directory.path(), "0.0.1001", &flatten(&sample_records()))?;

    let filtered = write_filtered(directory.path(), "0.0.1001", &primary, "0.0.100")?;

    assert_eq!(fs::read_to_string(filtered)?, "consensus_timestamp,transaction_id,account,amount\n");

    Ok(())
}
