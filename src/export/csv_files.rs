use csv::{ReaderBuilder, Terminator, WriterBuilder};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::export::{ExportError, FlatRow};

/// Writes every row to `<dir>/<account_id>.csv`, replacing any previous file.
///
/// The header is written even when there are no rows.
pub fn write_primary(dir: &Path, account_id: &str, rows: &[FlatRow]) -> Result<PathBuf, ExportError> {
    let path = dir.join(format!("{account_id}.csv"));

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_path(&path)?;

    writer.write_record(FlatRow::HEADER)?;

    for row in rows {
        writer.serialize(row)?;
    }

    writer.flush()?;
    info!("Wrote {} rows to {}", rows.len(), path.display());

    Ok(path)
}

/// Re-reads `primary` and writes `<dir>/filtered_<account_id>.csv` holding its
/// header plus every data row with at least one cell equal to `match_string`.
pub fn write_filtered(dir: &Path, account_id: &str, primary: &Path, match_string: &str) -> Result<PathBuf, ExportError> {
    let path = dir.join(format!("filtered_{account_id}.csv"));

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(primary)?;

    let mut writer = WriterBuilder::new()
        .flexible(true)
        .terminator(Terminator::Any(b'\n'))
        .from_path(&path)?;

    let mut records = reader.records();
    let mut kept = 0;

    if let Some(header) = records.next() {
        writer.write_record(&header?)?;
    }

    for record in records {
        let record = record?;

        if record.iter().any(|cell| cell == match_string) {
            writer.write_record(&record)?;
            kept += 1;
        }
    }

    writer.flush()?;
    info!("Wrote {kept} rows matching [{match_string}] to {}", path.display());

    Ok(path)
}
