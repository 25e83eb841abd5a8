use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use super::generator::ProjectRecord;

/// Serialize records as CSV. The header row comes from the
/// `ProjectRecord` field order, which is the downstream contract.
pub fn write_csv<W: Write>(records: &[ProjectRecord], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer
            .serialize(record)
            .context("Failed to serialize dataset record")?;
    }
    csv_writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}

pub fn write_csv_file(records: &[ProjectRecord], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create output file at {}", path.display()))?;
    write_csv(records, file)
}
