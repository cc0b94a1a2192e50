//! JSON array sink for listing records

use crate::extract::ListingRecord;
use crate::OutputResult;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Writes the records as one flat JSON array
///
/// # Arguments
///
/// * `path` - Destination file; created or truncated
/// * `records` - The listings, in the order they should appear
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote the file
/// * `Err(OutputError)` - Failed to create or write the file
pub fn write_listings(path: &Path, records: &[ListingRecord]) -> OutputResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut writer, records)?;
    writer.flush()?;

    tracing::info!("Wrote {} listings to {}", records.len(), path.display());
    Ok(())
}

/// Reads a JSON array previously written by [`write_listings`]
pub fn load_listings(path: &Path) -> OutputResult<Vec<ListingRecord>> {
    let reader = BufReader::new(File::open(path)?);
    let records: Vec<ListingRecord> = serde_json::from_reader(reader)?;

    tracing::debug!("Loaded {} listings from {}", records.len(), path.display());
    Ok(records)
}
