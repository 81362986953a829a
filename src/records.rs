use crate::error::{Result, VersusError};
use crate::types::record::SpecRecord;
use std::path::Path;
use tracing::debug;

/// Reads one specification record from a JSON file.
pub fn load_record(path: &Path) -> Result<SpecRecord> {
    if !path.exists() {
        return Err(VersusError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let record = parse_record(&content)
        .map_err(|e| VersusError::RecordParse(format!("{}: {}", path.display(), e)))?;
    debug!(
        path = %path.display(),
        label = %record.label,
        categories = record.specs.len(),
        "record loaded"
    );
    Ok(record)
}

pub fn parse_record(content: &str) -> Result<SpecRecord> {
    let record: SpecRecord = serde_json::from_str(content)?;
    if record.label.trim().is_empty() {
        return Err(VersusError::RecordParse("label must be non-empty".to_string()));
    }
    Ok(record)
}
