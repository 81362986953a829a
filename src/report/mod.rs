pub mod json;
pub mod md;

use crate::error::VersusError;
use crate::types::report::ComparisonReport;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(report: &ComparisonReport, format: OutputFormat) -> Result<String, VersusError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(VersusError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}
