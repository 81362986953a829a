use crate::types::report::ComparisonReport;

pub fn to_json(report: &ComparisonReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
