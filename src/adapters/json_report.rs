//! JSON report adapter implementing ReportPort.

use crate::domain::analysis::AnalysisReport;
use crate::domain::error::FolioscopeError;
use crate::ports::report_port::ReportPort;

pub struct JsonReportAdapter;

impl JsonReportAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReportAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportPort for JsonReportAdapter {
    fn render(&self, report: &AnalysisReport) -> Result<String, FolioscopeError> {
        serde_json::to_string_pretty(report).map_err(|e| FolioscopeError::Report {
            reason: format!("JSON serialization failed: {}", e),
        })
    }
}
