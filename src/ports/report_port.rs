//! Report rendering port trait.

use crate::domain::analysis::AnalysisReport;
use crate::domain::error::FolioscopeError;

/// Port for turning an analysis report into output text.
pub trait ReportPort {
    fn render(&self, report: &AnalysisReport) -> Result<String, FolioscopeError>;
}
