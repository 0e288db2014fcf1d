use crate::application::read_models::ReportView;
use crate::shared::Result;

/// ReportFormatter port for rendering analysis reports
///
/// This port abstracts the rendering logic for the different output formats
/// (report JSON, executive-summary Markdown, etc.).
pub trait ReportFormatter {
    /// Renders a report using the unified read model
    ///
    /// # Arguments
    /// * `view` - The report read model containing scan metadata, summary
    ///   figures and the ranked distributions
    ///
    /// # Returns
    /// Formatted report content as a string
    ///
    /// # Errors
    /// Returns an error if rendering or serialization fails
    fn format(&self, view: &ReportView) -> Result<String>;
}
