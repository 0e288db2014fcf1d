use crate::adapters::outbound::formatters::{JsonReportFormatter, MarkdownSummaryFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters
///
/// Encapsulates the creation logic for the formatter implementations,
/// following the Factory Pattern. It belongs in the application layer as it
/// orchestrates the selection of infrastructure adapters based on
/// application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Returns
    /// A boxed ReportFormatter trait object appropriate for the format
    pub fn create(format: OutputFormat) -> Box<dyn ReportFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonReportFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownSummaryFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Generating JSON report output...",
            OutputFormat::Markdown => "📝 Generating Markdown executive summary...",
        }
    }
}
