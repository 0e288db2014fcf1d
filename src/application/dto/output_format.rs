/// Output formats supported by the application layer.
///
/// This is the application-internal format type; the CLI maps its own
/// user-facing format argument onto it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Analysis report as a JSON document
    Json,
    /// Executive summary as a Markdown document
    Markdown,
}
