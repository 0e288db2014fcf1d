use crate::shared::Result;

/// OutputPresenter port for delivering formatted output
///
/// This port abstracts the final destination of rendered content
/// (stdout, a file on disk, etc.).
pub trait OutputPresenter {
    /// Presents the formatted content to its destination
    ///
    /// # Errors
    /// Returns an error if the content cannot be delivered (e.g. the target
    /// file is not writable)
    fn present(&self, content: &str) -> Result<()>;
}
