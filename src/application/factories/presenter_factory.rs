use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use std::path::PathBuf;

/// Factory for creating output presenters
///
/// Selects between file and stdout delivery based on whether the caller
/// supplied an output path.
pub struct PresenterFactory;

impl PresenterFactory {
    /// Creates a presenter for the optional output path
    ///
    /// # Returns
    /// A FileSystemWriter when a path is given, a StdoutPresenter otherwise
    pub fn create(output_path: Option<PathBuf>) -> Box<dyn OutputPresenter> {
        match output_path {
            Some(path) => Box::new(FileSystemWriter::new(path)),
            None => Box::new(StdoutPresenter::new()),
        }
    }
}
