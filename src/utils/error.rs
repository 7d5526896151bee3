use std::{io, path::PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum TagError {
    #[error("Error reading stop words file: {source}")]
    ReadStopWords { path: PathBuf, source: io::Error },
    #[error("Error reading file: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("Error saving file: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("Please select a stop words file first.")]
    StopWordsNotLoaded,
    #[error("No tags to save. Please select and process a text file first.")]
    NoResults,
}

impl TagError {
    /// True for misuse of the session (wrong call order), false for I/O failures.
    pub fn is_usage(&self) -> bool {
        matches!(self, TagError::StopWordsNotLoaded | TagError::NoResults)
    }
}
