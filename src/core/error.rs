//! Fatal errors raised while generating the messages script.
//!
//! Every variant aborts the run: the generator never produces partial output.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    /// The translations directory does not exist.
    #[error("Translations directory '{}' does not exist", .0.display())]
    SourceNotFound(PathBuf),

    /// The translations path exists but is a file.
    #[error("'{}' is not a directory", .0.display())]
    SourceNotDirectory(PathBuf),

    /// Walking the translations directory failed.
    #[error("Failed to read '{}'", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// A translation file could not be read.
    #[error("Failed to read '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A translation file is not valid structured data.
    #[error("Failed to parse '{}': {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    /// The output template is corrupted.
    #[error("Template must contain placeholder {placeholder} exactly once (found {occurrences})")]
    Template {
        placeholder: &'static str,
        occurrences: usize,
    },

    /// The aggregate mapping could not be serialized.
    #[error("Failed to serialize messages")]
    Serialize(#[from] serde_json::Error),
}

impl GenerateError {
    pub fn parse(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        GenerateError::Parse {
            path: path.into(),
            message: message.to_string(),
        }
    }
}
