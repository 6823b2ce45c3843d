//! Error types shared by the task store, the draft editor and configuration loading.

use std::path::PathBuf;

use thiserror::Error;

use crate::task::TaskId;

/// Errors raised by to-do operations.
#[derive(Debug, Error)]
pub enum TodoError {
    /// A required draft field was empty or whitespace-only at commit time.
    #[error("{field} must not be empty")]
    EmptyRequiredField { field: &'static str },

    /// The task was deleted after the caller captured its id.
    #[error("task {0} no longer exists")]
    UnknownTask(TaskId),

    #[error("failed to load config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: ConfigSource,
    },

    /// Terminal setup, drawing or event polling failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Underlying cause of a configuration failure.
#[derive(Debug, Error)]
pub enum ConfigSource {
    #[error(transparent)]
    Read(#[from] std::io::Error),
    #[error(transparent)]
    Parse(#[from] toml::de::Error),
}

impl TodoError {
    /// Whether this error is the empty-field validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, TodoError::EmptyRequiredField { .. })
    }
}

pub type Result<T, E = TodoError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn test_io_errors_convert_and_are_not_validation() {
        fn draw() -> Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "tty closed"))?;
            Ok(())
        }
        let err = draw().unwrap_err();
        assert!(matches!(err, TodoError::Io(_)));
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "terminal I/O failed: tty closed");
    }

    #[test]
    fn test_empty_field_message() {
        let err = TodoError::EmptyRequiredField { field: "task name" };
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "task name must not be empty");
    }
}
