use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading, parsing or rewriting the shared content store.
///
/// Every variant renders a human-readable cause; the conversation layer
/// forwards it to the user verbatim before resetting the session.
#[derive(Error, Debug)]
pub enum ContentStoreError {
    /// Reading or writing the store file (or one of its backups) failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store file does not have the expected shape
    #[error("Malformed content store: {0}")]
    Malformed(String),

    /// The cards field is not valid JSON
    #[error("Malformed content store: cards field is not valid JSON ({0})")]
    Json(#[from] serde_json::Error),
}

impl ContentStoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Failures while persisting an uploaded media file.
#[derive(Error, Debug)]
pub enum MediaError {
    /// The chat platform could not deliver the file
    #[error("Download failed: {0}")]
    Download(String),

    /// Writing the media file or its sidecar failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised outside a single upload: startup checks and access control
///
/// Invalid answers inside the conversation are never surfaced through this
/// type; they are answered with a re-prompt instead.
#[derive(Error, Debug)]
pub enum AppError {
    /// Content store errors
    #[error(transparent)]
    ContentStore(#[from] ContentStoreError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The sender is not on the allow-list
    #[error("User {0} is not authorized")]
    Unauthorized(i64),
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_store_error_display_names_the_cause() {
        let err = ContentStoreError::Malformed("field `Cardscontent` not found".to_string());
        assert_eq!(
            err.to_string(),
            "Malformed content store: field `Cardscontent` not found"
        );
    }

    #[test]
    fn test_io_error_includes_path() {
        let err = ContentStoreError::io(
            "/srv/content/site.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        let text = err.to_string();
        assert!(text.contains("/srv/content/site.txt"));
        assert!(text.contains("gone"));
    }

    #[test]
    fn test_app_error_is_transparent_for_store_errors() {
        let err: AppError = ContentStoreError::Malformed("x".to_string()).into();
        assert_eq!(err.to_string(), "Malformed content store: x");
    }

    #[test]
    fn test_unauthorized_names_the_user() {
        assert_eq!(AppError::Unauthorized(77).to_string(), "User 77 is not authorized");
    }
}
