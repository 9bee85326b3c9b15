//! Error types for the bulk upload engine
//!
//! The validator itself never fails: malformed input becomes data in the
//! returned preview. The only fallible operation is reading the selected
//! file's text, so the error surface here is deliberately small.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: file not found, permission denied, non-UTF-8
//!   content, disk failures

use thiserror::Error;

/// Main error type for the bulk upload engine
///
/// Produced only at the file-read boundary. Callers that need the
/// uniform preview shape convert these into a preview carrying the
/// failure message, so the rendering layer never sees a thrown error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UploadError {
    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading the selected file
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },
}

impl UploadError {
    /// Classify a read failure for the given path
    ///
    /// Not-found errors keep the offending path in the message; every
    /// other failure carries the underlying description.
    pub fn from_read(path: &std::path::Path, error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            UploadError::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            UploadError::IoError {
                message: error.to_string(),
            }
        }
    }
}

// Conversion from io::Error to UploadError
impl From<std::io::Error> for UploadError {
    fn from(error: std::io::Error) -> Self {
        UploadError::IoError {
            message: error.to_string(),
        }
    }
}
