use std::fmt;

/// The error type for the file and typed-access layers.
///
/// Parsing itself never fails: `parser::parse` always returns a `Document`,
/// falling back to partial or default-valued entries on malformed input.
/// `CfgError` only shows up around the edges, where a file cannot be read or
/// a value cannot be converted to the requested type.
#[derive(Debug, Clone, PartialEq)]
pub enum CfgError {
    /// Raised when a config file cannot be read or written.
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
    },
    /// Raised when a value cannot be converted to the requested type.
    TypeError {
        message: String,
        hint: Option<String>,
    },
    /// Raised when a section or variable path does not exist.
    NotFound {
        path: String,
        hint: Option<String>,
    },
}

impl fmt::Display for CfgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CfgError::FileError { message, path, hint } => write!(
                f,
                "[CFG] File Error '{}': {}{}",
                path,
                message,
                hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h))
            ),
            CfgError::TypeError { message, hint } => write!(
                f,
                "[CFG] Type Error: {}{}",
                message,
                hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h))
            ),
            CfgError::NotFound { path, hint } => write!(
                f,
                "[CFG] Path '{}' not found{}",
                path,
                hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h))
            ),
        }
    }
}

impl std::error::Error for CfgError {}

impl CfgError {
    /// Helper for file-related errors with a consistent default hint.
    pub fn file_error(message: String, path: String) -> Self {
        CfgError::FileError {
            message,
            path,
            hint: Some("Check file path and permissions".into()),
        }
    }
}
