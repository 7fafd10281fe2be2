//! CLI error type and exit codes

use std::fmt;

pub mod exit_codes {
    pub const USAGE_ERROR: i32 = 2;
    pub const NOT_FOUND: i32 = 3;
    pub const VALIDATION_ERROR: i32 = 5;
    pub const PERMISSION_DENIED: i32 = 6;
    pub const IO_ERROR: i32 = 7;
    pub const INVALID_MODEL: i32 = 8;
    pub const INTEGRITY_FAILED: i32 = 10;
}

#[derive(Debug)]
pub enum CliError {
    /// Bad command line
    Usage(String),
    /// Model file does not exist
    NotFound(String),
    /// Bad version string or configuration
    Validation(String),
    Io(String),
    PermissionDenied(String),
    /// File is not a readable model (too small, bad magic)
    InvalidModel(String),
    /// Stored checksum does not match the content
    IntegrityFailed(String),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => exit_codes::USAGE_ERROR,
            CliError::NotFound(_) => exit_codes::NOT_FOUND,
            CliError::Validation(_) => exit_codes::VALIDATION_ERROR,
            CliError::Io(_) => exit_codes::IO_ERROR,
            CliError::PermissionDenied(_) => exit_codes::PERMISSION_DENIED,
            CliError::InvalidModel(_) => exit_codes::INVALID_MODEL,
            CliError::IntegrityFailed(_) => exit_codes::INTEGRITY_FAILED,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{}", msg),
            CliError::NotFound(msg) => write!(f, "Model file not found: {}", msg),
            CliError::Validation(msg) => write!(f, "Validation error: {}", msg),
            CliError::Io(msg) => write!(f, "IO error: {}", msg),
            CliError::PermissionDenied(msg) => write!(f, "Permission denied: {}", msg),
            CliError::InvalidModel(msg) => write!(f, "Cannot read a model file: {}", msg),
            CliError::IntegrityFailed(msg) => write!(f, "Integrity check failed: {}", msg),
        }
    }
}

impl std::error::Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => CliError::NotFound(err.to_string()),
            std::io::ErrorKind::PermissionDenied => CliError::PermissionDenied(err.to_string()),
            _ => CliError::Io(err.to_string()),
        }
    }
}

impl From<&str> for CliError {
    fn from(msg: &str) -> Self {
        CliError::Usage(msg.to_string())
    }
}

impl From<jubamodel::Error> for CliError {
    fn from(err: jubamodel::Error) -> Self {
        use jubamodel::Error;

        match err {
            Error::Io(e) => CliError::from(e),
            Error::FileTooSmall { .. } | Error::TooShort { .. } => {
                CliError::InvalidModel(err.to_string())
            }
            Error::InvalidVersionFormat(_)
            | Error::InvalidVersionNumber { .. }
            | Error::Config(_) => CliError::Validation(err.to_string()),
            Error::Serialization(msg) => CliError::Io(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::NotFound("x".to_string()).exit_code(), exit_codes::NOT_FOUND);
        assert_eq!(
            CliError::IntegrityFailed("x".to_string()).exit_code(),
            exit_codes::INTEGRITY_FAILED
        );
        assert_ne!(CliError::Usage("x".to_string()).exit_code(), 0);
    }

    #[test]
    fn test_from_library_error() {
        let err: CliError = jubamodel::Error::InvalidVersionFormat("1.2".to_string()).into();
        assert!(matches!(err, CliError::Validation(_)));

        let err: CliError = jubamodel::Error::FileTooSmall {
            path: PathBuf::from("a.model"),
            actual: 3,
            required: 48,
        }
        .into();
        assert!(matches!(err, CliError::InvalidModel(_)));

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: CliError = jubamodel::Error::Io(io).into();
        assert!(matches!(err, CliError::NotFound(_)));
    }
}
