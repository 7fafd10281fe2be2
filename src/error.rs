use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("the file is too small: {} has {actual} bytes, a model header needs {required}", .path.display())]
    FileTooSmall {
        path: PathBuf,
        actual: usize,
        required: usize,
    },

    #[error("header buffer too short: got {len} bytes, need {required}")]
    TooShort { len: usize, required: usize },

    #[error("invalid version format: {0:?} doesn't contain three numbers")]
    InvalidVersionFormat(String),

    #[error("invalid version number {token:?}: {reason}")]
    InvalidVersionNumber { token: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    pub fn error_code(&self) -> i32 {
        match self {
            Error::Io(_) => -1,
            Error::FileTooSmall { .. } => -2,
            Error::TooShort { .. } => -3,
            Error::InvalidVersionFormat(_) => -4,
            Error::InvalidVersionNumber { .. } => -5,
            Error::Config(_) => -6,
            Error::Serialization(_) => -7,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
