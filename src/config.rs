//! Configuration for checksum streaming

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Environment variable overriding [`RewriteConfig::chunk_size`]
pub const CHUNK_SIZE_ENV: &str = "JUBAMODEL_CHUNK_SIZE";

pub const DEFAULT_CHUNK_SIZE: usize = 4 * 1024 * 1024;
pub const MAX_CHUNK_SIZE: usize = 256 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteConfig {
    /// Bytes read per step while streaming the trailing sections
    pub chunk_size: usize,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl RewriteConfig {
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Defaults overridden by `JUBAMODEL_CHUNK_SIZE` when it is set
    pub fn from_env() -> Result<Self> {
        match std::env::var(CHUNK_SIZE_ENV) {
            Ok(value) => {
                let chunk_size = value.trim().parse::<usize>().map_err(|e| {
                    Error::Config(format!("{}={:?}: {}", CHUNK_SIZE_ENV, value, e))
                })?;
                let config = Self::default().with_chunk_size(chunk_size);
                config.validate()?;
                Ok(config)
            }
            Err(std::env::VarError::NotPresent) => Ok(Self::default()),
            Err(e) => Err(Error::Config(format!("{}: {}", CHUNK_SIZE_ENV, e))),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(Error::Config("chunk_size must be at least 1 byte".to_string()));
        }
        if self.chunk_size > MAX_CHUNK_SIZE {
            return Err(Error::Config(format!(
                "chunk_size ({} bytes) exceeds maximum ({} bytes)",
                self.chunk_size, MAX_CHUNK_SIZE
            )));
        }
        Ok(())
    }
}
