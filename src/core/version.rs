//! Producer version triple stored in the model header

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Version of the Jubatus server that wrote a model file
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct ProducerVersion {
    pub major: u32,
    pub minor: u32,
    pub maintenance: u32,
}

impl ProducerVersion {
    pub const fn new(major: u32, minor: u32, maintenance: u32) -> Self {
        Self {
            major,
            minor,
            maintenance,
        }
    }

    /// Parse `"<major>.<minor>.<maintenance>"`.
    ///
    /// The token count is checked before any token is parsed, so `"1.2"` is a
    /// format error even though both tokens are numbers.
    pub fn parse(version: &str) -> Result<Self> {
        let tokens: Vec<&str> = version.split('.').collect();
        if tokens.len() != 3 {
            return Err(Error::InvalidVersionFormat(version.to_string()));
        }

        let mut parts = [0u32; 3];
        for (slot, token) in parts.iter_mut().zip(&tokens) {
            *slot = parse_component(token)?;
        }

        Ok(Self::new(parts[0], parts[1], parts[2]))
    }
}

fn parse_component(token: &str) -> Result<u32> {
    // u32::from_str would accept a leading '+'
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidVersionNumber {
            token: token.to_string(),
            reason: "not a non-negative decimal integer".to_string(),
        });
    }
    token.parse::<u32>().map_err(|e| Error::InvalidVersionNumber {
        token: token.to_string(),
        reason: e.to_string(),
    })
}

impl FromStr for ProducerVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ProducerVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.maintenance)
    }
}

impl From<(u32, u32, u32)> for ProducerVersion {
    fn from((major, minor, maintenance): (u32, u32, u32)) -> Self {
        Self::new(major, minor, maintenance)
    }
}
