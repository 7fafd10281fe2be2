//! Inspect and patch the fixed header of Jubatus model files.
//!
//! A model file is a 48-byte big-endian [`Header`] followed by two opaque
//! sections. The header carries a CRC32 over everything except its own
//! checksum field, so changing the producer version means recomputing that
//! checksum over the whole file. [`IntegrityRewriter`] does this by streaming
//! the file in bounded chunks and then overwriting only the header span.

pub mod config;
pub mod core;
pub mod error;
pub mod integrity;
pub mod logging;
pub mod model;

pub use crate::config::RewriteConfig;
pub use crate::core::{Header, ProducerVersion, RawHeaderBytes, HEADER_SIZE};
pub use crate::error::{Error, Result};
pub use crate::integrity::{inspect, rewrite, verify, IntegrityRewriter, Verification};
pub use crate::model::{render_json, HeaderInfo, ModelInfo};
