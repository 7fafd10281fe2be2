//! Model file integrity: checksum streaming and in-place header rewrite
//!
//! The free functions use [`RewriteConfig::default`]; build an
//! [`IntegrityRewriter`] to pick a different chunk size.

pub mod checksum;
pub mod rewriter;

pub use checksum::compute_checksum;
pub use rewriter::{IntegrityRewriter, Verification};

use crate::config::RewriteConfig;
use crate::core::{Header, ProducerVersion};
use crate::error::Result;
use std::path::Path;

pub fn inspect<P: AsRef<Path>>(path: P) -> Result<Header> {
    IntegrityRewriter::new(RewriteConfig::default())?.inspect(path)
}

pub fn rewrite<P: AsRef<Path>>(path: P, version: ProducerVersion) -> Result<Header> {
    IntegrityRewriter::new(RewriteConfig::default())?.rewrite(path, version)
}

pub fn verify<P: AsRef<Path>>(path: P) -> Result<Verification> {
    IntegrityRewriter::new(RewriteConfig::default())?.verify(path)
}
