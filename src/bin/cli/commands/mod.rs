//! CLI command modules
//!
//! - info: decode and print model headers
//! - rewrite: change the producer version in place
//! - verify: recompute and compare stored checksums

pub mod info;
pub mod rewrite;
pub mod verify;
