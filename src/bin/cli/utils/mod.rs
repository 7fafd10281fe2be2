//! Shared helpers for CLI commands

pub mod display;
pub mod error;

pub use display::*;
pub use error::*;

pub type CliResult<T> = Result<T, CliError>;
