//! Output helpers for CLI commands

use jubamodel::render_json;
use serde::Serialize;

use crate::cli::utils::CliResult;

pub fn print_error(message: &str) {
    eprintln!("[ERROR] {}", message);
}

pub fn print_warning(message: &str) {
    eprintln!("[WARN] {}", message);
}

/// Print records as JSON: one object for a single record, an array otherwise
pub fn print_json_records<T: Serialize>(records: &[T], pretty: bool) -> CliResult<()> {
    println!("{}", render_json(records, pretty)?);
    Ok(())
}
