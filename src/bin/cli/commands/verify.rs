//! Checksum verification command

use clap::{Arg, ArgMatches, Command};
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::utils::{print_json_records, CliError, CliResult};
use crate::cli::{chunk_size_arg, rewriter_from_matches};

#[derive(Debug, Serialize)]
struct VerifyRecord {
    path: PathBuf,
    stored_crc32: u32,
    computed_crc32: u32,
    valid: bool,
}

/// Build the 'verify' subcommand
pub fn verify_command() -> Command {
    Command::new("verify")
        .about("Recompute the CRC32 of model files and compare it with the header")
        .arg(
            Arg::new("files")
                .help("Model files")
                .required(true)
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("pretty")
                .help("Indent JSON output")
                .long("pretty")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(chunk_size_arg())
}

/// Execute the 'verify' command
pub fn run_verify(matches: &ArgMatches) -> CliResult<()> {
    let files: Vec<&String> = matches
        .get_many::<String>("files")
        .ok_or("files argument is required")?
        .collect();
    let pretty = matches.get_flag("pretty");

    let rewriter = rewriter_from_matches(matches)?;
    let mut records = Vec::with_capacity(files.len());

    for file in files {
        let verification = rewriter.verify(file)?;
        records.push(VerifyRecord {
            path: std::path::absolute(file)?,
            stored_crc32: verification.stored,
            computed_crc32: verification.computed,
            valid: verification.is_valid(),
        });
    }

    print_json_records(&records, pretty)?;

    let mismatched = records.iter().filter(|r| !r.valid).count();
    if mismatched > 0 {
        return Err(CliError::IntegrityFailed(format!(
            "{} of {} files have a mismatching checksum",
            mismatched,
            records.len()
        )));
    }
    Ok(())
}
