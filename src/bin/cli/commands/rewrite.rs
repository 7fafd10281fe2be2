//! Producer version rewrite command

use clap::{Arg, ArgMatches, Command};

use crate::cli::utils::CliResult;
use crate::cli::{chunk_size_arg, rewriter_from_matches};

/// Build the 'rewrite-version' subcommand
pub fn rewrite_version_command() -> Command {
    Command::new("rewrite-version")
        .about("Rewrite a Jubatus version of the given model file")
        .after_help("Example:\n    $ jubamodel rewrite-version /path/to/classifier.model 0.5.8")
        .arg(
            Arg::new("file")
                .help("Model file, patched in place")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("version")
                .help("New version as <major>.<minor>.<maintenance>")
                .required(true)
                .index(2),
        )
        .arg(chunk_size_arg())
}

/// Execute the 'rewrite-version' command
pub fn run_rewrite_version(matches: &ArgMatches) -> CliResult<()> {
    let file = matches
        .get_one::<String>("file")
        .ok_or("file argument is required")?;
    let version = matches
        .get_one::<String>("version")
        .ok_or("version argument is required")?;

    let rewriter = rewriter_from_matches(matches)?;
    let header = rewriter.rewrite_str(file, version)?;

    tracing::info!(
        path = %file,
        version = %header.producer_version,
        crc32 = header.checksum,
        "model rewritten"
    );
    Ok(())
}
