//! jubamodel CLI
//!
//! Inspect, verify and rewrite Jubatus model file headers. Records are
//! printed to stdout as JSON; logs and diagnostics go to stderr.

pub mod commands;
pub mod utils;

use clap::{Arg, ArgMatches, Command};
use jubamodel::logging;
use jubamodel::{IntegrityRewriter, RewriteConfig};

use crate::cli::utils::{CliError, CliResult};

/// Options shared by every subcommand
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    pub log_level: String,
    pub log_json: bool,
}

impl GlobalOptions {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let log_level = matches
            .get_one::<String>("log-level")
            .cloned()
            .unwrap_or_else(|| "warn".to_string());

        GlobalOptions {
            log_level,
            log_json: matches.get_flag("log-json"),
        }
    }
}

pub fn build_cli() -> Command {
    Command::new("jubamodel")
        .about("Inspect and patch Jubatus model file headers")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("log-level")
                .help("Log level written to stderr (RUST_LOG takes precedence)")
                .long("log-level")
                .global(true)
                .value_parser(["error", "warn", "info", "debug", "trace"])
                .default_value("warn"),
        )
        .arg(
            Arg::new("log-json")
                .help("Write logs as JSON lines")
                .long("log-json")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .subcommand(commands::info::info_command())
        .subcommand(commands::rewrite::rewrite_version_command())
        .subcommand(commands::verify::verify_command())
}

pub fn run(matches: ArgMatches) -> CliResult<()> {
    let global = GlobalOptions::from_matches(&matches);
    let level = logging::parse_level(&global.log_level)?;
    logging::init_logging(level, global.log_json)?;

    match matches.subcommand() {
        Some(("info", sub)) => commands::info::run_info(sub),
        Some(("rewrite-version", sub)) => commands::rewrite::run_rewrite_version(sub),
        Some(("verify", sub)) => commands::verify::run_verify(sub),
        _ => Err(CliError::Usage(
            "Unknown command. Use --help for available commands.".to_string(),
        )),
    }
}

/// `--chunk-size` argument shared by commands that stream the file
pub fn chunk_size_arg() -> Arg {
    Arg::new("chunk-size")
        .help("Bytes read per step while checksumming (default: $JUBAMODEL_CHUNK_SIZE or 4 MiB)")
        .long("chunk-size")
        .value_name("BYTES")
        .value_parser(clap::value_parser!(usize))
}

/// Rewriter configured from the environment, then `--chunk-size`
pub fn rewriter_from_matches(matches: &ArgMatches) -> CliResult<IntegrityRewriter> {
    let mut config = RewriteConfig::from_env()?;
    if let Some(chunk_size) = matches.get_one::<usize>("chunk-size") {
        config = config.with_chunk_size(*chunk_size);
    }
    Ok(IntegrityRewriter::new(config)?)
}
