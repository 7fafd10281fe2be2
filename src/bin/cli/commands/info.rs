//! Model header inspection command

use clap::{Arg, ArgMatches, Command};
use jubamodel::{IntegrityRewriter, ModelInfo};

use crate::cli::utils::{print_json_records, print_warning, CliResult};

/// Build the 'info' subcommand
pub fn info_command() -> Command {
    Command::new("info")
        .about("Show information of model files")
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
        .arg(
            Arg::new("skip-invalid")
                .help("Skip files that cannot be read or are not Jubatus models")
                .long("skip-invalid")
                .action(clap::ArgAction::SetTrue),
        )
}

/// Execute the 'info' command
pub fn run_info(matches: &ArgMatches) -> CliResult<()> {
    let files: Vec<&String> = matches
        .get_many::<String>("files")
        .ok_or("files argument is required")?
        .collect();
    let pretty = matches.get_flag("pretty");
    let skip_invalid = matches.get_flag("skip-invalid");

    let rewriter = IntegrityRewriter::default();
    let mut models = Vec::with_capacity(files.len());

    for file in files {
        match ModelInfo::load(&rewriter, file) {
            Ok(model) if skip_invalid && !model.header.has_known_magic() => {
                print_warning(&format!("skipping {}: not a Jubatus model", file));
            }
            Ok(model) => models.push(model),
            Err(e) if skip_invalid => {
                print_warning(&format!("skipping {}: {}", file, e));
            }
            Err(e) => return Err(e.into()),
        }
    }

    print_json_records(&models, pretty)
}
