mod cli;

use cli::utils::print_error;

fn main() {
    let matches = cli::build_cli().get_matches();

    if let Err(e) = cli::run(matches) {
        print_error(&e.to_string());
        std::process::exit(e.exit_code());
    }
}
