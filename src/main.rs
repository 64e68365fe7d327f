use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;

use hublfix::log_status;
use hublfix::rewrite::{self, TEMPLATE_SUFFIX};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "hublfix")]
#[command(version = VERSION)]
#[command(about = "Migrate HubL template module paths to snake_case")]
struct Cli {
    /// Theme directory to scan for templates
    base_path: PathBuf,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            if matches!(
                err.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ) {
                err.exit();
            }
            // Wrong argument shape: usage goes to stdout, exit 1
            print!("{}", err.render());
            return ExitCode::from(1);
        }
    };

    log_status!(
        "rewrite",
        "Scanning {} for *{} templates",
        cli.base_path.display(),
        TEMPLATE_SUFFIX
    );

    match rewrite::process(&cli.base_path) {
        Ok(updated) => {
            println!("Updated files:");
            for path in &updated {
                println!("{}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error[{}]: {}", err.code(), err);
            ExitCode::from(1)
        }
    }
}
