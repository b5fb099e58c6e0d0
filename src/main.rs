//! sitepager - Interactive Line-Oriented Pager
//!
//! Reads commands from standard input and prints pages until told to exit.

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, Command};
use log::debug;
use sitepager::{Catalog, Pager};
use std::ffi::OsString;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Initialize logging for development
    env_logger::init();

    // Only --help and --version are recognized. Anything else on the command line is
    // ignored so the exit status stays 0 for `exit` and 1 otherwise.
    match cli().try_get_matches() {
        Ok(matches) => {
            if let Some(ignored) = matches.get_many::<OsString>("ignored") {
                debug!("ignoring arguments: {:?}", ignored.collect::<Vec<_>>());
            }
        }
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => debug!("ignoring unparsable arguments: {}", err),
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn cli() -> Command {
    Command::new("sitepager")
        .version(sitepager::VERSION)
        .about("An interactive pager for a small personal site")
        .long_about(
            "sitepager prints a short set of instructions, then reads one command per line \
             from standard input: a page name, 'list', or 'exit'.",
        )
        .arg(
            Arg::new("ignored")
                .action(ArgAction::Append)
                .num_args(1..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true)
                .value_parser(clap::value_parser!(OsString))
                .hide(true),
        )
}

fn run() -> sitepager::Result<()> {
    let catalog = Catalog::configured();
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut pager = Pager::new(&catalog, stdin.lock(), stdout.lock(), io::stderr());
    pager.run()
}
