//! # CLI Layer
//!
//! The only place that knows about stdin/stdout/stderr and exit codes.
//!
//! - `setup`: clap flags and the menu definition
//! - `menu`: the interactive loop
//! - `prompt`: line-oriented prompts
//! - `print`: rendering of `CmdResult` messages and student records

mod menu;
mod print;
mod prompt;
mod setup;

use clap::Parser;
use menu::Menu;
use roster::error::Result;
use roster::init::{initialize_and_load, InitOptions};
use setup::Cli;
use std::io;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = InitOptions {
        config_dir: cli.config_dir,
        data_file: cli.data_file,
    };

    println!("Loading data...");
    let (mut api, loaded) = initialize_and_load(&options)?;
    print::print_messages(&mut io::stdout(), &loaded.messages)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(&mut api, stdin.lock(), stdout.lock()).run()
}

/// Logs go to stderr. `ROSTER_LOG` takes an `EnvFilter` directive; without it
/// the level is `warn`, or `debug` with `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("ROSTER_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
