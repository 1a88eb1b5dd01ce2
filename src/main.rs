mod config;
mod error;
mod executor;
mod matcher;
mod menu;
mod model;
mod random;
mod ranking;
mod resolver;
mod session;
mod sources;
#[cfg(test)]
mod testing;

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use crate::config::{load_config, Config};
use crate::error::WatchError;
use crate::executor::{Launcher, SystemLauncher};
use crate::menu::Console;
use crate::session::Session;
use crate::sources::library::LibrarySource;

/// Exit status when neither a title nor a flag was given.
const EXIT_USAGE: u8 = 2;
/// Exit status for failures nobody anticipated.
const EXIT_UNEXPECTED: u8 = 70;

#[derive(Parser, Debug)]
#[command(author, version, about = "Watch movies and tv.", long_about = None)]
struct Args {
    /// Title of Movie or TV Show
    title: Vec<String>,

    /// List all available movies
    #[arg(short, long, conflicts_with = "random")]
    list: bool,

    /// Request a random movie
    #[arg(short, long)]
    random: bool,

    /// Path to config file (.toml or .json)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Args {
    fn has_request(&self) -> bool {
        !self.title.is_empty() || self.list || self.random
    }
}

/// Pages the inventory listing and returns the path that was shown.
fn list_inventory<L: Launcher + ?Sized>(config: &Config, launcher: &L) -> error::Result<PathBuf> {
    let inventory = config.inventory_path();
    launcher.page(&inventory)?;
    Ok(inventory)
}

fn run(args: Args) -> Result<()> {
    let query = args.title.join(" ");

    // 1. Load Config
    let config = load_config(args.config.as_deref()).map_err(WatchError::from)?;
    let launcher = SystemLauncher::new(&config);

    if args.list {
        list_inventory(&config, &launcher)?;
        return Ok(());
    }

    // 2. Open the library and run one interactive session
    let source = LibrarySource::new(&config.data_path)?;
    let session = Session::new(&config, &source, &launcher);
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    let outcome = if args.random {
        session.random(&mut console, &mut rand::thread_rng())
    } else {
        session.search(&mut console, &query)
    }
    .with_context(|| format!("session for query '{}'", query))?;

    log::debug!("Session finished: {:?}", outcome);
    Ok(())
}

/// Exit status for a failed run: the expected status of a [`WatchError`]
/// anywhere under the context chain, otherwise [`EXIT_UNEXPECTED`].
fn exit_status(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<WatchError>()
        .and_then(WatchError::expected_status)
        .unwrap_or(EXIT_UNEXPECTED)
}

fn report(err: &anyhow::Error, status: u8) {
    match err.downcast_ref::<WatchError>() {
        Some(WatchError::InputClosed) => {}
        Some(expected) if status != EXIT_UNEXPECTED => println!("{}", expected),
        _ => {
            log::error!("{:?}", err);
            eprintln!("error: {:#}", err);
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    if !args.has_request() {
        println!("No arguments passed");
        return ExitCode::from(EXIT_USAGE);
    }

    let Err(err) = run(args) else {
        return ExitCode::SUCCESS;
    };

    let status = exit_status(&err);
    report(&err, status);
    ExitCode::from(status)
}
