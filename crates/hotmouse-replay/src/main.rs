#![warn(missing_docs)]

//! Entry point for the `hotmouse-replay` binary.

mod cli;
mod error;
mod runner;
mod script;

use std::{io, process};

use clap::Parser;
use config::Config;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, registry};

use crate::{cli::Cli, error::Result, runner::Runner};

/// Log lines buffered per step before the forwarder starts dropping.
const LOG_BACKLOG: usize = 1024;

fn main() {
    if let Err(err) = run() {
        error!("{err}");
        eprintln!("error: {err}");
        process::exit(1);
    }
}

/// Parse CLI arguments, install logging, and replay the script.
fn run() -> Result<()> {
    let cli = Cli::parse();
    registry()
        .with(cli.log.env_filter())
        .with(fmt::layer().without_time().with_writer(io::stderr))
        .with(logging::forward::layer())
        .try_init()
        .ok();

    let cfg = match &cli.config {
        Some(path) => config::load_from_path(path)?,
        None => Config::default(),
    };
    let steps = script::load(&cli.script)?;
    info!(steps = steps.len(), shortcuts = cfg.shortcuts.len(), "replay_start");

    let (tx, rx) = crossbeam_channel::bounded(LOG_BACKLOG);
    logging::forward::set_sink(tx);
    let mut runner = Runner::new(cfg);
    for (i, step) in steps.iter().enumerate() {
        println!("{}", runner.step(i + 1, step));
        for log in rx.try_iter() {
            println!("      {} {}", log.level.to_lowercase(), log.message);
        }
    }
    logging::forward::clear_sink();
    println!(
        "final enabled={} label={:?}",
        runner.enabled(),
        runner.label().unwrap_or_default()
    );
    Ok(())
}
