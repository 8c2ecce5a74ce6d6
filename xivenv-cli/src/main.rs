use anyhow::Context;
use clap::Parser;
use std::process;
use tracing::{debug, info};
use xivenv_core::{Config, LocateSource};
use xivenv_proc::{extract_environment, ProcFs, ProcessLocator};
use xivenv_runner::{OutputDriver, OutputMode};

mod cli;
mod logging;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose, cli.debug);

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::default(),
    };
    let config = cli.apply(config);

    let code = run(&cli, &config)?;
    if code != 0 {
        process::exit(code);
    }
    Ok(())
}

fn run(cli: &Cli, config: &Config) -> anyhow::Result<i32> {
    let procfs = ProcFs::with_root(&config.proc_root);

    let locator = ProcessLocator::new(config.signature());
    debug!(
        proc_root = %procfs.root().display(),
        marker = %locator.signature().binary_marker,
        "finding ffxiv pid"
    );
    let located = locator
        .locate(&procfs, cli.pid)
        .context("failed to find ffxiv!")?;
    if let LocateSource::Scan { scanned, unreadable } = &located.source {
        debug!(scanned, unreadable = unreadable.len(), "scanned process table");
    }
    info!(pid = located.pid, "selected pid");

    debug!("build environment");
    let extraction = extract_environment(&procfs, located.pid, config)
        .context("failed to fetch environ!")?;
    if extraction.env.is_steam() {
        info!("game was launched through steam");
    }
    if !extraction.malformed.is_empty() {
        debug!(records = ?extraction.malformed, "ignored malformed environment records");
    }

    debug!("check for pipe");
    let stdout = std::io::stdout();
    let driver = OutputDriver::new(OutputMode::detect(&stdout)).with_drive_root(&config.drive_root);
    info!(mode = ?driver.mode(), "selected output mode");
    let outcome = driver
        .run(&extraction.env, &cli.command, &mut stdout.lock())
        .context("failed to run in environment")?;

    Ok(outcome.exit_code())
}
