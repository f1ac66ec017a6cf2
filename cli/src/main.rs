//! CLI entrypoint for watchparty
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use watchparty_application::Watchparty;
use watchparty_infrastructure::{ConfigLoader, FileConfig, JsonExclusionStore, JsonProposalStore};
use watchparty_presentation::{BallotBox, Cli, ConsolePollPresenter, Identity, WatchpartyRepl};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("failed to load configuration")?
    };

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_tracing(cli.verbose, config.logging.file.as_deref())?;

    info!("Starting watchparty");
    check_config(&config)?;

    // === Dependency Injection ===
    let proposals = Arc::new(JsonProposalStore::new(&config.storage.proposals_file));
    let exclusions = Arc::new(JsonExclusionStore::new(&config.storage.exclusions_file));
    let ballots = Arc::new(BallotBox::new());
    let presenter = Arc::new(ConsolePollPresenter::new(ballots.clone()));

    let mut workflow = Watchparty::new(proposals, exclusions, presenter, config.to_workflow_config());
    if let Some(seed) = cli.seed {
        workflow = workflow.with_seed(seed);
    }

    let identity = Identity::new(cli.participant.as_str(), cli.channel.as_str()).with_admin(cli.admin);
    let mut repl = WatchpartyRepl::new(Arc::new(workflow), ballots, identity);
    repl.run().await?;

    Ok(())
}

/// Install the subscriber: stderr, plus a daily-rolling file when configured.
///
/// `RUST_LOG` overrides the level picked from `-v`.
fn init_tracing(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let directory = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let Some(file_name) = path.file_name() else {
                bail!("logging.file must name a file: {}", path.display());
            };
            let appender = tracing_appender::rolling::daily(directory, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}

/// Log warnings, abort on errors
fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    let mut errors = 0;
    for issue in &issues {
        if issue.is_error() {
            errors += 1;
            eprintln!("config error: {}", issue.message);
        } else {
            warn!("{}", issue.message);
        }
    }

    if errors > 0 {
        bail!("{} configuration error(s), fix them and restart", errors);
    }
    Ok(())
}
