//! `lotclock` binary: prints a live countdown to a listing deadline.

use std::process::ExitCode;

use clap::Parser;
use lotclock_infra::observability::init_tracing;
use lotclock_lib::cli::Args;
use lotclock_lib::runner::{run_countdown, RunOutcome};
use tracing::{debug, info, warn};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("lotclock: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    // Load .env before configuration so LOTCLOCK_* variables apply.
    let dotenv = dotenvy::dotenv();
    let args = Args::parse();
    let config = args.load_config()?;
    init_tracing(&config.log)?;

    match dotenv {
        Ok(path) => debug!(path = %path.display(), "Loaded .env file"),
        Err(err) => debug!(error = %err, "No .env file loaded"),
    }

    let raw = args.raw_deadline()?;
    let mut stdout = std::io::stdout().lock();
    let outcome = run_countdown(raw, &config, &mut stdout, shutdown_signal()).await?;

    if outcome == RunOutcome::NoCountdown {
        info!("Deadline did not resolve; nothing to count down to");
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "Failed to listen for Ctrl-C; countdown runs to expiry");
        std::future::pending::<()>().await;
    }
}
