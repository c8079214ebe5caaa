//! Load generator entry point.

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use devops_loadgen::{run, Args};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(args.verbose >= 2)
        .init();

    let config = args.into_config().context("invalid arguments")?;

    let started_at = Utc::now();
    let stats = run(&config).await.context("load run failed")?;
    let finished_at = Utc::now();

    println!(
        "\nLoad run against {} ({} users, profile {}, seed {})",
        config.host, config.users, config.profile, config.seed
    );
    println!(
        "{} → {}\n",
        started_at.format("%Y-%m-%d %H:%M:%S UTC"),
        finished_at.format("%H:%M:%S UTC")
    );
    print!("{}", stats.render_table());

    info!(
        requests = stats.total_requests(),
        failures = stats.total_failures(),
        elapsed_ms = (finished_at - started_at).num_milliseconds(),
        "Report written"
    );
    Ok(())
}
