//! # Load Runner
//!
//! Drives simulated users against a target server.
//!
//! ## Execution Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  run(config)                                                            │
//! │     │                                                                   │
//! │     ├── reqwest::Client (one, shared; connection pool)                  │
//! │     │                                                                   │
//! │     ├── tokio::spawn ── user 0 ── on_start? ── loop { task; think } ──┐ │
//! │     ├── tokio::spawn ── user 1 ── on_start? ── loop { task; think } ──┤ │
//! │     └── tokio::spawn ── user N ── ...                                 │ │
//! │                                                                       ▼ │
//! │                        deadline reached ──► Stats merged per label     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each user owns a `StdRng` seeded from the run seed plus its index, so a
//! run with a fixed `--seed` issues the same request sequence per user.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::error::{LoadError, LoadResult};
use crate::profile::{Profile, RequestPlan};
use crate::stats::Stats;

/// Per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Validated run parameters.
#[derive(Debug, Clone)]
pub struct LoadConfig {
    /// Base URL without a trailing slash
    pub host: String,
    pub users: usize,
    pub duration: Duration,
    pub profile: Profile,
    pub seed: u64,
}

impl LoadConfig {
    /// Validates raw options.
    ///
    /// ## Errors
    /// [`LoadError::InvalidOption`] for a zero user count, a duration that is
    /// zero or too large to schedule, or a host that is not an `http(s)://`
    /// URL.
    pub fn new(
        host: &str,
        users: usize,
        duration: Duration,
        profile: Profile,
        seed: u64,
    ) -> LoadResult<Self> {
        let host = host.trim().trim_end_matches('/');
        let has_scheme = ["http://", "https://"]
            .iter()
            .any(|scheme| host.len() > scheme.len() && host.starts_with(scheme));
        if !has_scheme {
            return Err(LoadError::invalid(
                "host",
                format!("expected an http:// or https:// URL, got {host:?}"),
            ));
        }

        if users == 0 {
            return Err(LoadError::invalid("users", "must be at least 1"));
        }

        if duration.is_zero() {
            return Err(LoadError::invalid("duration", "must be at least 1 second"));
        }

        deadline_after(duration)?;

        Ok(LoadConfig {
            host: host.to_string(),
            users,
            duration,
            profile,
            seed,
        })
    }
}

/// Instant `duration` from now, if the clock can represent it.
fn deadline_after(duration: Duration) -> LoadResult<Instant> {
    Instant::now().checked_add(duration).ok_or_else(|| {
        LoadError::invalid(
            "duration",
            format!("{} seconds is too long", duration.as_secs()),
        )
    })
}

/// Runs the load test to completion and returns the merged statistics.
pub async fn run(config: &LoadConfig) -> LoadResult<Stats> {
    let deadline = deadline_after(config.duration)?;
    let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

    info!(
        host = %config.host,
        users = config.users,
        duration_secs = config.duration.as_secs(),
        profile = %config.profile,
        seed = config.seed,
        "Starting load run"
    );

    let handles: Vec<_> = (0..config.users)
        .map(|index| {
            let user = SimulatedUser {
                index,
                client: client.clone(),
                host: config.host.clone(),
                profile: config.profile,
                rng: StdRng::seed_from_u64(config.seed.wrapping_add(index as u64)),
            };
            tokio::spawn(user.run(deadline))
        })
        .collect();

    let mut stats = Stats::new();
    for handle in handles {
        stats.merge(handle.await?);
    }

    info!(
        requests = stats.total_requests(),
        failures = stats.total_failures(),
        "Load run finished"
    );
    Ok(stats)
}

/// One simulated user.
struct SimulatedUser {
    index: usize,
    client: Client,
    host: String,
    profile: Profile,
    rng: StdRng,
}

impl SimulatedUser {
    async fn run(mut self, deadline: Instant) -> Stats {
        let mut stats = Stats::new();
        let prefix = self.profile.name_prefix();

        if let Some(task) = self.profile.on_start() {
            let plan = task.plan(&mut self.rng, prefix);
            self.execute(&plan, &mut stats).await;
        }

        while Instant::now() < deadline {
            let plan = self
                .profile
                .next_task(&mut self.rng)
                .plan(&mut self.rng, prefix);
            self.execute(&plan, &mut stats).await;

            let remaining = deadline.saturating_duration_since(Instant::now());
            let wait = self.profile.think_time(&mut self.rng).min(remaining);
            tokio::time::sleep(wait).await;
        }

        debug!(user = self.index, requests = stats.total_requests(), "User done");
        stats
    }

    async fn execute(&self, plan: &RequestPlan, stats: &mut Stats) {
        let url = format!("{}{}", self.host, plan.path);
        let mut request = self.client.request(plan.method.clone(), &url);
        if let Some(body) = &plan.body {
            request = request.json(body);
        }

        let started = Instant::now();
        let success = match request.send().await {
            Ok(response) => {
                let status = response.status();
                // Drain the body so latency covers the full response.
                let drained = response.bytes().await.is_ok();
                if !status.is_success() {
                    debug!(user = self.index, %status, label = plan.label, "Request failed");
                }
                status.is_success() && drained
            }
            Err(err) => {
                warn!(user = self.index, label = plan.label, error = %err, "Request error");
                false
            }
        };

        stats.record(plan.label, started.elapsed(), success);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
