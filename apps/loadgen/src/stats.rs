//! # Request Statistics
//!
//! Per-endpoint latency samples and failure counts, merged across simulated
//! users and rendered as a summary table.
//!
//! A request fails on a transport error or a non-2xx status. Failed requests
//! still contribute their latency.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::time::Duration;

/// Samples for one endpoint label.
#[derive(Debug, Clone, Default)]
struct Samples {
    latencies: Vec<Duration>,
    failures: u64,
}

/// Summary of one endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointSummary {
    pub label: String,
    pub requests: u64,
    pub failures: u64,
    pub min: Duration,
    pub avg: Duration,
    pub max: Duration,
    pub p95: Duration,
}

/// Collected samples, keyed by endpoint label.
#[derive(Debug, Clone, Default)]
pub struct Stats {
    endpoints: BTreeMap<String, Samples>,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one request.
    pub fn record(&mut self, label: &str, latency: Duration, success: bool) {
        let samples = self.endpoints.entry(label.to_string()).or_default();
        samples.latencies.push(latency);
        if !success {
            samples.failures += 1;
        }
    }

    /// Folds another collector into this one.
    pub fn merge(&mut self, other: Stats) {
        for (label, samples) in other.endpoints {
            let entry = self.endpoints.entry(label).or_default();
            entry.latencies.extend(samples.latencies);
            entry.failures += samples.failures;
        }
    }

    /// Total requests across all endpoints.
    pub fn total_requests(&self) -> u64 {
        self.endpoints
            .values()
            .map(|s| s.latencies.len() as u64)
            .sum()
    }

    /// Total failures across all endpoints.
    pub fn total_failures(&self) -> u64 {
        self.endpoints.values().map(|s| s.failures).sum()
    }

    /// Per-endpoint summaries, ordered by label.
    pub fn summaries(&self) -> Vec<EndpointSummary> {
        self.endpoints
            .iter()
            .filter(|(_, samples)| !samples.latencies.is_empty())
            .map(|(label, samples)| summarize(label, samples))
            .collect()
    }

    /// Renders the summary table.
    pub fn render_table(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:<28} {:>8} {:>8} {:>9} {:>9} {:>9} {:>9}",
            "Endpoint", "Reqs", "Fails", "Min(ms)", "Avg(ms)", "Max(ms)", "p95(ms)"
        );
        let _ = writeln!(out, "{}", "-".repeat(86));

        for s in self.summaries() {
            let _ = writeln!(
                out,
                "{:<28} {:>8} {:>8} {:>9.1} {:>9.1} {:>9.1} {:>9.1}",
                s.label,
                s.requests,
                s.failures,
                millis(s.min),
                millis(s.avg),
                millis(s.max),
                millis(s.p95),
            );
        }

        let _ = writeln!(out, "{}", "-".repeat(86));
        let _ = writeln!(
            out,
            "{:<28} {:>8} {:>8}",
            "Total",
            self.total_requests(),
            self.total_failures()
        );
        out
    }
}

fn summarize(label: &str, samples: &Samples) -> EndpointSummary {
    let mut sorted = samples.latencies.clone();
    sorted.sort_unstable();

    let count = sorted.len();

    EndpointSummary {
        label: label.to_string(),
        requests: count as u64,
        failures: samples.failures,
        min: sorted[0],
        avg: mean(&sorted),
        max: sorted[count - 1],
        p95: percentile(&sorted, 95),
    }
}

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Arithmetic mean of a non-empty slice, summed in nanoseconds.
fn mean(samples: &[Duration]) -> Duration {
    let total: u128 = samples.iter().map(Duration::as_nanos).sum();
    let nanos = total / samples.len() as u128;

    let secs = u64::try_from(nanos / NANOS_PER_SEC).unwrap_or(u64::MAX);
    let subsec = u32::try_from(nanos % NANOS_PER_SEC).unwrap_or(0);
    Duration::new(secs, subsec)
}

/// Nearest-rank percentile of a sorted, non-empty slice.
fn percentile(sorted: &[Duration], pct: usize) -> Duration {
    let rank = (pct * sorted.len()).div_ceil(100).max(1);
    sorted[rank - 1]
}

fn millis(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}
