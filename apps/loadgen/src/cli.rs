//! CLI argument structures.

use std::time::Duration;

use clap::Parser;

use crate::error::LoadResult;
use crate::profile::Profile;
use crate::runner::LoadConfig;

/// Generate HTTP load against the DevOps testing app
#[derive(Debug, Parser)]
#[command(name = "loadgen")]
#[command(about = "loadgen - Simulated-user load generator for the DevOps API server", long_about = None)]
#[command(version)]
pub struct Args {
    /// Base URL of the target server
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    pub host: String,

    /// Number of concurrent simulated users
    #[arg(short = 'u', long, default_value = "10")]
    pub users: usize,

    /// Run time in seconds
    #[arg(short = 'd', long, default_value = "30")]
    pub duration: u64,

    /// Simulated user behaviour
    #[arg(short = 'p', long, value_enum, default_value_t = Profile::Website)]
    pub profile: Profile,

    /// RNG seed for a reproducible request sequence (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Validates the arguments into a run configuration.
    pub fn into_config(self) -> LoadResult<LoadConfig> {
        let seed = self.seed.unwrap_or_else(rand::random);
        LoadConfig::new(
            &self.host,
            self.users,
            Duration::from_secs(self.duration),
            self.profile,
            seed,
        )
    }

    /// Default log filter for the verbosity level.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["loadgen"]).unwrap();
        assert_eq!(args.host, "http://127.0.0.1:5000");
        assert_eq!(args.users, 10);
        assert_eq!(args.duration, 30);
        assert_eq!(args.profile, Profile::Website);
        assert_eq!(args.seed, None);
        assert_eq!(args.log_filter(), "info");
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "loadgen",
            "--host",
            "http://staging:8080/",
            "-u",
            "50",
            "--duration",
            "120",
            "--profile",
            "write-heavy",
            "--seed",
            "99",
            "-vv",
        ])
        .unwrap();

        assert_eq!(args.profile, Profile::WriteHeavy);
        assert_eq!(args.log_filter(), "trace");

        let config = args.into_config().unwrap();
        assert_eq!(config.host, "http://staging:8080");
        assert_eq!(config.users, 50);
        assert_eq!(config.duration, Duration::from_secs(120));
        assert_eq!(config.seed, 99);
    }

    #[test]
    fn test_unknown_profile_rejected() {
        assert!(Args::try_parse_from(["loadgen", "--profile", "chaos"]).is_err());
    }

    #[test]
    fn test_zero_users_rejected() {
        let args = Args::try_parse_from(["loadgen", "--users", "0"]).unwrap();
        assert!(args.into_config().is_err());
    }
}
