//! Command-line configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::LevelFilter;
use userlist_lib::ListViewConfig;
use userlist_lib::model::ItemsPerPage;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:4000/graphql";

/// Browse users from a GraphQL endpoint.
#[derive(Debug, Parser)]
#[command(name = "userlist", version, about)]
pub struct Args {
    /// GraphQL endpoint URL.
    #[arg(long, env = "USERLIST_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Quiet period before a search or sort change is fetched, in milliseconds.
    #[arg(long, default_value_t = 2000)]
    pub debounce_ms: u64,

    /// Items per page at startup (5, 10, 20 or 100).
    #[arg(long, default_value_t = ItemsPerPage::Five, value_parser = parse_limit)]
    pub limit: ItemsPerPage,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Log file path. Defaults to latest.log in the user cache directory.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace).
    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,
}

impl Args {
    pub fn view_config(&self) -> ListViewConfig {
        ListViewConfig {
            quiet_period: Duration::from_millis(self.debounce_ms),
            initial_limit: self.limit,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn parse_limit(value: &str) -> Result<ItemsPerPage, String> {
    let n: u32 = value.parse().map_err(|e| format!("{value}: {e}"))?;
    ItemsPerPage::try_from(n).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["userlist", "--endpoint", DEFAULT_ENDPOINT]).unwrap();
        let config = args.view_config();
        assert_eq!(config.quiet_period, Duration::from_millis(2000));
        assert_eq!(config.initial_limit, ItemsPerPage::Five);
        assert_eq!(args.timeout(), Duration::from_secs(30));
        assert_eq!(args.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "userlist",
            "--endpoint",
            "https://api.example.com/graphql",
            "--debounce-ms",
            "250",
            "--limit",
            "20",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.endpoint, "https://api.example.com/graphql");
        assert_eq!(args.view_config().quiet_period, Duration::from_millis(250));
        assert_eq!(args.limit, ItemsPerPage::Twenty);
        assert_eq!(args.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_rejects_unlisted_limit() {
        let err = Args::try_parse_from(["userlist", "--limit", "7"]).unwrap_err();
        assert!(err.to_string().contains("Invalid items per page"));
    }
}
