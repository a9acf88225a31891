//! Runtime settings resolved from environment variables and CLI flags.

use std::env;
use std::time::Duration;

use tracing::warn;

/// Tracker host used when nothing else is configured.
pub const DEFAULT_TRACKER_HOST: &str = "keends.atlassian.net";

/// Default timeout for a single gh invocation.
pub const DEFAULT_GH_TIMEOUT_SECS: u64 = 60;

/// Default number of concurrent repository detail fetches.
pub const DEFAULT_CONCURRENCY: usize = 4;

pub const TRACKER_HOST_ENV_VAR: &str = "PRDRAFT_TRACKER_HOST";
pub const GH_TIMEOUT_ENV_VAR: &str = "PRDRAFT_GH_TIMEOUT";
pub const CONCURRENCY_ENV_VAR: &str = "PRDRAFT_CONCURRENCY";

/// Resolved settings for one CLI run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Issue tracker domain used to build reference links.
    pub tracker_host: String,
    pub gh_timeout: Duration,
    pub concurrency: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tracker_host: DEFAULT_TRACKER_HOST.to_string(),
            gh_timeout: Duration::from_secs(DEFAULT_GH_TIMEOUT_SECS),
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

impl Settings {
    /// Read settings from the environment, falling back to defaults.
    ///
    /// Invalid numeric values are logged and ignored.
    pub fn from_env() -> Self {
        let tracker_host = match env::var(TRACKER_HOST_ENV_VAR) {
            Ok(v) if !v.trim().is_empty() => v.trim().to_string(),
            _ => DEFAULT_TRACKER_HOST.to_string(),
        };

        let gh_timeout = Duration::from_secs(read_positive(GH_TIMEOUT_ENV_VAR, DEFAULT_GH_TIMEOUT_SECS));
        let concurrency = read_positive(CONCURRENCY_ENV_VAR, DEFAULT_CONCURRENCY as u64) as usize;

        Self {
            tracker_host,
            gh_timeout,
            concurrency,
        }
    }

    /// Apply a CLI tracker host override.
    pub fn with_tracker_host(mut self, host: Option<String>) -> Self {
        if let Some(host) = host.filter(|h| !h.trim().is_empty()) {
            self.tracker_host = host.trim().to_string();
        }
        self
    }

    /// Apply a CLI concurrency override. Zero is raised to one.
    pub fn with_concurrency(mut self, concurrency: Option<usize>) -> Self {
        if let Some(n) = concurrency {
            self.concurrency = n.max(1);
        }
        self
    }
}

fn read_positive(var: &str, default: u64) -> u64 {
    match env::var(var) {
        Ok(v) if !v.is_empty() => match v.parse::<u64>() {
            Ok(n) if n > 0 => n,
            _ => {
                warn!("Invalid {} value '{}', using default {}", var, v, default);
                default
            }
        },
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_unset<F: FnOnce()>(f: F) {
        temp_env::with_vars_unset(
            [TRACKER_HOST_ENV_VAR, GH_TIMEOUT_ENV_VAR, CONCURRENCY_ENV_VAR],
            f,
        );
    }

    #[test]
    fn test_defaults_when_env_unset() {
        all_unset(|| {
            assert_eq!(Settings::from_env(), Settings::default());
        });
    }

    #[test]
    fn test_tracker_host_from_env() {
        temp_env::with_var(TRACKER_HOST_ENV_VAR, Some("jira.example.com"), || {
            assert_eq!(Settings::from_env().tracker_host, "jira.example.com");
        });
    }

    #[test]
    fn test_blank_tracker_host_uses_default() {
        temp_env::with_var(TRACKER_HOST_ENV_VAR, Some("   "), || {
            assert_eq!(Settings::from_env().tracker_host, DEFAULT_TRACKER_HOST);
        });
    }

    #[test]
    fn test_timeout_from_env() {
        temp_env::with_var(GH_TIMEOUT_ENV_VAR, Some("15"), || {
            assert_eq!(Settings::from_env().gh_timeout, Duration::from_secs(15));
        });
    }

    #[test]
    fn test_invalid_numbers_use_defaults() {
        temp_env::with_vars(
            [
                (GH_TIMEOUT_ENV_VAR, Some("soon")),
                (CONCURRENCY_ENV_VAR, Some("0")),
            ],
            || {
                let settings = Settings::from_env();
                assert_eq!(
                    settings.gh_timeout,
                    Duration::from_secs(DEFAULT_GH_TIMEOUT_SECS)
                );
                assert_eq!(settings.concurrency, DEFAULT_CONCURRENCY);
            },
        );
    }

    #[test]
    fn test_cli_overrides_win() {
        let settings = Settings::default()
            .with_tracker_host(Some("cli.example.com".to_string()))
            .with_concurrency(Some(0));
        assert_eq!(settings.tracker_host, "cli.example.com");
        assert_eq!(settings.concurrency, 1);
    }

    #[test]
    fn test_empty_cli_override_is_ignored() {
        let settings = Settings::default().with_tracker_host(Some(String::new()));
        assert_eq!(settings.tracker_host, DEFAULT_TRACKER_HOST);
    }
}
