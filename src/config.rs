use crate::progress_bar::DEFAULT_FILL_DELAY;
use reqwest::Client;
use std::{env, time::Duration};
use tracing::warn;

pub const DEFAULT_SOURCE_URL: &str =
    "https://opensheet.elk.sh/1-NoixvCzNPUHnL_4_l2LPd753ftTxqUZFwlF0kysohU/1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub source_url: String,
    pub fill_delay: Duration,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            source_url: DEFAULT_SOURCE_URL.to_string(),
            fill_delay: DEFAULT_FILL_DELAY,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from `lookup`, keeping the default for any value that
    /// is missing or does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let port = parsed(&lookup, "PORT").unwrap_or(defaults.port);
        let source_url = lookup("CYCLING_LOG_SOURCE_URL")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or(defaults.source_url);
        let fill_delay = parsed(&lookup, "CYCLING_LOG_FILL_DELAY_MS")
            .map(Duration::from_millis)
            .unwrap_or(defaults.fill_delay);
        let request_timeout = parsed(&lookup, "CYCLING_LOG_REQUEST_TIMEOUT_MS")
            .filter(|millis: &u64| *millis > 0)
            .map(Duration::from_millis)
            .unwrap_or(defaults.request_timeout);

        Self {
            port,
            source_url,
            fill_delay,
            request_timeout,
        }
    }

    /// HTTP client for the source fetch. A source that never answers fails
    /// the fetch once `request_timeout` elapses.
    pub fn http_client(&self) -> reqwest::Result<Client> {
        Client::builder().timeout(self.request_timeout).build()
    }
}

fn parsed<T: std::str::FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let value = lookup(key)?;
    match value.trim().parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!("ignoring invalid {key}={value:?}");
            None
        }
    }
}
