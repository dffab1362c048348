//! Centralized configuration management for books-we-love

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

/// Default location of the yearly datasets
pub const DEFAULT_URL_TEMPLATE: &str = "https://apps.npr.org/best-books/{year}.json";

/// Placeholder replaced by the year in the URL template
pub const YEAR_PLACEHOLDER: &str = "{year}";

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_TIMEOUT_SECONDS: u64 = 15;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the yearly JSON files are written to
    pub data_dir: PathBuf,
    /// Source URL with a `{year}` placeholder
    pub url_template: String,
    /// HTTP client configuration
    pub http: HttpConfig,
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: default_user_agent(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            url_template: DEFAULT_URL_TEMPLATE.to_string(),
            http: HttpConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables and defaults
    pub fn from_env() -> Result<Self> {
        let data_dir = std::env::var("BOOKS_DATA_DIR")
            .unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string())
            .into();

        let url_template = std::env::var("BOOKS_URL_TEMPLATE")
            .unwrap_or_else(|_| DEFAULT_URL_TEMPLATE.to_string());

        let http = HttpConfig {
            timeout_seconds: parse_env_var("BOOKS_HTTP_TIMEOUT_SECONDS")?
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
            user_agent: std::env::var("BOOKS_USER_AGENT").unwrap_or_else(|_| default_user_agent()),
        };

        Ok(Config {
            data_dir,
            url_template,
            http,
        })
    }

    /// Replace the data directory, e.g. from a command-line flag
    pub fn with_data_dir(mut self, data_dir: Option<&str>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = PathBuf::from(dir);
        }
        self
    }

    /// Get HTTP timeout as Duration
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http.timeout_seconds)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !self.url_template.contains(YEAR_PLACEHOLDER) {
            return Err(anyhow::anyhow!(
                "URL template must contain {}: {}",
                YEAR_PLACEHOLDER,
                self.url_template
            ));
        }

        if self.http.timeout_seconds == 0 {
            return Err(anyhow::anyhow!("HTTP timeout must be at least one second"));
        }

        Ok(())
    }
}

fn default_user_agent() -> String {
    format!("books-we-love/{}", env!("CARGO_PKG_VERSION"))
}

/// Helper function to parse environment variable as a specific type
fn parse_env_var<T>(var_name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display + Send + Sync + std::error::Error + 'static,
{
    match std::env::var(var_name) {
        Ok(val) => val.parse().map(Some).with_context(|| {
            format!("Failed to parse environment variable {} = '{}'", var_name, val)
        }),
        Err(_) => Ok(None),
    }
}
