//! Runtime configuration.

use std::path::PathBuf;
use std::time::Duration;

use crate::api::DEFAULT_POSTS_URL;

/// Directory name under the home directory holding favorites and logs.
pub const DATA_DIR_NAME: &str = ".postboard";

/// Log file name inside the data directory.
pub const LOG_FILE_NAME: &str = "postboard.log";

/// Environment variable read for the log filter (`EnvFilter` syntax).
pub const LOG_ENV_VAR: &str = "POSTBOARD_LOG";

/// Configuration for a run of the app.
///
/// Use the builder methods to override defaults.
///
/// # Example
///
/// ```ignore
/// use postboard::config::AppConfig;
///
/// let config = AppConfig::default()
///     .with_data_dir("/tmp/postboard")
///     .with_request_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Endpoint returning the JSON post array
    pub posts_url: String,
    /// Where favorites and the log file live (default: ~/.postboard)
    pub data_dir: PathBuf,
    /// Upper bound on a single posts request
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            posts_url: DEFAULT_POSTS_URL.to_string(),
            data_dir: default_data_dir(),
            request_timeout: Duration::from_secs(15),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_posts_url(mut self, url: impl Into<String>) -> Self {
        self.posts_url = url.into();
        self
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Path of the log file.
    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE_NAME)
    }
}

/// `~/.postboard`, or `./.postboard` when there is no home directory.
pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(DATA_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(DATA_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.posts_url, DEFAULT_POSTS_URL);
        assert!(config.data_dir.ends_with(DATA_DIR_NAME));
        assert_eq!(config.request_timeout, Duration::from_secs(15));
    }

    #[test]
    fn test_builder() {
        let config = AppConfig::new()
            .with_posts_url("http://localhost:9999/posts")
            .with_data_dir("/tmp/pb")
            .with_request_timeout(Duration::from_secs(3));

        assert_eq!(config.posts_url, "http://localhost:9999/posts");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/pb"));
        assert_eq!(config.request_timeout, Duration::from_secs(3));
        assert_eq!(config.log_path(), PathBuf::from("/tmp/pb/postboard.log"));
    }
}
