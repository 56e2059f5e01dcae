//! Client configuration.
//!
//! Resolved as defaults, then environment variables, then command-line
//! overrides. Use the builder methods to customize.
//!
//! ```ignore
//! use ask_tui::config::ClientConfig;
//!
//! let config = ClientConfig::default()
//!     .with_endpoint("http://answers.internal/api/ask")
//!     .with_submit_policy(SubmitPolicy::Supersede);
//! ```

use std::path::PathBuf;

use thiserror::Error;

use crate::app::SubmitPolicy;
use crate::cli::CliOverrides;
use crate::query::DEFAULT_ENDPOINT;

/// Header shown at the top of the screen.
pub const DEFAULT_TITLE: &str = "Competitor Research - Ask me anything about ChurnZero";

pub const ENV_ENDPOINT: &str = "ASK_ENDPOINT";
pub const ENV_TITLE: &str = "ASK_TITLE";
pub const ENV_SUBMIT_POLICY: &str = "ASK_SUBMIT_POLICY";
pub const ENV_LOG_FILE: &str = "ASK_LOG_FILE";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("endpoint must be an http:// or https:// URL, got '{0}'")]
    InvalidEndpoint(String),

    #[error("ASK_SUBMIT_POLICY must be 'reject' or 'supersede', got '{0}'")]
    InvalidSubmitPolicy(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Full URL the question is POSTed to
    pub endpoint: String,
    /// Header text
    pub title: String,
    /// What `submit` does while a request is pending
    pub submit_policy: SubmitPolicy,
    /// Where tracing output goes; `None` disables logging
    pub log_file: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            title: DEFAULT_TITLE.to_string(),
            submit_policy: SubmitPolicy::default(),
            log_file: crate::logging::default_log_path(),
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_submit_policy(mut self, policy: SubmitPolicy) -> Self {
        self.submit_policy = policy;
        self
    }

    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    /// Defaults overlaid with the `ASK_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Like [`ClientConfig::from_env`] with an injectable variable lookup.
    /// Empty values count as unset.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(endpoint) = get(ENV_ENDPOINT) {
            config = config.with_endpoint(endpoint);
        }
        if let Some(title) = get(ENV_TITLE) {
            config = config.with_title(title);
        }
        if let Some(policy) = get(ENV_SUBMIT_POLICY) {
            config = config.with_submit_policy(parse_submit_policy(&policy)?);
        }
        if let Some(path) = get(ENV_LOG_FILE) {
            config = config.with_log_file(Some(PathBuf::from(path)));
        }

        Ok(config)
    }

    /// Apply flags given on the command line; they win over the environment.
    pub fn apply_overrides(mut self, overrides: &CliOverrides) -> Self {
        if let Some(endpoint) = &overrides.endpoint {
            self.endpoint = endpoint.clone();
        }
        if let Some(title) = &overrides.title {
            self.title = title.clone();
        }
        if overrides.supersede {
            self.submit_policy = SubmitPolicy::Supersede;
        }
        if let Some(path) = &overrides.log_file {
            self.log_file = Some(path.clone());
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = self.endpoint.trim();
        let has_scheme = endpoint.starts_with("http://") || endpoint.starts_with("https://");
        let has_host = endpoint
            .split_once("://")
            .is_some_and(|(_, rest)| !rest.is_empty());
        if !(has_scheme && has_host) {
            return Err(ConfigError::InvalidEndpoint(self.endpoint.clone()));
        }
        Ok(())
    }
}

fn parse_submit_policy(value: &str) -> Result<SubmitPolicy, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "reject" => Ok(SubmitPolicy::RejectWhilePending),
        "supersede" => Ok(SubmitPolicy::Supersede),
        _ => Err(ConfigError::InvalidSubmitPolicy(value.to_string())),
    }
}
