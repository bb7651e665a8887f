//! Client configuration, built in code or read from the environment

use crate::api::endpoint::DEFAULT_BASE_URL;
use crate::api::{AccessLevel, RequestPacing};
use crate::error::{Error, Result};
use std::time::Duration;

pub const API_KEY_VAR: &str = "SPORTSDATA_API_KEY";
pub const ACCESS_LEVEL_VAR: &str = "SPORTSDATA_ACCESS_LEVEL";
pub const BASE_URL_VAR: &str = "SPORTSDATA_BASE_URL";
pub const REQUEST_INTERVAL_VAR: &str = "SPORTSDATA_REQUEST_INTERVAL_MS";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub access_level: AccessLevel,
    /// Scheme and host the league path is appended to
    pub base_url: String,
    pub pacing: RequestPacing,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>, access_level: AccessLevel) -> Self {
        Self {
            api_key: api_key.into(),
            access_level,
            base_url: DEFAULT_BASE_URL.to_string(),
            pacing: RequestPacing::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_pacing(mut self, pacing: RequestPacing) -> Self {
        self.pacing = pacing;
        self
    }

    /// Read the configuration from `SPORTSDATA_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup(API_KEY_VAR)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| Error::config_error(format!("{} not set", API_KEY_VAR)))?;

        let access_level = match lookup(ACCESS_LEVEL_VAR) {
            Some(level) => level.parse()?,
            None => AccessLevel::Trial,
        };

        let mut config = ClientConfig::new(api_key, access_level);

        if let Some(base_url) = lookup(BASE_URL_VAR) {
            config = config.with_base_url(base_url);
        }

        if let Some(interval) = lookup(REQUEST_INTERVAL_VAR) {
            let millis: u64 = interval.parse().map_err(|_| {
                Error::config_error(format!(
                    "{} must be a number of milliseconds, got {:?}",
                    REQUEST_INTERVAL_VAR, interval
                ))
            })?;
            config = config.with_pacing(RequestPacing::new(Duration::from_millis(millis)));
        }

        Ok(config)
    }
}
