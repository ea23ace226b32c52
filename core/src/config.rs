//! Client configuration.
//!
//! Defaults target the reference deployment. `from_env` overrides them from
//! `ACTRESS_API_URL` and `ACTRESS_NATIONALITY_POLICY` (`strict` | `lenient`).

use crate::validate::NationalityPolicy;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3333";

const BASE_URL_VAR: &str = "ACTRESS_API_URL";
const POLICY_VAR: &str = "ACTRESS_NATIONALITY_POLICY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub nationality_policy: NationalityPolicy,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            nationality_policy: NationalityPolicy::default(),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(url) = lookup(BASE_URL_VAR).filter(|url| !url.trim().is_empty()) {
            config.base_url = url.trim().to_string();
        }
        if let Some(policy) = lookup(POLICY_VAR) {
            config.nationality_policy = policy.parse().map_err(|reason| ConfigError::Invalid {
                var: POLICY_VAR,
                reason,
            })?;
        }
        Ok(config)
    }
}
