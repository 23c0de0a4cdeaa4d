use std::{env, time::Duration};

use crate::AtlasError;

pub const WIKIDATA_SPARQL_ENDPOINT: &str = "https://query.wikidata.org/sparql";

pub const ENDPOINT_VAR: &str = "WIKIATLAS_ENDPOINT";
pub const USER_AGENT_VAR: &str = "WIKIATLAS_USER_AGENT";
pub const TIMEOUT_VAR: &str = "WIKIATLAS_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq)]
pub struct AtlasConfig {
    pub endpoint: String,
    /// Wikidata refuses requests without a user agent.
    pub user_agent: String,
    /// `None` leaves it to the transport default.
    pub timeout: Option<Duration>,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            endpoint: WIKIDATA_SPARQL_ENDPOINT.into(),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).into(),
            timeout: None,
        }
    }
}

impl AtlasConfig {
    /// Defaults overridden by `WIKIATLAS_*` environment variables.
    pub fn from_env() -> Result<Self, AtlasError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AtlasError> {
        let mut config = Self::default();

        if let Some(endpoint) = lookup(ENDPOINT_VAR) {
            config.endpoint = endpoint;
        }
        if let Some(user_agent) = lookup(USER_AGENT_VAR) {
            config.user_agent = user_agent;
        }
        if let Some(secs) = lookup(TIMEOUT_VAR) {
            let secs = secs
                .trim()
                .parse::<u64>()
                .map_err(|_| AtlasError::Config(TIMEOUT_VAR, secs.clone()))?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}
