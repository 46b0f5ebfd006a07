// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::ConfigError;

/// Shard id the node uses for the metachain.
pub const METACHAIN_SHARD_ID: u32 = u32::MAX;

#[derive(Debug, Clone)]
pub struct ObserverConfig {
    /// Base URL of the observer (or proxy) HTTP API
    ///
    /// Env: ROSETTA_OBSERVER_URL
    /// Valid schemes: http://, https://
    /// Default: http://127.0.0.1:8079
    pub url: String,

    /// Shard whose blocks are exposed
    ///
    /// Env: ROSETTA_OBSERVER_SHARD
    /// Default: 0
    pub shard: u32,

    /// Timeout of a single request to the observer, in seconds
    ///
    /// Env: ROSETTA_OBSERVER_TIMEOUT_SECS
    /// Default: 30
    pub timeout_secs: u64,

    /// Never contact the observer; only offline construction endpoints work
    ///
    /// Env: ROSETTA_OBSERVER_OFFLINE
    /// Default: false
    pub offline: bool,

    /// JSON file holding the genesis balances
    ///
    /// Env: ROSETTA_OBSERVER_GENESIS_BALANCES_FILE
    /// Default: unset (genesis block has no operations)
    pub genesis_balances_file: Option<String>,
}

pub(crate) fn default_url() -> String {
    "http://127.0.0.1:8079".to_string()
}

pub(crate) fn default_timeout_secs() -> u64 {
    30
}

impl ObserverConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.url.is_empty() {
            return Err(ConfigError::ValidateError(
                "Observer URL cannot be empty".to_string(),
            ));
        }

        let parsed = url::Url::parse(&self.url).map_err(|e| {
            ConfigError::ValidateError(format!("Invalid URL '{}': {}", self.url, e))
        })?;

        match parsed.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(ConfigError::ValidateError(format!(
                    "Invalid URL scheme '{}'. Must be http:// or https://",
                    scheme
                )));
            }
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::ValidateError(
                "Observer timeout cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    pub fn is_metachain(&self) -> bool {
        self.shard == METACHAIN_SHARD_ID
    }
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            shard: 0,
            timeout_secs: default_timeout_secs(),
            offline: false,
            genesis_balances_file: None,
        }
    }
}
