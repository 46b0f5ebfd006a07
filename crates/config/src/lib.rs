// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

mod args;
mod chain;
mod error;
mod express;
mod log;
mod metrics;
mod observer;

pub use args::Args;
pub use chain::ChainConfig;
pub use error::ConfigError;
pub use express::ExpressConfig;
pub use log::LogConfig;
pub use metrics::{MetricsConfig, MetricsError};
pub use observer::{METACHAIN_SHARD_ID, ObserverConfig};

use serde::Deserialize;

const ENV_PREFIX: &str = "ROSETTA_";

/// Flat view of the `ROSETTA_*` environment, split into sections afterwards.
#[derive(Debug, Deserialize)]
struct EnvConfig {
    #[serde(default = "express::default_bind_host")]
    express_bind_host: String,
    #[serde(default = "express::default_port")]
    express_port: u16,
    #[serde(default = "express::default_request_limit")]
    express_request_limit: usize,

    #[serde(default = "log::default_level")]
    log_level: String,
    #[serde(default)]
    log_json: bool,
    #[serde(default)]
    log_strip_ansi: bool,
    #[serde(default)]
    log_write: bool,
    #[serde(default = "log::default_write_path")]
    log_write_path: String,
    #[serde(default = "log::default_write_max_file_size")]
    log_write_max_file_size: u64,
    #[serde(default = "log::default_write_max_files")]
    log_write_max_files: usize,

    #[serde(default = "observer::default_url")]
    observer_url: String,
    #[serde(default)]
    observer_shard: u32,
    #[serde(default = "observer::default_timeout_secs")]
    observer_timeout_secs: u64,
    #[serde(default)]
    observer_offline: bool,
    #[serde(default)]
    observer_genesis_balances_file: Option<String>,

    #[serde(default = "chain::default_blockchain_name")]
    chain_blockchain_name: String,
    #[serde(default = "chain::default_native_currency_symbol")]
    chain_native_currency_symbol: String,
    #[serde(default = "chain::default_native_currency_decimals")]
    chain_native_currency_decimals: u32,
    #[serde(default = "chain::default_address_hrp")]
    chain_address_hrp: String,
    #[serde(default = "chain::default_chain_id")]
    chain_chain_id: String,
    #[serde(default = "chain::default_min_gas_price")]
    chain_min_gas_price: u64,
    #[serde(default = "chain::default_min_gas_limit")]
    chain_min_gas_limit: u64,
    #[serde(default = "chain::default_gas_per_data_byte")]
    chain_gas_per_data_byte: u64,
    #[serde(default = "chain::default_genesis_time")]
    chain_genesis_time: u64,
    #[serde(default = "chain::default_round_duration_ms")]
    chain_round_duration_ms: u64,

    #[serde(default)]
    metrics_enabled: bool,
    #[serde(default = "metrics::default_prometheus_prefix")]
    metrics_prometheus_prefix: String,
    #[serde(default)]
    metrics_include_queryparams: bool,
}

impl From<EnvConfig> for RosettaConfig {
    fn from(env: EnvConfig) -> Self {
        Self {
            express: ExpressConfig {
                bind_host: env.express_bind_host,
                port: env.express_port,
                request_limit: env.express_request_limit,
            },
            log: LogConfig {
                level: env.log_level,
                json: env.log_json,
                strip_ansi: env.log_strip_ansi,
                write: env.log_write,
                write_path: env.log_write_path,
                write_max_file_size: env.log_write_max_file_size,
                write_max_files: env.log_write_max_files,
            },
            observer: ObserverConfig {
                url: env.observer_url,
                shard: env.observer_shard,
                timeout_secs: env.observer_timeout_secs,
                offline: env.observer_offline,
                genesis_balances_file: env.observer_genesis_balances_file,
            },
            chain: ChainConfig {
                blockchain_name: env.chain_blockchain_name,
                native_currency_symbol: env.chain_native_currency_symbol,
                native_currency_decimals: env.chain_native_currency_decimals,
                address_hrp: env.chain_address_hrp,
                chain_id: env.chain_chain_id,
                min_gas_price: env.chain_min_gas_price,
                min_gas_limit: env.chain_min_gas_limit,
                gas_per_data_byte: env.chain_gas_per_data_byte,
                genesis_time: env.chain_genesis_time,
                round_duration_ms: env.chain_round_duration_ms,
            },
            metrics: MetricsConfig {
                enabled: env.metrics_enabled,
                prometheus_prefix: env.metrics_prometheus_prefix,
                include_queryparams: env.metrics_include_queryparams,
            },
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RosettaConfig {
    pub express: ExpressConfig,
    pub log: LogConfig,
    pub observer: ObserverConfig,
    pub chain: ChainConfig,
    pub metrics: MetricsConfig,
}

impl RosettaConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let env = envy::prefixed(ENV_PREFIX).from_env::<EnvConfig>()?;
        let config = Self::from(env);
        config.validate()?;
        Ok(config)
    }

    /// Loads `env_file` (a missing file is not an error) and then the process environment.
    pub fn from_env_file(env_file: &str) -> Result<Self, ConfigError> {
        match dotenv::from_filename(env_file) {
            Ok(_) => {}
            Err(dotenv::Error::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(source) => {
                return Err(ConfigError::EnvFileError {
                    path: env_file.to_string(),
                    source,
                });
            }
        }
        Self::from_env()
    }

    /// Builds the configuration from explicit `ROSETTA_*` pairs instead of the process environment.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let env = envy::prefixed(ENV_PREFIX).from_iter::<_, EnvConfig>(vars)?;
        let config = Self::from(env);
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.express.validate()?;
        self.log.validate()?;
        self.observer.validate()?;
        self.chain.validate()?;
        self.metrics.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_default_config() {
        let config = RosettaConfig::default();
        assert_eq!(config.express.port, 8080);
        assert_eq!(config.log.level, "info");
        assert_eq!(config.observer.url, "http://127.0.0.1:8079");
        assert_eq!(config.chain.native_currency_symbol, "EGLD");
    }

    #[test]
    fn test_from_vars_uses_defaults() {
        let config = RosettaConfig::from_vars(vars(&[])).unwrap();
        assert_eq!(config.express.port, 8080);
        assert_eq!(config.observer.shard, 0);
        assert!(!config.observer.offline);
        assert!(config.observer.genesis_balances_file.is_none());
    }

    #[test]
    fn test_from_vars_sections() {
        let config = RosettaConfig::from_vars(vars(&[
            ("ROSETTA_EXPRESS_PORT", "9091"),
            ("ROSETTA_LOG_LEVEL", "debug"),
            ("ROSETTA_OBSERVER_URL", "https://gateway.example.com"),
            ("ROSETTA_OBSERVER_SHARD", "4294967295"),
            ("ROSETTA_OBSERVER_OFFLINE", "true"),
            ("ROSETTA_CHAIN_CHAIN_ID", "D"),
            ("ROSETTA_CHAIN_NATIVE_CURRENCY_SYMBOL", "XeGLD"),
            ("ROSETTA_METRICS_ENABLED", "true"),
        ]))
        .unwrap();

        assert_eq!(config.express.port, 9091);
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.observer.url, "https://gateway.example.com");
        assert!(config.observer.is_metachain());
        assert!(config.observer.offline);
        assert_eq!(config.chain.chain_id, "D");
        assert_eq!(config.chain.native_currency_symbol, "XeGLD");
        assert!(config.metrics.enabled);
    }

    #[test]
    fn test_from_vars_rejects_invalid_values() {
        assert!(RosettaConfig::from_vars(vars(&[("ROSETTA_EXPRESS_PORT", "0")])).is_err());
        assert!(RosettaConfig::from_vars(vars(&[("ROSETTA_LOG_LEVEL", "loud")])).is_err());
        assert!(RosettaConfig::from_vars(vars(&[("ROSETTA_OBSERVER_URL", "ftp://x")])).is_err());
        assert!(
            RosettaConfig::from_vars(vars(&[("ROSETTA_METRICS_PROMETHEUS_PREFIX", "a-b")]))
                .is_err()
        );
        assert!(RosettaConfig::from_vars(vars(&[("ROSETTA_EXPRESS_PORT", "abc")])).is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ROSETTA_EXPRESS_PORT=7070").unwrap();
        writeln!(file, "ROSETTA_CHAIN_ADDRESS_HRP=erd").unwrap();

        let config = RosettaConfig::from_env_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.express.port, 7070);

        // SAFETY: serialized with the other env tests
        unsafe { std::env::remove_var("ROSETTA_EXPRESS_PORT") };
    }

    #[test]
    #[serial]
    fn test_from_env_file_missing_is_ignored() {
        let config = RosettaConfig::from_env_file("/definitely/not/here/.env").unwrap();
        assert_eq!(config.log.level, "info");
    }
}
