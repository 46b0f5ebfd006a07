// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error(
        "Invalid Prometheus prefix '{0}': must start with [a-zA-Z_:] and contain only [a-zA-Z0-9_:]"
    )]
    InvalidPrometheusPrefix(String),
}

/// Configuration for Prometheus metrics
#[derive(Debug, Clone)]
pub struct MetricsConfig {
    /// Enable or disable metrics collection
    ///
    /// Env: ROSETTA_METRICS_ENABLED
    pub enabled: bool,

    /// Prometheus metric name prefix (default: "rosetta_gateway")
    ///
    /// Env: ROSETTA_METRICS_PROMETHEUS_PREFIX
    pub prometheus_prefix: String,

    /// Include query parameters in route labels
    ///
    /// Env: ROSETTA_METRICS_INCLUDE_QUERYPARAMS
    pub include_queryparams: bool,
}

pub(crate) fn default_prometheus_prefix() -> String {
    "rosetta_gateway".to_string()
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            prometheus_prefix: default_prometheus_prefix(),
            include_queryparams: false,
        }
    }
}

impl MetricsConfig {
    pub fn validate(&self) -> Result<(), MetricsError> {
        // Must match [a-zA-Z_:][a-zA-Z0-9_:]*, otherwise Prometheus drops the metrics
        let mut chars = self.prometheus_prefix.chars();
        if let Some(first_char) = chars.next() {
            if !first_char.is_ascii_alphabetic() && first_char != '_' && first_char != ':' {
                return Err(MetricsError::InvalidPrometheusPrefix(
                    self.prometheus_prefix.clone(),
                ));
            }

            if chars.any(|ch| !ch.is_ascii_alphanumeric() && ch != '_' && ch != ':') {
                return Err(MetricsError::InvalidPrometheusPrefix(
                    self.prometheus_prefix.clone(),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_prefix(prefix: &str) -> MetricsConfig {
        MetricsConfig {
            enabled: true,
            prometheus_prefix: prefix.to_string(),
            include_queryparams: false,
        }
    }

    #[test]
    fn test_default_metrics_config() {
        let config = MetricsConfig::default();
        assert!(!config.enabled);
        assert_eq!(config.prometheus_prefix, "rosetta_gateway");
        assert!(!config.include_queryparams);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_valid_prometheus_prefixes() {
        for prefix in ["my_app_metrics", "app:metrics", "_metrics", ""] {
            assert!(
                with_prefix(prefix).validate().is_ok(),
                "Prefix '{}' should be valid",
                prefix
            );
        }
    }

    #[test]
    fn test_invalid_prometheus_prefix_starting_with_number() {
        assert!(with_prefix("123metrics").validate().is_err());
    }

    #[test]
    fn test_invalid_prometheus_prefix_with_hyphen() {
        assert!(with_prefix("my-metrics").validate().is_err());
    }

    #[test]
    fn test_invalid_prometheus_prefix_with_special_chars() {
        assert!(with_prefix("my.metrics").validate().is_err());
    }
}
