// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::errors::{ApiError, ErrorCode};
use crate::provider::{NetworkConfig, NetworkProvider, ProviderError, ProxyClient};
use crate::routes::RouteRegistry;
use crate::types::{Currency, NetworkIdentifier};
use config::RosettaConfig;
use std::sync::Arc;

/// Read-only state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: RosettaConfig,
    pub provider: Arc<dyn NetworkProvider>,
    pub route_registry: RouteRegistry,
}

impl AppState {
    pub fn new(config: RosettaConfig, provider: Arc<dyn NetworkProvider>) -> Self {
        Self {
            config,
            provider,
            route_registry: RouteRegistry::new(),
        }
    }

    /// Connects to the configured observer, unless running offline.
    pub async fn connect(config: RosettaConfig) -> Result<Self, ProviderError> {
        let provider = ProxyClient::connect(&config.observer, &config.chain).await?;
        Ok(Self::new(config, Arc::new(provider)))
    }

    pub fn network_config(&self) -> &NetworkConfig {
        self.provider.network_config()
    }

    pub fn currency(&self) -> Currency {
        Currency {
            symbol: self.config.chain.native_currency_symbol.clone(),
            decimals: self.config.chain.native_currency_decimals,
        }
    }

    /// The single network served by this gateway.
    pub fn network_identifier(&self) -> NetworkIdentifier {
        NetworkIdentifier {
            blockchain: self.config.chain.blockchain_name.clone(),
            network: self.network_config().chain_id.clone(),
            sub_network_identifier: None,
        }
    }

    pub fn check_network(&self, requested: &NetworkIdentifier) -> Result<(), ApiError> {
        let served = self.network_identifier();
        if requested.blockchain != served.blockchain || requested.network != served.network {
            return Err(ApiError::with_original(
                ErrorCode::InvalidNetworkIdentifier,
                format!(
                    "expected {}/{}, got {}/{}",
                    served.blockchain, served.network, requested.blockchain, requested.network
                ),
            ));
        }
        Ok(())
    }

    pub fn ensure_online(&self) -> Result<(), ApiError> {
        if self.provider.is_offline() {
            return Err(ApiError::new(ErrorCode::OfflineMode));
        }
        Ok(())
    }
}
