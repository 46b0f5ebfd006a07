// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::ConfigError;

/// Static description of the exposed chain.
///
/// The network parameters (`chain_id` .. `round_duration_ms`) are only read in
/// offline mode; online, they are fetched from the observer at startup.
#[derive(Debug, Clone)]
pub struct ChainConfig {
    /// Env: ROSETTA_CHAIN_BLOCKCHAIN_NAME (default: MultiversX)
    pub blockchain_name: String,

    /// Env: ROSETTA_CHAIN_NATIVE_CURRENCY_SYMBOL (default: EGLD)
    pub native_currency_symbol: String,

    /// Env: ROSETTA_CHAIN_NATIVE_CURRENCY_DECIMALS (default: 18)
    pub native_currency_decimals: u32,

    /// Bech32 human readable part of addresses
    ///
    /// Env: ROSETTA_CHAIN_ADDRESS_HRP (default: erd)
    pub address_hrp: String,

    /// Env: ROSETTA_CHAIN_CHAIN_ID (default: 1)
    pub chain_id: String,

    /// Env: ROSETTA_CHAIN_MIN_GAS_PRICE (default: 1000000000)
    pub min_gas_price: u64,

    /// Env: ROSETTA_CHAIN_MIN_GAS_LIMIT (default: 50000)
    pub min_gas_limit: u64,

    /// Env: ROSETTA_CHAIN_GAS_PER_DATA_BYTE (default: 1500)
    pub gas_per_data_byte: u64,

    /// Genesis time, unix seconds
    ///
    /// Env: ROSETTA_CHAIN_GENESIS_TIME (default: 1596117600)
    pub genesis_time: u64,

    /// Env: ROSETTA_CHAIN_ROUND_DURATION_MS (default: 6000)
    pub round_duration_ms: u64,
}

pub(crate) fn default_blockchain_name() -> String {
    "MultiversX".to_string()
}

pub(crate) fn default_native_currency_symbol() -> String {
    "EGLD".to_string()
}

pub(crate) fn default_native_currency_decimals() -> u32 {
    18
}

pub(crate) fn default_address_hrp() -> String {
    "erd".to_string()
}

pub(crate) fn default_chain_id() -> String {
    "1".to_string()
}

pub(crate) fn default_min_gas_price() -> u64 {
    1_000_000_000
}

pub(crate) fn default_min_gas_limit() -> u64 {
    50_000
}

pub(crate) fn default_gas_per_data_byte() -> u64 {
    1_500
}

pub(crate) fn default_genesis_time() -> u64 {
    1_596_117_600
}

pub(crate) fn default_round_duration_ms() -> u64 {
    6_000
}

impl ChainConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.blockchain_name.is_empty() {
            return Err(ConfigError::ValidateError(
                "Blockchain name cannot be empty".to_string(),
            ));
        }

        if self.native_currency_symbol.is_empty() {
            return Err(ConfigError::ValidateError(
                "Native currency symbol cannot be empty".to_string(),
            ));
        }

        if self.address_hrp.is_empty() || !self.address_hrp.is_ascii() {
            return Err(ConfigError::ValidateError(format!(
                "Invalid address hrp '{}'",
                self.address_hrp
            )));
        }

        if self.round_duration_ms == 0 {
            return Err(ConfigError::ValidateError(
                "Round duration cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            blockchain_name: default_blockchain_name(),
            native_currency_symbol: default_native_currency_symbol(),
            native_currency_decimals: default_native_currency_decimals(),
            address_hrp: default_address_hrp(),
            chain_id: default_chain_id(),
            min_gas_price: default_min_gas_price(),
            min_gas_limit: default_min_gas_limit(),
            gas_per_data_byte: default_gas_per_data_byte(),
            genesis_time: default_genesis_time(),
            round_duration_ms: default_round_duration_ms(),
        }
    }
}
