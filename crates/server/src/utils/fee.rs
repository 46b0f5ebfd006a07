// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Gas and fee computation for transaction construction.
//!
//! Only move-balance transfers can be constructed, so only [`OP_TRANSFER`]
//! has a gas model; every other operation type is `NotImplemented`.

use super::numeric::{extract_f64, extract_u64};
use crate::consts::OP_TRANSFER;
use crate::provider::NetworkConfig;
use serde_json::{Map, Value};
use thiserror::Error;

// ================================================================================================
// Error Types
// ================================================================================================

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FeeError {
    #[error("Operation type is not supported for fee estimation")]
    NotImplemented,

    #[error("Provided gas limit is insufficient")]
    InsufficientGasLimit,

    #[error("Provided gas price is too low")]
    GasPriceTooLow,
}

// ================================================================================================
// Options
// ================================================================================================

/// Fee related construction options.
///
/// Malformed values are treated as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeeOptions {
    pub gas_limit: Option<u64>,
    pub gas_price: Option<u64>,
    pub data: Vec<u8>,
    pub fee_multiplier: Option<f64>,
}

impl FeeOptions {
    pub fn from_map(options: &Map<String, Value>) -> Self {
        Self {
            gas_limit: options.get("gasLimit").and_then(extract_u64),
            gas_price: options.get("gasPrice").and_then(extract_u64),
            data: options
                .get("data")
                .and_then(Value::as_str)
                .map(|data| data.as_bytes().to_vec())
                .unwrap_or_default(),
            fee_multiplier: options.get("feeMultiplier").and_then(extract_f64),
        }
    }
}

/// Outcome of [`compute_suggested_fee_and_gas`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestedFee {
    pub fee: u128,
    pub gas_price: u64,
    pub gas_limit: u64,
}

// ================================================================================================
// Estimation
// ================================================================================================

/// Gas needed by a move-balance transaction carrying `options.data`.
///
/// Without options the minimum gas limit is returned.
pub fn estimate_gas_limit(
    operation_type: &str,
    network_config: &NetworkConfig,
    options: Option<&FeeOptions>,
) -> Result<u64, FeeError> {
    if operation_type != OP_TRANSFER {
        return Err(FeeError::NotImplemented);
    }

    let data_len = options.map_or(0, |options| options.data.len() as u64);
    Ok(network_config.min_gas_limit + network_config.gas_per_data_byte * data_len)
}

pub fn check_provided_gas_limit(
    provided_gas_limit: u64,
    operation_type: &str,
    options: Option<&FeeOptions>,
    network_config: &NetworkConfig,
) -> Result<(), FeeError> {
    let estimated = estimate_gas_limit(operation_type, network_config, options)?;
    if provided_gas_limit < estimated {
        return Err(FeeError::InsufficientGasLimit);
    }
    Ok(())
}

/// Suggested fee, gas price and gas limit for a transaction of `operation_type`.
///
/// The gas price defaults to the network minimum and the gas limit to the
/// estimate. A provided gas limit is only validated, never raised.
pub fn compute_suggested_fee_and_gas(
    operation_type: &str,
    options: &FeeOptions,
    network_config: &NetworkConfig,
) -> Result<SuggestedFee, FeeError> {
    if operation_type != OP_TRANSFER {
        return Err(FeeError::NotImplemented);
    }

    let gas_price = match options.gas_price {
        Some(gas_price) if gas_price < network_config.min_gas_price => {
            return Err(FeeError::GasPriceTooLow);
        }
        Some(gas_price) => gas_price,
        None => network_config.min_gas_price,
    };

    let gas_limit = match options.gas_limit {
        Some(gas_limit) => {
            check_provided_gas_limit(gas_limit, operation_type, Some(options), network_config)?;
            gas_limit
        }
        None => estimate_gas_limit(operation_type, network_config, Some(options))?,
    };

    let fee = gas_price as u128 * gas_limit as u128;

    if options.fee_multiplier.is_none() {
        return Ok(SuggestedFee {
            fee,
            gas_price,
            gas_limit,
        });
    }

    let (fee, gas_price) =
        adjust_tx_fee_with_fee_multiplier(fee, gas_price, options, network_config.min_gas_price);

    Ok(SuggestedFee {
        fee,
        gas_price,
        gas_limit,
    })
}

/// Scales the fee and the gas price by `options.fee_multiplier` (1 when absent).
///
/// Both are scaled independently and truncated; only the gas price is raised
/// back to `min_gas_price`. The adjusted fee can therefore differ from
/// `gas_price * gas_limit`.
pub fn adjust_tx_fee_with_fee_multiplier(
    fee: u128,
    gas_price: u64,
    options: &FeeOptions,
    min_gas_price: u64,
) -> (u128, u64) {
    let multiplier = options.fee_multiplier.unwrap_or(1.0);

    let adjusted_fee = (fee as f64 * multiplier) as u128;
    let adjusted_gas_price = ((gas_price as f64 * multiplier) as u64).max(min_gas_price);

    (adjusted_fee, adjusted_gas_price)
}
