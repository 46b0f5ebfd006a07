// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

/// Rosetta API version implemented by the gateway
pub const ROSETTA_VERSION: &str = "1.4.12";

/// Version of the gateway itself, reported as the middleware version
pub const MIDDLEWARE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Node version reported by `/network/options`
pub const NODE_VERSION: &str = "v1.3.37";

// Operation types
pub const OP_TRANSFER: &str = "Transfer";
pub const OP_FEE: &str = "Fee";
pub const OP_REWARD: &str = "Reward";
pub const OP_SC_RESULT: &str = "SmartContractResult";
pub const OP_FEE_OF_INVALID_TX: &str = "FeeOfInvalidTransaction";
pub const OP_GENESIS_BALANCE_MOVEMENT: &str = "GenesisBalanceMovement";
pub const OP_FEE_REFUND: &str = "FeeRefund";

pub const SUPPORTED_OPERATION_TYPES: &[&str] = &[
    OP_TRANSFER,
    OP_FEE,
    OP_REWARD,
    OP_SC_RESULT,
    OP_FEE_OF_INVALID_TX,
    OP_GENESIS_BALANCE_MOVEMENT,
    OP_FEE_REFUND,
];

pub const OP_STATUS_SUCCESS: &str = "Success";

/// `(status, successful)` pairs reported by `/network/options`
pub const SUPPORTED_OPERATION_STATUSES: &[(&str, bool)] = &[(OP_STATUS_SUCCESS, true)];

pub const TRANSACTION_VERSION: u32 = 1;

pub const CURVE_EDWARDS25519: &str = "edwards25519";
pub const SIGNATURE_TYPE_ED25519: &str = "ed25519";
