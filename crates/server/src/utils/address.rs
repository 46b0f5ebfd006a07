// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Bech32 account addresses.

use bech32::{FromBase32, ToBase32, Variant};
use thiserror::Error;

/// Length of an account public key.
pub const PUBKEY_LEN: usize = 32;

#[derive(Debug, Error, PartialEq)]
pub enum AddressError {
    #[error("invalid bech32 encoding: {0}")]
    Encoding(#[from] bech32::Error),

    #[error("expected hrp '{expected}', got '{actual}'")]
    WrongHrp { expected: String, actual: String },

    #[error("expected a {PUBKEY_LEN} bytes public key, got {0} bytes")]
    WrongLength(usize),
}

pub fn decode_address(hrp: &str, address: &str) -> Result<Vec<u8>, AddressError> {
    let (actual_hrp, data, _variant) = bech32::decode(address)?;
    if actual_hrp != hrp {
        return Err(AddressError::WrongHrp {
            expected: hrp.to_string(),
            actual: actual_hrp,
        });
    }

    let pubkey = Vec::<u8>::from_base32(&data)?;
    if pubkey.len() != PUBKEY_LEN {
        return Err(AddressError::WrongLength(pubkey.len()));
    }

    Ok(pubkey)
}

pub fn encode_address(hrp: &str, pubkey: &[u8]) -> Result<String, AddressError> {
    if pubkey.len() != PUBKEY_LEN {
        return Err(AddressError::WrongLength(pubkey.len()));
    }

    Ok(bech32::encode(hrp, pubkey.to_base32(), Variant::Bech32)?)
}
