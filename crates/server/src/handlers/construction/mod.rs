// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Construction API.
//!
//! Transactions travel between the construction calls as the hex encoding of
//! their JSON form, which is also the payload the sender signs.

mod combine;
mod derive;
mod hash;
mod metadata;
mod parse;
mod payloads;
mod preprocess;
mod submit;

pub use combine::construction_combine;
pub use derive::construction_derive;
pub use hash::construction_hash;
pub use metadata::construction_metadata;
pub use parse::construction_parse;
pub use payloads::construction_payloads;
pub use preprocess::construction_preprocess;
pub use submit::construction_submit;

use crate::errors::{ApiError, ErrorCode};
use crate::provider::Transaction;

pub(crate) fn encode_transaction(tx: &Transaction) -> Result<String, ApiError> {
    let bytes = serde_json::to_vec(tx)
        .map_err(|err| ApiError::with_original(ErrorCode::MalformedValue, err))?;
    Ok(hex::encode(bytes))
}

pub(crate) fn decode_transaction(encoded: &str) -> Result<Transaction, ApiError> {
    let bytes = hex::decode(encoded)
        .map_err(|err| ApiError::with_original(ErrorCode::MalformedValue, err))?;
    serde_json::from_slice(&bytes)
        .map_err(|err| ApiError::with_original(ErrorCode::MalformedValue, err))
}
