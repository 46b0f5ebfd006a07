// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::encode_transaction;
use crate::consts::{SIGNATURE_TYPE_ED25519, TRANSACTION_VERSION};
use crate::errors::{ApiError, ErrorCode};
use crate::extractors::RosettaJson;
use crate::provider::Transaction;
use crate::state::AppState;
use crate::transform::TransferIntent;
use crate::types::{
    AccountIdentifier, ConstructionPayloadsRequest, ConstructionPayloadsResponse, Metadata,
    SigningPayload,
};
use crate::utils::numeric::extract_u64;
use axum::{Json, extract::State};
use serde_json::Value;

fn required_u64(metadata: &Metadata, key: &str) -> Result<u64, ApiError> {
    metadata.get(key).and_then(extract_u64).ok_or_else(|| {
        ApiError::with_original(ErrorCode::InvalidInputParam, format!("missing {}", key))
    })
}

/// Handler for POST /construction/payloads
pub async fn construction_payloads(
    State(state): State<AppState>,
    RosettaJson(request): RosettaJson<ConstructionPayloadsRequest>,
) -> Result<Json<ConstructionPayloadsResponse>, ApiError> {
    state.check_network(&request.network_identifier)?;

    let intent = TransferIntent::try_from(request.operations.as_slice())
        .map_err(|err| ApiError::with_original(ErrorCode::InvalidInputParam, err))?;
    let metadata = &request.metadata;

    let tx = Transaction {
        nonce: required_u64(metadata, "nonce")?,
        value: intent.value.to_string(),
        receiver: intent.receiver,
        sender: intent.sender.clone(),
        gas_price: required_u64(metadata, "gasPrice")?,
        gas_limit: required_u64(metadata, "gasLimit")?,
        data: metadata
            .get("data")
            .and_then(Value::as_str)
            .map(|data| data.as_bytes().to_vec())
            .unwrap_or_default(),
        signature: String::new(),
        chain_id: metadata
            .get("chainID")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| state.network_config().chain_id.clone()),
        version: metadata
            .get("version")
            .and_then(extract_u64)
            .map_or(TRANSACTION_VERSION, |version| version as u32),
    };

    let unsigned_transaction = encode_transaction(&tx)?;

    Ok(Json(ConstructionPayloadsResponse {
        payloads: vec![SigningPayload {
            account_identifier: Some(AccountIdentifier::new(intent.sender)),
            hex_bytes: unsigned_transaction.clone(),
            signature_type: Some(SIGNATURE_TYPE_ED25519.to_string()),
        }],
        unsigned_transaction,
    }))
}
