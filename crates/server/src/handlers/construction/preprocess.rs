// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::consts::OP_TRANSFER;
use crate::errors::{ApiError, ErrorCode};
use crate::extractors::RosettaJson;
use crate::state::AppState;
use crate::transform::TransferIntent;
use crate::types::{
    AccountIdentifier, ConstructionPreprocessRequest, ConstructionPreprocessResponse, Metadata,
};
use axum::{Json, extract::State};
use serde_json::Value;

/// Request metadata forwarded untouched to `/construction/metadata`.
const FORWARDED_OPTIONS: &[&str] = &["gasLimit", "gasPrice", "data", "feeMultiplier"];

/// Handler for POST /construction/preprocess
pub async fn construction_preprocess(
    State(state): State<AppState>,
    RosettaJson(request): RosettaJson<ConstructionPreprocessRequest>,
) -> Result<Json<ConstructionPreprocessResponse>, ApiError> {
    state.check_network(&request.network_identifier)?;

    let intent = TransferIntent::try_from(request.operations.as_slice())
        .map_err(|err| ApiError::with_original(ErrorCode::InvalidInputParam, err))?;

    let mut options = Metadata::new();
    options.insert("sender".to_string(), Value::String(intent.sender.clone()));
    options.insert("receiver".to_string(), Value::String(intent.receiver.clone()));
    options.insert("value".to_string(), Value::String(intent.value.to_string()));
    options.insert("type".to_string(), Value::String(OP_TRANSFER.to_string()));

    if let Some(metadata) = &request.metadata {
        for key in FORWARDED_OPTIONS {
            if let Some(value) = metadata.get(*key) {
                options.insert(key.to_string(), value.clone());
            }
        }
    }

    Ok(Json(ConstructionPreprocessResponse {
        options,
        required_public_keys: vec![AccountIdentifier::new(intent.sender)],
    }))
}
