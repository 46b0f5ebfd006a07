// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{decode_transaction, encode_transaction};
use crate::errors::{ApiError, ErrorCode};
use crate::extractors::RosettaJson;
use crate::state::AppState;
use crate::types::{ConstructionCombineRequest, ConstructionCombineResponse};
use axum::{Json, extract::State};

/// Handler for POST /construction/combine
pub async fn construction_combine(
    State(state): State<AppState>,
    RosettaJson(request): RosettaJson<ConstructionCombineRequest>,
) -> Result<Json<ConstructionCombineResponse>, ApiError> {
    state.check_network(&request.network_identifier)?;

    let mut tx = decode_transaction(&request.unsigned_transaction)?;

    let [signature] = request.signatures.as_slice() else {
        return Err(ApiError::with_original(
            ErrorCode::InvalidInputParam,
            format!("expected one signature, got {}", request.signatures.len()),
        ));
    };

    hex::decode(&signature.hex_bytes)
        .map_err(|err| ApiError::with_original(ErrorCode::MalformedValue, err))?;
    tx.signature = signature.hex_bytes.clone();

    Ok(Json(ConstructionCombineResponse {
        signed_transaction: encode_transaction(&tx)?,
    }))
}
