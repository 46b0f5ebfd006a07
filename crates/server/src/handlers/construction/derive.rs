// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::consts::CURVE_EDWARDS25519;
use crate::errors::{ApiError, ErrorCode};
use crate::extractors::RosettaJson;
use crate::state::AppState;
use crate::types::{AccountIdentifier, ConstructionDeriveRequest, ConstructionDeriveResponse};
use axum::{Json, extract::State};

/// Handler for POST /construction/derive
///
/// The address of an account is the bech32 encoding of its ed25519 public key.
pub async fn construction_derive(
    State(state): State<AppState>,
    RosettaJson(request): RosettaJson<ConstructionDeriveRequest>,
) -> Result<Json<ConstructionDeriveResponse>, ApiError> {
    state.check_network(&request.network_identifier)?;

    if request.public_key.curve_type != CURVE_EDWARDS25519 {
        return Err(ApiError::with_original(
            ErrorCode::UnsupportedCurveType,
            &request.public_key.curve_type,
        ));
    }

    let pubkey = hex::decode(&request.public_key.hex_bytes)
        .map_err(|err| ApiError::with_original(ErrorCode::MalformedValue, err))?;
    let address = state
        .provider
        .encode_address(&pubkey)
        .map_err(|err| ApiError::with_original(ErrorCode::MalformedValue, err))?;

    Ok(Json(ConstructionDeriveResponse {
        account_identifier: AccountIdentifier::new(address),
    }))
}
