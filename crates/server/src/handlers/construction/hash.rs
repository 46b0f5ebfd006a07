// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::decode_transaction;
use crate::errors::{ApiError, ErrorCode};
use crate::extractors::RosettaJson;
use crate::state::AppState;
use crate::types::{ConstructionHashRequest, TransactionIdentifier, TransactionIdentifierResponse};
use axum::{Json, extract::State};

/// Handler for POST /construction/hash
///
/// The hash is computed by the node, which knows the exact serialization it
/// hashes.
pub async fn construction_hash(
    State(state): State<AppState>,
    RosettaJson(request): RosettaJson<ConstructionHashRequest>,
) -> Result<Json<TransactionIdentifierResponse>, ApiError> {
    state.check_network(&request.network_identifier)?;
    state.ensure_online()?;

    let tx = decode_transaction(&request.signed_transaction)?;
    let hash = state
        .provider
        .compute_transaction_hash(&tx)
        .await
        .map_err(|err| ApiError::from_provider(ErrorCode::UnableToComputeTransactionHash, err))?;

    Ok(Json(TransactionIdentifierResponse {
        transaction_identifier: TransactionIdentifier::new(hash),
        metadata: None,
    }))
}
