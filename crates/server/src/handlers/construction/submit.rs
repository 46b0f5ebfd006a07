// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::decode_transaction;
use crate::errors::{ApiError, ErrorCode};
use crate::extractors::RosettaJson;
use crate::state::AppState;
use crate::types::{
    ConstructionSubmitRequest, TransactionIdentifier, TransactionIdentifierResponse,
};
use axum::{Json, extract::State};

/// Handler for POST /construction/submit
pub async fn construction_submit(
    State(state): State<AppState>,
    RosettaJson(request): RosettaJson<ConstructionSubmitRequest>,
) -> Result<Json<TransactionIdentifierResponse>, ApiError> {
    state.check_network(&request.network_identifier)?;
    state.ensure_online()?;

    let tx = decode_transaction(&request.signed_transaction)?;
    let hash = state
        .provider
        .send_transaction(&tx)
        .await
        .map_err(|err| {
            tracing::warn!(sender = %tx.sender, nonce = tx.nonce, error = %err, "Failed to submit transaction");
            ApiError::from_provider(ErrorCode::UnableToSubmitTransaction, err)
        })?;

    tracing::info!(hash = %hash, "Submitted transaction");

    Ok(Json(TransactionIdentifierResponse {
        transaction_identifier: TransactionIdentifier::new(hash),
        metadata: None,
    }))
}
