// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::errors::{ApiError, ErrorCode};
use crate::extractors::RosettaJson;
use crate::state::AppState;
use crate::transform::TransactionsTransformer;
use crate::types::{MempoolTransactionRequest, MempoolTransactionResponse};
use axum::{Json, extract::State};

/// Handler for POST /mempool/transaction
pub async fn mempool_transaction(
    State(state): State<AppState>,
    RosettaJson(request): RosettaJson<MempoolTransactionRequest>,
) -> Result<Json<MempoolTransactionResponse>, ApiError> {
    state.check_network(&request.network_identifier)?;
    state.ensure_online()?;

    let hash = &request.transaction_identifier.hash;
    let tx = state
        .provider
        .get_mempool_transaction_by_hash(hash)
        .await
        .map_err(|err| ApiError::from_provider(ErrorCode::CannotParsePoolTransaction, err))?
        .ok_or_else(|| ApiError::new(ErrorCode::TransactionIsNotInPool))?;

    let transformer = TransactionsTransformer::new(state.network_config(), state.currency());

    Ok(Json(MempoolTransactionResponse {
        transaction: transformer.mempool_transaction(&tx),
    }))
}
