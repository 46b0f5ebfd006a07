// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::errors::{ApiError, ErrorCode};
use crate::extractors::RosettaJson;
use crate::handlers::common::{build_block, fetch_block};
use crate::state::AppState;
use crate::types::{BlockTransactionRequest, BlockTransactionResponse, PartialBlockIdentifier};
use axum::{Json, extract::State};

/// Handler for POST /block/transaction
pub async fn block_transaction(
    State(state): State<AppState>,
    RosettaJson(request): RosettaJson<BlockTransactionRequest>,
) -> Result<Json<BlockTransactionResponse>, ApiError> {
    state.check_network(&request.network_identifier)?;
    state.ensure_online()?;

    let identifier = PartialBlockIdentifier {
        index: None,
        hash: Some(request.block_identifier.hash.clone()),
    };
    let raw = fetch_block(state.provider.as_ref(), &identifier).await?;

    if raw.nonce != request.block_identifier.index {
        return Err(ApiError::with_original(
            ErrorCode::InvalidInputParam,
            format!(
                "block {} has index {}, not {}",
                raw.hash, raw.nonce, request.block_identifier.index
            ),
        ));
    }

    let block = build_block(&state, &raw).await?;
    let hash = &request.transaction_identifier.hash;

    let transaction = block
        .transactions
        .into_iter()
        .find(|tx| &tx.transaction_identifier.hash == hash)
        .ok_or_else(|| {
            ApiError::with_original(
                ErrorCode::InvalidInputParam,
                format!("transaction {} not found in block {}", hash, raw.hash),
            )
        })?;

    Ok(Json(BlockTransactionResponse { transaction }))
}
