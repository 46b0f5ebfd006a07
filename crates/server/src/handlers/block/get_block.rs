// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::errors::ApiError;
use crate::extractors::RosettaJson;
use crate::handlers::common::{build_block, fetch_block};
use crate::state::AppState;
use crate::types::{BlockRequest, BlockResponse};
use axum::{Json, extract::State};

/// Handler for POST /block
///
/// Fetches the requested block together with its two neighbours and returns
/// the transactions whose effects belong to it.
pub async fn block(
    State(state): State<AppState>,
    RosettaJson(request): RosettaJson<BlockRequest>,
) -> Result<Json<BlockResponse>, ApiError> {
    state.check_network(&request.network_identifier)?;
    state.ensure_online()?;

    let raw = fetch_block(state.provider.as_ref(), &request.block_identifier).await?;
    let block = build_block(&state, &raw).await?;

    tracing::debug!(
        nonce = block.block_identifier.index,
        transactions = block.transactions.len(),
        "Served block"
    );

    Ok(Json(BlockResponse { block }))
}
