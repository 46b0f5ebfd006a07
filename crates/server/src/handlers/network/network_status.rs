// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::errors::{ApiError, ErrorCode};
use crate::extractors::RosettaJson;
use crate::handlers::common::block_summary_to_identifier;
use crate::state::AppState;
use crate::types::{NetworkRequest, NetworkStatusResponse, Peer};
use axum::{Json, extract::State};

/// Handler for POST /network/status
pub async fn network_status(
    State(state): State<AppState>,
    RosettaJson(request): RosettaJson<NetworkRequest>,
) -> Result<Json<NetworkStatusResponse>, ApiError> {
    state.check_network(&request.network_identifier)?;
    state.ensure_online()?;

    let (latest, genesis) = tokio::join!(
        state.provider.get_latest_block_summary(),
        state.provider.get_genesis_block_summary(),
    );

    let latest = latest.map_err(|err| ApiError::from_provider(ErrorCode::UnableToGetBlock, err))?;
    let genesis =
        genesis.map_err(|err| ApiError::from_provider(ErrorCode::UnableToGetBlock, err))?;

    let genesis_block_identifier = block_summary_to_identifier(&genesis);

    Ok(Json(NetworkStatusResponse {
        current_block_identifier: block_summary_to_identifier(&latest),
        current_block_timestamp: latest.timestamp,
        oldest_block_identifier: genesis_block_identifier.clone(),
        genesis_block_identifier,
        peers: vec![Peer {
            peer_id: state.provider.observer_url().to_string(),
        }],
    }))
}
