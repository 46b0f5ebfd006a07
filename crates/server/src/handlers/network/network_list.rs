// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::errors::ApiError;
use crate::extractors::RosettaJson;
use crate::state::AppState;
use crate::types::{MetadataRequest, NetworkListResponse};
use axum::{Json, extract::State};

/// Handler for POST /network/list
///
/// The gateway serves exactly one network: the configured blockchain on the
/// chain id of the observed node.
pub async fn network_list(
    State(state): State<AppState>,
    RosettaJson(_request): RosettaJson<MetadataRequest>,
) -> Result<Json<NetworkListResponse>, ApiError> {
    Ok(Json(NetworkListResponse {
        network_identifiers: vec![state.network_identifier()],
    }))
}
