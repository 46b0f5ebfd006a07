// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::consts::{
    MIDDLEWARE_VERSION, NODE_VERSION, ROSETTA_VERSION, SUPPORTED_OPERATION_STATUSES,
    SUPPORTED_OPERATION_TYPES,
};
use crate::errors::{ApiError, ErrorCode};
use crate::extractors::RosettaJson;
use crate::state::AppState;
use crate::types::{Allow, NetworkOptionsResponse, NetworkRequest, OperationStatus, Version};
use axum::{Json, extract::State};

/// Handler for POST /network/options
///
/// Answers from static tables only, so it works offline as well.
pub async fn network_options(
    State(state): State<AppState>,
    RosettaJson(request): RosettaJson<NetworkRequest>,
) -> Result<Json<NetworkOptionsResponse>, ApiError> {
    state.check_network(&request.network_identifier)?;

    Ok(Json(NetworkOptionsResponse {
        version: Version {
            rosetta_version: ROSETTA_VERSION.to_string(),
            node_version: NODE_VERSION.to_string(),
            middleware_version: Some(MIDDLEWARE_VERSION.to_string()),
        },
        allow: Allow {
            operation_statuses: SUPPORTED_OPERATION_STATUSES
                .iter()
                .map(|(status, successful)| OperationStatus {
                    status: status.to_string(),
                    successful: *successful,
                })
                .collect(),
            operation_types: SUPPORTED_OPERATION_TYPES
                .iter()
                .map(|kind| kind.to_string())
                .collect(),
            errors: ErrorCode::all_objects(),
            historical_balance_lookup: false,
        },
    }))
}
