// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::errors::{ApiError, ErrorCode};
use crate::extractors::RosettaJson;
use crate::state::AppState;
use crate::types::NetworkRequest;
use axum::extract::State;

/// Handler for POST /mempool
///
/// Listing the whole pool is not supported.
pub async fn mempool(
    State(state): State<AppState>,
    RosettaJson(request): RosettaJson<NetworkRequest>,
) -> Result<(), ApiError> {
    state.check_network(&request.network_identifier)?;
    Err(ApiError::new(ErrorCode::NotImplemented))
}
