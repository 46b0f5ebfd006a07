// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::state::AppState;
use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub offline: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observer: Option<String>,
}

/// Handler for GET /health
///
/// Liveness only; the observer is not contacted.
pub async fn get_health(State(state): State<AppState>) -> Json<HealthResponse> {
    let offline = state.provider.is_offline();

    Json(HealthResponse {
        status: "ok".to_string(),
        offline,
        observer: (!offline).then(|| state.provider.observer_url().to_string()),
    })
}
