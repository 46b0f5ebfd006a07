// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Root endpoint: gateway information and the list of served routes.

use crate::consts::ROSETTA_VERSION;
use crate::state::AppState;
use axum::{Json, extract::State};
use serde_json::{Value, json};

/// Handler for GET /
pub async fn root_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "version": env!("CARGO_PKG_VERSION"),
        "rosettaVersion": ROSETTA_VERSION,
        "network": state.network_identifier(),
        "offline": state.provider.is_offline(),
        "listen": format!("{}:{}", state.config.express.bind_host, state.config.express.port),
        "routes": state.route_registry.routes(),
    }))
}
