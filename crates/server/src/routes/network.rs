// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::handlers::network;
use crate::routes::{RegisterRoute, RouteRegistry};
use crate::state::AppState;
use axum::{Router, routing::post};

pub fn routes(registry: &RouteRegistry) -> Router<AppState> {
    Router::new()
        .route_registered(registry, "/network/list", "post", post(network::network_list))
        .route_registered(registry, "/network/status", "post", post(network::network_status))
        .route_registered(registry, "/network/options", "post", post(network::network_options))
}
