// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::handlers::metrics;
use crate::routes::{RegisterRoute, RouteRegistry};
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn routes(registry: &RouteRegistry) -> Router<AppState> {
    Router::new()
        .route_registered(registry, "/metrics", "get", get(metrics::get_metrics))
        .route_registered(
            registry,
            "/metrics.json",
            "get",
            get(metrics::get_metrics_json),
        )
}
