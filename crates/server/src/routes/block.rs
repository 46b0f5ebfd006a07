// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::handlers::block;
use crate::routes::{RegisterRoute, RouteRegistry};
use crate::state::AppState;
use axum::{Router, routing::post};

pub fn routes(registry: &RouteRegistry) -> Router<AppState> {
    Router::new()
        .route_registered(registry, "/block", "post", post(block::block))
        .route_registered(
            registry,
            "/block/transaction",
            "post",
            post(block::block_transaction),
        )
}
