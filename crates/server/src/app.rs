// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::{
    logging::http_logger_middleware, metrics::metrics_middleware, routes, state::AppState,
};
use axum::{Router, middleware, routing::get};
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer};

/// Builds the router with every Rosetta endpoint plus the operational ones.
pub fn create_app(state: AppState) -> Router {
    let registry = &state.route_registry;

    let mut router = Router::new()
        .route("/", get(routes::root::root_handler))
        .merge(routes::network::routes(registry))
        .merge(routes::account::routes(registry))
        .merge(routes::block::routes(registry))
        .merge(routes::mempool::routes(registry))
        .merge(routes::construction::routes(registry))
        .merge(routes::health::routes(registry));

    if state.config.metrics.enabled {
        router = router.merge(routes::metrics::routes(registry)).layer(
            middleware::from_fn_with_state(state.clone(), metrics_middleware),
        );
    }

    router
        .layer(middleware::from_fn(http_logger_middleware))
        .layer(RequestBodyLimitLayer::new(state.config.express.request_limit))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
