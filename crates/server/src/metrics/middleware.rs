// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{
    body::Body,
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use http_body_util::BodyExt;
use std::time::Instant;

use crate::errors::ErrorCode;
use crate::state::AppState;

use super::registry::{
    HTTP_REQUEST_ERROR, HTTP_REQUEST_SUCCESS, HTTP_REQUESTS, REQUEST_DURATION_SECONDS,
    RESPONSE_SIZE_BYTES, ROSETTA_ERRORS,
};

const UNMATCHED_ROUTE: &str = "<unmatched>";

/// Route label of a request: the matched route, optionally followed by the
/// sorted query parameter names, e.g. `/health?verbose=<?>`.
fn route_label(
    matched_path: Option<&str>,
    query_string: Option<&str>,
    include_query_params: bool,
) -> String {
    let mut route = matched_path.unwrap_or(UNMATCHED_ROUTE).to_string();

    if include_query_params
        && let Some(query) = query_string
        && !query.is_empty()
    {
        let mut params: Vec<&str> = query
            .split('&')
            .filter_map(|pair| pair.split('=').next())
            .filter(|name| !name.is_empty())
            .collect();
        params.sort_unstable();
        params.dedup();

        let query_params = params
            .iter()
            .map(|name| format!("{}=<?>", name))
            .collect::<Vec<_>>()
            .join("&");

        route = format!("{}?{}", route, query_params);
    }

    route
}

/// Metrics middleware for tracking HTTP requests
pub async fn metrics_middleware(
    State(state): State<AppState>,
    matched_path: Option<MatchedPath>,
    req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path();
    if path == "/metrics" || path == "/metrics.json" {
        return next.run(req).await;
    }

    HTTP_REQUESTS.inc();
    let start = Instant::now();

    let method = req.method().to_string();
    let route = route_label(
        matched_path.as_ref().map(MatchedPath::as_str),
        req.uri().query(),
        state.config.metrics.include_queryparams,
    );

    let response = next.run(req).await;

    let duration = start.elapsed().as_secs_f64();
    let status = response.status();
    let status_code = status.as_u16().to_string();

    if let Some(code) = response.extensions().get::<ErrorCode>() {
        ROSETTA_ERRORS
            .with_label_values(&[&code.code().to_string()])
            .inc();
    }

    if status.is_client_error() || status.is_server_error() {
        HTTP_REQUEST_ERROR.inc();
    } else if status.is_success() {
        HTTP_REQUEST_SUCCESS.inc();
    }

    REQUEST_DURATION_SECONDS
        .with_label_values(&[&method, &route, &status_code])
        .observe(duration);

    let (parts, body) = response.into_parts();
    let bytes = body
        .collect()
        .await
        .map(|collected| collected.to_bytes())
        .unwrap_or_default();

    if !bytes.is_empty() {
        RESPONSE_SIZE_BYTES
            .with_label_values(&[&method, &route, &status_code])
            .observe(bytes.len() as f64);
    }

    Response::from_parts(parts, Body::from(bytes))
}
