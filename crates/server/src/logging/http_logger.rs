// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::errors::ErrorCode;
use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// Logs method, path, status and duration of every request under the `http` target.
///
/// Rosetta errors are always answered with status 500, so they are told apart
/// from genuine server failures by the [`ErrorCode`] the error response carries:
///
/// - DEBUG for 2xx/3xx responses
/// - WARN for 4xx responses and Rosetta errors
/// - ERROR for any other 5xx response
pub async fn http_logger_middleware(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(req).await;

    let duration_ms = start.elapsed().as_millis();
    let status_code = response.status().as_u16();
    let rosetta_code = response.extensions().get::<ErrorCode>().copied();

    match (status_code, rosetta_code) {
        (200..=399, _) => {
            tracing::debug!(
                target: "http",
                method = %method,
                path = %path,
                status = status_code,
                duration_ms = duration_ms,
                "{} {} {} {}ms",
                method,
                path,
                status_code,
                duration_ms
            );
        }
        (400..=499, _) | (_, Some(_)) => {
            tracing::warn!(
                target: "http",
                method = %method,
                path = %path,
                status = status_code,
                rosetta_code = rosetta_code.map(ErrorCode::code),
                duration_ms = duration_ms,
                "{} {} {} {}ms",
                method,
                path,
                status_code,
                duration_ms
            );
        }
        _ => {
            tracing::error!(
                target: "http",
                method = %method,
                path = %path,
                status = status_code,
                duration_ms = duration_ms,
                "{} {} {} {}ms",
                method,
                path,
                status_code,
                duration_ms
            );
        }
    }

    response
}
