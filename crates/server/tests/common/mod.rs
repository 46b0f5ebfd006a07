// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use config::RosettaConfig;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use server::{
    app::create_app,
    provider::{MOCK_ADDRESS_HRP, MOCK_CHAIN_ID, NetworkProviderMock},
    state::AppState,
    utils::encode_address,
};
use std::sync::Arc;
use tower::ServiceExt;

pub fn network_identifier() -> Value {
    json!({ "blockchain": "MultiversX", "network": MOCK_CHAIN_ID })
}

pub fn address(fill: u8) -> String {
    encode_address(MOCK_ADDRESS_HRP, &[fill; 32]).unwrap()
}

pub fn app(mock: NetworkProviderMock) -> Router {
    app_from(Arc::new(mock))
}

/// Builds the app over a mock the test keeps a handle to.
pub fn app_from(mock: Arc<NetworkProviderMock>) -> Router {
    let state = AppState::new(RosettaConfig::default(), mock);
    create_app(state)
}

pub async fn post(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

/// Asserts a Rosetta error response with the given code.
pub fn assert_rosetta_error(status: StatusCode, body: &Value, code: i64) {
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "body: {}", body);
    assert_eq!(body["code"], code, "body: {}", body);
}
