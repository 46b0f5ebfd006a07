// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Custom Axum extractors that return Rosetta error responses.

use crate::errors::{ApiError, ErrorCode};
use async_trait::async_trait;
use axum::Json;
use axum::extract::{FromRequest, Request};
use axum::extract::rejection::JsonRejection;
use serde::de::DeserializeOwned;

/// A wrapper around [`Json<T>`] that rejects with a Rosetta error.
///
/// Axum's default `Json<T>` answers malformed bodies with plain-text errors and
/// 4xx statuses. Rosetta clients expect the `Error` object instead, so every
/// rejection becomes `InvalidInputParam` with the reason in `details`.
pub struct RosettaJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for RosettaJson<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(RosettaJson(value)),
            Err(rejection) => Err(invalid_input(rejection)),
        }
    }
}

fn invalid_input(rejection: JsonRejection) -> ApiError {
    ApiError::with_original(ErrorCode::InvalidInputParam, rejection.body_text())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::body::Body;
    use axum::http::StatusCode;
    use axum::routing::post;
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Debug, Deserialize)]
    struct TestRequest {
        #[allow(dead_code)]
        network: String,
    }

    async fn test_handler(RosettaJson(_request): RosettaJson<TestRequest>) -> &'static str {
        "ok"
    }

    async fn send_request(body: &str, content_type: &str) -> (StatusCode, String) {
        let app = Router::new().route("/test", post(test_handler));
        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .method("POST")
                    .uri("/test")
                    .header("content-type", content_type)
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8_lossy(&body).to_string())
    }

    #[tokio::test]
    async fn valid_body_returns_200() {
        let (status, body) = send_request(r#"{"network": "1"}"#, "application/json").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn missing_field_returns_rosetta_error() {
        let (status, body) = send_request("{}", "application/json").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        let parsed: serde_json::Value =
            serde_json::from_str(&body).expect("Response should be valid JSON");
        assert_eq!(parsed["code"], ErrorCode::InvalidInputParam.code());
        let reason = parsed["details"]["originalError"].as_str().unwrap();
        assert!(reason.contains("network"), "unexpected reason: {reason}");
    }

    #[tokio::test]
    async fn wrong_content_type_returns_rosetta_error() {
        let (_, body) = send_request(r#"{"network": "1"}"#, "text/plain").await;
        let parsed: serde_json::Value =
            serde_json::from_str(&body).expect("Response must be valid JSON, not plain text");
        assert_eq!(parsed["code"], ErrorCode::InvalidInputParam.code());
    }
}
