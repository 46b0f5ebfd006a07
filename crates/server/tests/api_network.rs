// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

mod common;

use axum::http::StatusCode;
use common::{address, app, assert_rosetta_error, get, network_identifier, post};
use serde_json::json;
use server::provider::{BlockSummary, MOCK_EMPTY_HASH, NetworkProviderMock, ProviderError};

fn mock_with_latest_block() -> NetworkProviderMock {
    let mut mock = NetworkProviderMock::new();
    mock.latest_block_summary = BlockSummary {
        nonce: 42,
        hash: "aaaa".to_string(),
        previous_block_hash: "bbbb".to_string(),
        timestamp: 1596117852000,
    };
    mock
}

#[tokio::test]
async fn test_network_list() {
    let (status, body) = post(app(NetworkProviderMock::new()), "/network/list", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["network_identifiers"], json!([network_identifier()]));
}

#[tokio::test]
async fn test_network_status() {
    let (status, body) = post(
        app(mock_with_latest_block()),
        "/network/status",
        json!({ "network_identifier": network_identifier() }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["current_block_identifier"],
        json!({ "index": 42, "hash": "aaaa" })
    );
    assert_eq!(body["current_block_timestamp"], 1596117852000u64);
    assert_eq!(
        body["genesis_block_identifier"],
        json!({ "index": 0, "hash": MOCK_EMPTY_HASH })
    );
    assert_eq!(body["oldest_block_identifier"], body["genesis_block_identifier"]);
    assert_eq!(body["peers"][0]["peer_id"], "http://observer.test");
}

#[tokio::test]
async fn test_network_status_wrong_network() {
    let (status, body) = post(
        app(mock_with_latest_block()),
        "/network/status",
        json!({ "network_identifier": { "blockchain": "MultiversX", "network": "mainnet" } }),
    )
    .await;

    assert_rosetta_error(status, &body, 13);
    assert_eq!(body["retriable"], false);
    assert!(body["details"]["originalError"].is_string());
}

#[tokio::test]
async fn test_network_status_offline() {
    let mut mock = mock_with_latest_block();
    mock.offline = true;

    let (status, body) = post(
        app(mock),
        "/network/status",
        json!({ "network_identifier": network_identifier() }),
    )
    .await;

    assert_rosetta_error(status, &body, 14);
}

#[tokio::test]
async fn test_network_status_observer_failure_is_retriable() {
    let mock = mock_with_latest_block();
    mock.fail_next(ProviderError::Observer("node is syncing".to_string()));

    let (status, body) = post(
        app(mock),
        "/network/status",
        json!({ "network_identifier": network_identifier() }),
    )
    .await;

    assert_rosetta_error(status, &body, 3);
    assert_eq!(body["retriable"], true);
}

#[tokio::test]
async fn test_network_options() {
    let (status, body) = post(
        app(NetworkProviderMock::new()),
        "/network/options",
        json!({ "network_identifier": network_identifier() }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["version"]["rosetta_version"], "1.4.12");

    let allow = &body["allow"];
    assert_eq!(allow["historical_balance_lookup"], false);
    assert_eq!(
        allow["operation_statuses"],
        json!([{ "status": "Success", "successful": true }])
    );

    let types = allow["operation_types"].as_array().unwrap();
    for kind in [
        "Transfer",
        "Fee",
        "Reward",
        "SmartContractResult",
        "FeeRefund",
        "FeeOfInvalidTransaction",
        "GenesisBalanceMovement",
    ] {
        assert!(types.contains(&json!(kind)), "missing {}", kind);
    }

    let errors = allow["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 18);
    assert_eq!(errors[0]["code"], 0);
}

#[tokio::test]
async fn test_network_options_work_offline() {
    let mut mock = NetworkProviderMock::new();
    mock.offline = true;

    let (status, _) = post(
        app(mock),
        "/network/options",
        json!({ "network_identifier": network_identifier() }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_malformed_request_body() {
    let (status, body) = post(
        app(NetworkProviderMock::new()),
        "/network/status",
        json!({ "network": "missing identifier" }),
    )
    .await;

    assert_rosetta_error(status, &body, 8);
}

#[tokio::test]
async fn test_account_balance() {
    let alice = address(1);
    let mut mock = mock_with_latest_block();
    mock.add_account(&alice, 7, "1000000000000000000");

    let (status, body) = post(
        app(mock),
        "/account/balance",
        json!({
            "network_identifier": network_identifier(),
            "account_identifier": { "address": alice }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["block_identifier"], json!({ "index": 42, "hash": "aaaa" }));
    assert_eq!(body["balances"][0]["value"], "1000000000000000000");
    assert_eq!(body["balances"][0]["currency"]["symbol"], "EGLD");
    assert_eq!(body["balances"][0]["currency"]["decimals"], 18);
    assert_eq!(body["metadata"]["nonce"], 7);
}

#[tokio::test]
async fn test_account_balance_empty_is_zero() {
    let alice = address(1);
    let mut mock = mock_with_latest_block();
    mock.add_account(&alice, 0, "");

    let (status, body) = post(
        app(mock),
        "/account/balance",
        json!({
            "network_identifier": network_identifier(),
            "account_identifier": { "address": alice }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["balances"][0]["value"], "0");
}

#[tokio::test]
async fn test_account_balance_errors() {
    let request = |address: &str, block: serde_json::Value| {
        json!({
            "network_identifier": network_identifier(),
            "account_identifier": { "address": address },
            "block_identifier": block
        })
    };

    let (status, body) = post(
        app(mock_with_latest_block()),
        "/account/balance",
        request("not-an-address", json!({})),
    )
    .await;
    assert_rosetta_error(status, &body, 2);

    let (status, body) = post(
        app(mock_with_latest_block()),
        "/account/balance",
        request(&address(2), json!({})),
    )
    .await;
    assert_rosetta_error(status, &body, 1);

    let (status, body) = post(
        app(mock_with_latest_block()),
        "/account/balance",
        request(&address(2), json!({ "index": 10 })),
    )
    .await;
    assert_rosetta_error(status, &body, 4);
}

#[tokio::test]
async fn test_health_and_root() {
    let (status, body) = get(app(NetworkProviderMock::new()), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["offline"], false);

    let (status, body) = get(app(NetworkProviderMock::new()), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["network"], network_identifier());

    let routes = body["routes"].as_array().unwrap();
    assert!(
        routes
            .iter()
            .any(|route| route["path"] == "/construction/submit")
    );
}
