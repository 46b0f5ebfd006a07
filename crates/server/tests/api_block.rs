// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

mod common;

use axum::http::StatusCode;
use common::{app, assert_rosetta_error, network_identifier, post};
use serde_json::{Value, json};
use server::provider::{
    Block, BlockSummary, ConstructionState, FullTransaction, GenesisBalance, MOCK_EMPTY_HASH,
    MOCK_GENESIS_TIMESTAMP, MiniBlock, MiniBlockProcessingType, MiniBlockType,
    NetworkProviderMock, TransactionKind,
};

fn transaction(hash: &str, kind: TransactionKind, value: &str) -> FullTransaction {
    FullTransaction {
        hash: hash.to_string(),
        kind,
        sender: "alice".to_string(),
        receiver: "bob".to_string(),
        value: value.to_string(),
        gas_price: 1_000_000_000,
        gas_limit: 50_000,
        ..Default::default()
    }
}

fn miniblock(
    kind: MiniBlockType,
    processing_type: MiniBlockProcessingType,
    construction_state: ConstructionState,
    transactions: Vec<FullTransaction>,
) -> MiniBlock {
    MiniBlock {
        kind,
        processing_type,
        construction_state,
        transactions,
        ..Default::default()
    }
}

fn block(nonce: u64, mini_blocks: Vec<MiniBlock>) -> Block {
    Block {
        nonce,
        round: nonce + 1,
        epoch: 1,
        shard: 0,
        hash: format!("hash-{}", nonce),
        previous_block_hash: format!("hash-{}", nonce.saturating_sub(1)),
        mini_blocks,
        ..Default::default()
    }
}

/// Block 10 executes "aaaa", reports "dddd" and "eeee" as invalid and proposes
/// "ffff" for execution in block 11. "dddd" was scheduled by block 9.
fn scheduled_chain() -> NetworkProviderMock {
    let mut mock = NetworkProviderMock::new();

    mock.add_block(block(
        9,
        vec![miniblock(
            MiniBlockType::TxBlock,
            MiniBlockProcessingType::Scheduled,
            ConstructionState::Proposed,
            vec![transaction("dddd", TransactionKind::Normal, "5")],
        )],
    ));
    mock.add_block(block(
        10,
        vec![
            miniblock(
                MiniBlockType::TxBlock,
                MiniBlockProcessingType::Normal,
                ConstructionState::Final,
                vec![transaction("aaaa", TransactionKind::Normal, "100")],
            ),
            miniblock(
                MiniBlockType::InvalidBlock,
                MiniBlockProcessingType::Normal,
                ConstructionState::Final,
                vec![
                    transaction("dddd", TransactionKind::Invalid, "5"),
                    transaction("eeee", TransactionKind::Invalid, "7"),
                ],
            ),
            miniblock(
                MiniBlockType::TxBlock,
                MiniBlockProcessingType::Scheduled,
                ConstructionState::Proposed,
                vec![transaction("ffff", TransactionKind::Normal, "9")],
            ),
        ],
    ));
    mock.add_block(block(11, vec![]));
    mock.latest_block_summary = BlockSummary {
        nonce: 10,
        hash: "hash-10".to_string(),
        previous_block_hash: "hash-9".to_string(),
        timestamp: 0,
    };

    mock
}

fn operations_summary(tx: &Value) -> Vec<(u64, String, String, String)> {
    tx["operations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|op| {
            assert_eq!(op["status"], "Success");
            (
                op["operation_identifier"]["index"].as_u64().unwrap(),
                op["type"].as_str().unwrap().to_string(),
                op["account"]["address"].as_str().unwrap().to_string(),
                op["amount"]["value"].as_str().unwrap().to_string(),
            )
        })
        .collect()
}

fn summary(entries: &[(u64, &str, &str, &str)]) -> Vec<(u64, String, String, String)> {
    entries
        .iter()
        .map(|(index, kind, address, value)| {
            (*index, kind.to_string(), address.to_string(), value.to_string())
        })
        .collect()
}

#[tokio::test]
async fn test_block_with_scheduled_miniblocks() {
    let (status, body) = post(
        app(scheduled_chain()),
        "/block",
        json!({
            "network_identifier": network_identifier(),
            "block_identifier": { "index": 10 }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "body: {}", body);
    let block = &body["block"];
    assert_eq!(block["block_identifier"], json!({ "index": 10, "hash": "hash-10" }));
    assert_eq!(
        block["parent_block_identifier"],
        json!({ "index": 9, "hash": "hash-9" })
    );
    assert_eq!(block["timestamp"], MOCK_GENESIS_TIMESTAMP * 1000 + 11 * 6000);
    assert_eq!(block["metadata"]["shard"], 0);
    assert_eq!(block["metadata"]["round"], 11);

    let transactions = block["transactions"].as_array().unwrap();
    let hashes: Vec<&str> = transactions
        .iter()
        .map(|tx| tx["transaction_identifier"]["hash"].as_str().unwrap())
        .collect();
    assert_eq!(hashes, vec!["aaaa", "eeee"]);

    assert_eq!(
        operations_summary(&transactions[0]),
        summary(&[
            (0, "Transfer", "alice", "-100"),
            (1, "Transfer", "bob", "100"),
            (2, "Fee", "alice", "-50000000000000"),
        ])
    );
    assert_eq!(
        operations_summary(&transactions[1]),
        summary(&[(0, "FeeOfInvalidTransaction", "alice", "-50000000000000")])
    );
}

#[tokio::test]
async fn test_block_by_hash_and_latest() {
    let (status, by_hash) = post(
        app(scheduled_chain()),
        "/block",
        json!({
            "network_identifier": network_identifier(),
            "block_identifier": { "hash": "hash-10" }
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, latest) = post(
        app(scheduled_chain()),
        "/block",
        json!({
            "network_identifier": network_identifier(),
            "block_identifier": {}
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(by_hash, latest);
}

#[tokio::test]
async fn test_scheduled_transaction_shows_up_in_executing_block() {
    let mut mock = scheduled_chain();
    mock.add_block(block(
        12,
        vec![miniblock(
            MiniBlockType::TxBlock,
            MiniBlockProcessingType::Scheduled,
            ConstructionState::Final,
            vec![transaction("ffff", TransactionKind::Normal, "9")],
        )],
    ));

    let (status, body) = post(
        app(mock),
        "/block",
        json!({
            "network_identifier": network_identifier(),
            "block_identifier": { "index": 12 }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["block"]["transactions"][0]["transaction_identifier"]["hash"],
        "ffff"
    );
}

#[tokio::test]
async fn test_genesis_block() {
    let mut mock = NetworkProviderMock::new();
    mock.add_block(Block {
        nonce: 0,
        hash: MOCK_EMPTY_HASH.to_string(),
        ..Default::default()
    });
    mock.genesis_balances = vec![
        GenesisBalance {
            address: "alice".to_string(),
            balance: "1000".to_string(),
        },
        GenesisBalance {
            address: "bob".to_string(),
            balance: "0".to_string(),
        },
    ];

    let (status, body) = post(
        app(mock),
        "/block",
        json!({
            "network_identifier": network_identifier(),
            "block_identifier": { "index": 0 }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let block = &body["block"];
    assert_eq!(block["parent_block_identifier"], block["block_identifier"]);
    assert_eq!(block["timestamp"], MOCK_GENESIS_TIMESTAMP * 1000);

    let transactions = block["transactions"].as_array().unwrap();
    assert_eq!(transactions.len(), 1);
    assert_eq!(
        transactions[0]["transaction_identifier"]["hash"],
        MOCK_EMPTY_HASH
    );
    assert_eq!(
        operations_summary(&transactions[0]),
        summary(&[(0, "GenesisBalanceMovement", "alice", "1000")])
    );
}

#[tokio::test]
async fn test_block_not_found() {
    let (status, body) = post(
        app(scheduled_chain()),
        "/block",
        json!({
            "network_identifier": network_identifier(),
            "block_identifier": { "index": 500 }
        }),
    )
    .await;

    assert_rosetta_error(status, &body, 3);
}

#[tokio::test]
async fn test_block_transaction() {
    let request = |index: u64, hash: &str| {
        json!({
            "network_identifier": network_identifier(),
            "block_identifier": { "index": index, "hash": "hash-10" },
            "transaction_identifier": { "hash": hash }
        })
    };

    let (status, body) = post(app(scheduled_chain()), "/block/transaction", request(10, "eeee")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["transaction"]["transaction_identifier"]["hash"], "eeee");

    let (status, body) = post(app(scheduled_chain()), "/block/transaction", request(11, "eeee")).await;
    assert_rosetta_error(status, &body, 8);

    let (status, body) = post(app(scheduled_chain()), "/block/transaction", request(10, "dddd")).await;
    assert_rosetta_error(status, &body, 8);
}

#[tokio::test]
async fn test_block_offline() {
    let mut mock = scheduled_chain();
    mock.offline = true;

    let (status, body) = post(
        app(mock),
        "/block",
        json!({
            "network_identifier": network_identifier(),
            "block_identifier": { "index": 10 }
        }),
    )
    .await;

    assert_rosetta_error(status, &body, 14);
}
