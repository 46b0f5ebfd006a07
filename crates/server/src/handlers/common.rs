// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Helpers shared by the Rosetta handlers.

use crate::errors::{ApiError, ErrorCode};
use crate::metrics::BlockMetrics;
use crate::provider::{
    self, BlockSummary, NetworkProvider, ProviderError, simplify_block_with_scheduled_transactions,
};
use crate::state::AppState;
use crate::transform::TransactionsTransformer;
use crate::types::{self, BlockIdentifier, PartialBlockIdentifier};
use serde_json::{Value, json};

pub fn block_summary_to_identifier(summary: &BlockSummary) -> BlockIdentifier {
    BlockIdentifier {
        index: summary.nonce,
        hash: summary.hash.clone(),
    }
}

/// Fetches the raw block designated by `identifier`.
///
/// The index wins over the hash; with neither, the latest block is fetched.
pub async fn fetch_block(
    provider: &dyn NetworkProvider,
    identifier: &PartialBlockIdentifier,
) -> Result<provider::Block, ApiError> {
    let result = match (identifier.index, identifier.hash.as_deref()) {
        (Some(nonce), _) => provider.get_block_by_nonce(nonce).await,
        (None, Some(hash)) => provider.get_block_by_hash(hash).await,
        (None, None) => {
            let latest = provider
                .get_latest_block_summary()
                .await
                .map_err(|err| ApiError::from_provider(ErrorCode::UnableToGetBlock, err))?;
            provider.get_block_by_nonce(latest.nonce).await
        }
    };

    result.map_err(|err| ApiError::from_provider(ErrorCode::UnableToGetBlock, err))
}

/// A neighbour that does not exist is an empty block.
async fn fetch_neighbour(
    provider: &dyn NetworkProvider,
    nonce: Option<u64>,
) -> Result<provider::Block, ApiError> {
    let Some(nonce) = nonce else {
        return Ok(provider::Block::default());
    };

    match provider.get_block_by_nonce(nonce).await {
        Ok(block) => Ok(block),
        Err(ProviderError::NotFound(_)) => {
            tracing::debug!(nonce, "Neighbour block not found, assuming an empty block");
            Ok(provider::Block::default())
        }
        Err(err) => Err(ApiError::from_provider(ErrorCode::UnableToGetBlock, err)),
    }
}

/// Reconciles `block` with its predecessor and successor.
pub async fn normalize_block(
    provider: &dyn NetworkProvider,
    block: &provider::Block,
) -> Result<provider::Block, ApiError> {
    let previous_nonce = block.nonce.checked_sub(1);
    let next_nonce = block.nonce.checked_add(1);

    let (previous, next) = tokio::join!(
        fetch_neighbour(provider, previous_nonce),
        fetch_neighbour(provider, next_nonce),
    );

    Ok(simplify_block_with_scheduled_transactions(
        &previous?, block, &next?,
    ))
}

/// Builds the Rosetta block out of a raw block.
///
/// Regular blocks are normalized first; the genesis block carries the
/// synthetic genesis balances transaction instead.
pub async fn build_block(
    state: &AppState,
    block: &provider::Block,
) -> Result<types::Block, ApiError> {
    let provider = state.provider.as_ref();
    let network_config = state.network_config();
    let transformer = TransactionsTransformer::new(network_config, state.currency());

    let (transactions, parent_block_identifier) = if block.is_genesis() {
        let balances = provider
            .get_genesis_balances()
            .await
            .map_err(|err| ApiError::from_provider(ErrorCode::UnableToGetBlock, err))?;

        let mut transactions: Vec<types::Transaction> = transformer
            .genesis_transaction(&block.hash, &balances)
            .into_iter()
            .collect();
        transactions.extend(transformer.transform_block_transactions(block));

        let parent = BlockIdentifier {
            index: block.nonce,
            hash: block.hash.clone(),
        };
        (transactions, parent)
    } else {
        let normalized = normalize_block(provider, block).await?;
        let invalid = normalized
            .mini_blocks
            .iter()
            .filter(|miniblock| miniblock.is_invalid())
            .map(|miniblock| miniblock.transactions.len())
            .sum::<usize>();

        let transactions = transformer.transform_block_transactions(&normalized);
        let operations = transactions.iter().map(|tx| tx.operations.len()).sum();
        BlockMetrics::record(invalid, operations);

        let parent = BlockIdentifier {
            index: block.nonce - 1,
            hash: block.previous_block_hash.clone(),
        };
        (transactions, parent)
    };

    Ok(types::Block {
        block_identifier: BlockIdentifier {
            index: block.nonce,
            hash: block.hash.clone(),
        },
        parent_block_identifier,
        timestamp: provider.timestamp_for_round(block.round),
        transactions,
        metadata: block_metadata(block),
    })
}

fn block_metadata(block: &provider::Block) -> Option<types::Metadata> {
    match json!({
        "shard": block.shard,
        "epoch": block.epoch,
        "round": block.round,
    }) {
        Value::Object(map) => Some(map),
        _ => None,
    }
}
