// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Access to the raw chain data of the observed node.
//!
//! [`NetworkProvider`] is the only seam between the gateway and the node: the
//! handlers never talk HTTP to the observer themselves. [`ProxyClient`] is the
//! production implementation and [`NetworkProviderMock`] the in-memory one
//! used by the tests.

pub mod data;
mod mock;
mod proxy;
pub mod scheduled;

pub use data::{
    Account, AccountModel, Block, BlockInfo, BlockSummary, ConstructionState, FullTransaction,
    GenesisBalance, MiniBlock, MiniBlockProcessingType, MiniBlockType, NetworkConfig,
    Transaction, TransactionKind, TransactionProcessingType,
};
pub use mock::{
    MOCK_ADDRESS_HRP, MOCK_CHAIN_ID, MOCK_EMPTY_HASH, MOCK_GENESIS_TIMESTAMP, NetworkProviderMock,
};
pub use proxy::ProxyClient;
pub use scheduled::{gather_invalid_transactions, simplify_block_with_scheduled_transactions};

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Request to observer failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Observer returned an error: {0}")]
    Observer(String),

    #[error("Unexpected observer response: {0}")]
    Decode(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("Invalid hash '{0}': expected a hex string")]
    InvalidHash(String),

    #[error("Failed to read genesis balances from '{path}': {reason}")]
    GenesisBalances { path: String, reason: String },

    #[error("Observer is not reachable in offline mode")]
    Offline,
}

/// Raw data source of the gateway.
///
/// Every call is an independent read; nothing is cached between requests.
#[async_trait]
pub trait NetworkProvider: Send + Sync {
    /// Whether the gateway runs without an observer.
    fn is_offline(&self) -> bool;

    fn observer_url(&self) -> &str;

    /// Network configuration captured when the provider was created.
    fn network_config(&self) -> &NetworkConfig;

    async fn get_network_config(&self) -> Result<NetworkConfig, ProviderError>;

    async fn get_latest_block_summary(&self) -> Result<BlockSummary, ProviderError>;

    async fn get_genesis_block_summary(&self) -> Result<BlockSummary, ProviderError>;

    async fn get_genesis_balances(&self) -> Result<Vec<GenesisBalance>, ProviderError>;

    async fn get_block_by_nonce(&self, nonce: u64) -> Result<Block, ProviderError>;

    async fn get_block_by_hash(&self, hash: &str) -> Result<Block, ProviderError>;

    async fn get_account(&self, address: &str) -> Result<AccountModel, ProviderError>;

    /// `Ok(None)` when the transaction is unknown to the pool.
    async fn get_mempool_transaction_by_hash(
        &self,
        hash: &str,
    ) -> Result<Option<FullTransaction>, ProviderError>;

    async fn compute_transaction_hash(&self, tx: &Transaction) -> Result<String, ProviderError>;

    async fn send_transaction(&self, tx: &Transaction) -> Result<String, ProviderError>;

    fn decode_address(&self, address: &str) -> Result<Vec<u8>, ProviderError>;

    fn encode_address(&self, pubkey: &[u8]) -> Result<String, ProviderError>;

    /// Unix milliseconds at which `round` started.
    fn timestamp_for_round(&self, round: u64) -> u64 {
        self.network_config().timestamp_for_round(round)
    }
}
