// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{
    AccountModel, Block, BlockSummary, FullTransaction, GenesisBalance, NetworkConfig,
    NetworkProvider, ProviderError, Transaction,
};
use crate::utils::address;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

pub const MOCK_CHAIN_ID: &str = "test";
pub const MOCK_ADDRESS_HRP: &str = "erd";
pub const MOCK_GENESIS_TIMESTAMP: u64 = 1596117600;
pub const MOCK_EMPTY_HASH: &str =
    "0000000000000000000000000000000000000000000000000000000000000000";

/// In-memory [`NetworkProvider`] for tests.
///
/// Blocks, accounts and pool transactions are registered through the public
/// fields. `next_error` makes the next fallible call fail once.
pub struct NetworkProviderMock {
    pub offline: bool,
    pub observer_url: String,
    pub network_config: NetworkConfig,
    pub blocks_by_nonce: HashMap<u64, Block>,
    pub blocks_by_hash: HashMap<String, Block>,
    pub latest_block_summary: BlockSummary,
    pub genesis_block_summary: BlockSummary,
    pub genesis_balances: Vec<GenesisBalance>,
    pub accounts: HashMap<String, AccountModel>,
    pub mempool: HashMap<String, FullTransaction>,
    pub computed_transaction_hash: String,
    pub sent_transactions: Mutex<Vec<Transaction>>,
    pub next_error: Mutex<Option<ProviderError>>,
}

impl Default for NetworkProviderMock {
    fn default() -> Self {
        Self {
            offline: false,
            observer_url: "http://observer.test".to_string(),
            network_config: NetworkConfig {
                chain_id: MOCK_CHAIN_ID.to_string(),
                min_gas_price: 1_000_000_000,
                min_gas_limit: 50_000,
                gas_per_data_byte: 1_500,
                start_time: MOCK_GENESIS_TIMESTAMP,
                round_duration: 6_000,
            },
            blocks_by_nonce: HashMap::new(),
            blocks_by_hash: HashMap::new(),
            latest_block_summary: BlockSummary::default(),
            genesis_block_summary: BlockSummary {
                nonce: 0,
                hash: MOCK_EMPTY_HASH.to_string(),
                previous_block_hash: MOCK_EMPTY_HASH.to_string(),
                timestamp: MOCK_GENESIS_TIMESTAMP * 1000,
            },
            genesis_balances: Vec::new(),
            accounts: HashMap::new(),
            mempool: HashMap::new(),
            computed_transaction_hash: "aaaa".to_string(),
            sent_transactions: Mutex::new(Vec::new()),
            next_error: Mutex::new(None),
        }
    }
}

impl NetworkProviderMock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a block under both its nonce and its hash.
    pub fn add_block(&mut self, block: Block) {
        self.blocks_by_hash.insert(block.hash.clone(), block.clone());
        self.blocks_by_nonce.insert(block.nonce, block);
    }

    pub fn add_account(&mut self, address: &str, nonce: u64, balance: &str) {
        self.accounts.insert(
            address.to_string(),
            AccountModel {
                account: super::Account {
                    address: address.to_string(),
                    nonce,
                    balance: balance.to_string(),
                },
                block_info: super::BlockInfo {
                    nonce: self.latest_block_summary.nonce,
                    hash: self.latest_block_summary.hash.clone(),
                    root_hash: MOCK_EMPTY_HASH.to_string(),
                },
            },
        );
    }

    pub fn fail_next(&self, error: ProviderError) {
        if let Ok(mut next) = self.next_error.lock() {
            *next = Some(error);
        }
    }

    fn check(&self) -> Result<(), ProviderError> {
        if self.offline {
            return Err(ProviderError::Offline);
        }
        match self.next_error.lock() {
            Ok(mut next) => next.take().map_or(Ok(()), Err),
            Err(_) => Ok(()),
        }
    }
}

#[async_trait]
impl NetworkProvider for NetworkProviderMock {
    fn is_offline(&self) -> bool {
        self.offline
    }

    fn observer_url(&self) -> &str {
        &self.observer_url
    }

    fn network_config(&self) -> &NetworkConfig {
        &self.network_config
    }

    async fn get_network_config(&self) -> Result<NetworkConfig, ProviderError> {
        self.check()?;
        Ok(self.network_config.clone())
    }

    async fn get_latest_block_summary(&self) -> Result<BlockSummary, ProviderError> {
        self.check()?;
        Ok(self.latest_block_summary.clone())
    }

    async fn get_genesis_block_summary(&self) -> Result<BlockSummary, ProviderError> {
        self.check()?;
        Ok(self.genesis_block_summary.clone())
    }

    async fn get_genesis_balances(&self) -> Result<Vec<GenesisBalance>, ProviderError> {
        self.check()?;
        Ok(self.genesis_balances.clone())
    }

    async fn get_block_by_nonce(&self, nonce: u64) -> Result<Block, ProviderError> {
        self.check()?;
        self.blocks_by_nonce
            .get(&nonce)
            .cloned()
            .ok_or_else(|| ProviderError::NotFound(format!("block with nonce {}", nonce)))
    }

    async fn get_block_by_hash(&self, hash: &str) -> Result<Block, ProviderError> {
        self.check()?;
        self.blocks_by_hash
            .get(hash)
            .cloned()
            .ok_or_else(|| ProviderError::NotFound(format!("block with hash {}", hash)))
    }

    async fn get_account(&self, address: &str) -> Result<AccountModel, ProviderError> {
        self.check()?;
        self.accounts
            .get(address)
            .cloned()
            .ok_or_else(|| ProviderError::NotFound(format!("account {}", address)))
    }

    async fn get_mempool_transaction_by_hash(
        &self,
        hash: &str,
    ) -> Result<Option<FullTransaction>, ProviderError> {
        self.check()?;
        Ok(self.mempool.get(hash).cloned())
    }

    async fn compute_transaction_hash(&self, _tx: &Transaction) -> Result<String, ProviderError> {
        self.check()?;
        Ok(self.computed_transaction_hash.clone())
    }

    async fn send_transaction(&self, tx: &Transaction) -> Result<String, ProviderError> {
        self.check()?;
        if let Ok(mut sent) = self.sent_transactions.lock() {
            sent.push(tx.clone());
        }
        Ok(self.computed_transaction_hash.clone())
    }

    fn decode_address(&self, address: &str) -> Result<Vec<u8>, ProviderError> {
        address::decode_address(MOCK_ADDRESS_HRP, address).map_err(|e| {
            ProviderError::InvalidAddress {
                address: address.to_string(),
                reason: e.to_string(),
            }
        })
    }

    fn encode_address(&self, pubkey: &[u8]) -> Result<String, ProviderError> {
        address::encode_address(MOCK_ADDRESS_HRP, pubkey).map_err(|e| {
            ProviderError::InvalidAddress {
                address: hex::encode(pubkey),
                reason: e.to_string(),
            }
        })
    }
}
