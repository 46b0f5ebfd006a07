// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{
    AccountModel, Block, BlockSummary, FullTransaction, GenesisBalance, NetworkConfig,
    NetworkProvider, ProviderError, Transaction,
};
use crate::utils::address;
use async_trait::async_trait;
use config::{ChainConfig, ObserverConfig};
use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

const CODE_SUCCESSFUL: &str = "successful";
const STATUS_PENDING: &str = "pending";

/// Envelope of every observer response.
#[derive(Debug, Deserialize)]
struct ObserverResponse<T> {
    data: Option<T>,
    #[serde(default)]
    error: String,
    #[serde(default)]
    code: String,
}

#[derive(Debug, Deserialize)]
struct NetworkConfigData {
    config: RawNetworkConfig,
}

#[derive(Debug, Deserialize)]
struct RawNetworkConfig {
    erd_chain_id: String,
    erd_min_gas_price: u64,
    erd_min_gas_limit: u64,
    erd_gas_per_data_byte: u64,
    erd_start_time: u64,
    erd_round_duration: u64,
}

#[derive(Debug, Deserialize)]
struct NetworkStatusData {
    status: RawNetworkStatus,
}

#[derive(Debug, Deserialize)]
struct RawNetworkStatus {
    erd_highest_final_nonce: u64,
}

#[derive(Debug, Deserialize)]
struct BlockData {
    block: Block,
}

#[derive(Debug, Deserialize)]
struct TransactionData {
    transaction: FullTransaction,
}

#[derive(Debug, Deserialize)]
struct SimulationData {
    result: SimulationResult,
}

#[derive(Debug, Deserialize)]
struct SimulationResult {
    hash: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SendData {
    tx_hash: String,
}

/// HTTP client of the observer (or proxy) REST API.
pub struct ProxyClient {
    http: reqwest::Client,
    base_url: String,
    shard: u32,
    offline: bool,
    address_hrp: String,
    genesis_balances_file: Option<String>,
    network_config: NetworkConfig,
}

impl ProxyClient {
    /// Creates the client; the network configuration is taken from `chain`.
    pub fn new(observer: &ObserverConfig, chain: &ChainConfig) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(observer.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: observer.url.trim_end_matches('/').to_string(),
            shard: observer.shard,
            offline: observer.offline,
            address_hrp: chain.address_hrp.clone(),
            genesis_balances_file: observer.genesis_balances_file.clone(),
            network_config: NetworkConfig::from_chain_config(chain),
        })
    }

    /// Creates the client and, unless offline, replaces the configured network
    /// parameters with the ones reported by the observer.
    pub async fn connect(
        observer: &ObserverConfig,
        chain: &ChainConfig,
    ) -> Result<Self, ProviderError> {
        let mut client = Self::new(observer, chain)?;
        if !client.offline {
            client.network_config = client.get_network_config().await?;
            tracing::info!(
                chain_id = %client.network_config.chain_id,
                min_gas_price = client.network_config.min_gas_price,
                min_gas_limit = client.network_config.min_gas_limit,
                "Fetched network config from observer"
            );
        }
        Ok(client)
    }

    fn ensure_online(&self) -> Result<(), ProviderError> {
        if self.offline {
            return Err(ProviderError::Offline);
        }
        Ok(())
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ProviderError> {
        self.ensure_online()?;
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(url = %url, "GET observer");

        let response = self.http.get(&url).send().await?;
        Self::decode(response, path).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ProviderError>
    where
        B: serde::Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.ensure_online()?;
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(url = %url, "POST observer");

        let response = self.http.post(&url).json(body).send().await?;
        Self::decode(response, path).await
    }

    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
        path: &str,
    ) -> Result<T, ProviderError> {
        let status = response.status();
        let bytes = response.bytes().await?;

        if status == StatusCode::NOT_FOUND {
            let error = serde_json::from_slice::<ObserverResponse<serde_json::Value>>(&bytes)
                .map(|body| body.error)
                .unwrap_or_default();
            return Err(ProviderError::NotFound(format!("{}: {}", path, error)));
        }

        let body: ObserverResponse<T> = serde_json::from_slice(&bytes)
            .map_err(|e| ProviderError::Decode(format!("{}: {}", path, e)))?;

        if body.code != CODE_SUCCESSFUL || !status.is_success() {
            return Err(ProviderError::Observer(format!(
                "{}: {} ({})",
                path, body.error, body.code
            )));
        }

        body.data
            .ok_or_else(|| ProviderError::Decode(format!("{}: missing data", path)))
    }

    /// Hashes end up in the URL path, so anything but hex is refused.
    fn check_hash(hash: &str) -> Result<(), ProviderError> {
        if hash.is_empty() || hex::decode(hash).is_err() {
            return Err(ProviderError::InvalidHash(hash.to_string()));
        }
        Ok(())
    }

    async fn get_block(&self, path: String) -> Result<Block, ProviderError> {
        let data: BlockData = self.get(&path).await?;
        Ok(data.block)
    }

    fn summarize(&self, block: &Block) -> BlockSummary {
        BlockSummary {
            nonce: block.nonce,
            hash: block.hash.clone(),
            previous_block_hash: block.previous_block_hash.clone(),
            timestamp: self.timestamp_for_round(block.round),
        }
    }
}

#[async_trait]
impl NetworkProvider for ProxyClient {
    fn is_offline(&self) -> bool {
        self.offline
    }

    fn observer_url(&self) -> &str {
        &self.base_url
    }

    fn network_config(&self) -> &NetworkConfig {
        &self.network_config
    }

    async fn get_network_config(&self) -> Result<NetworkConfig, ProviderError> {
        let data: NetworkConfigData = self.get("/network/config").await?;
        let raw = data.config;

        Ok(NetworkConfig {
            chain_id: raw.erd_chain_id,
            min_gas_price: raw.erd_min_gas_price,
            min_gas_limit: raw.erd_min_gas_limit,
            gas_per_data_byte: raw.erd_gas_per_data_byte,
            start_time: raw.erd_start_time,
            round_duration: raw.erd_round_duration,
        })
    }

    async fn get_latest_block_summary(&self) -> Result<BlockSummary, ProviderError> {
        let data: NetworkStatusData = self
            .get(&format!("/network/status/{}", self.shard))
            .await?;
        // The block after the reported one must exist for scheduled results to be reconciled.
        let nonce = data.status.erd_highest_final_nonce.saturating_sub(1);

        let block = self
            .get_block(format!("/block/{}/by-nonce/{}?withTxs=false", self.shard, nonce))
            .await?;
        Ok(self.summarize(&block))
    }

    async fn get_genesis_block_summary(&self) -> Result<BlockSummary, ProviderError> {
        let block = self
            .get_block(format!("/block/{}/by-nonce/0?withTxs=false", self.shard))
            .await?;
        Ok(self.summarize(&block))
    }

    async fn get_genesis_balances(&self) -> Result<Vec<GenesisBalance>, ProviderError> {
        let Some(path) = &self.genesis_balances_file else {
            return Ok(Vec::new());
        };

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ProviderError::GenesisBalances {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        serde_json::from_str(&content).map_err(|e| ProviderError::GenesisBalances {
            path: path.clone(),
            reason: e.to_string(),
        })
    }

    async fn get_block_by_nonce(&self, nonce: u64) -> Result<Block, ProviderError> {
        self.get_block(format!("/block/{}/by-nonce/{}?withTxs=true", self.shard, nonce))
            .await
    }

    async fn get_block_by_hash(&self, hash: &str) -> Result<Block, ProviderError> {
        Self::check_hash(hash)?;
        self.get_block(format!("/block/{}/by-hash/{}?withTxs=true", self.shard, hash))
            .await
    }

    async fn get_account(&self, address: &str) -> Result<AccountModel, ProviderError> {
        self.get(&format!("/address/{}", address)).await
    }

    async fn get_mempool_transaction_by_hash(
        &self,
        hash: &str,
    ) -> Result<Option<FullTransaction>, ProviderError> {
        Self::check_hash(hash)?;
        let result: Result<TransactionData, _> = self.get(&format!("/transaction/{}", hash)).await;

        match result {
            Ok(data) if data.transaction.status == STATUS_PENDING => Ok(Some(data.transaction)),
            Ok(_) | Err(ProviderError::NotFound(_)) => Ok(None),
            Err(err) => Err(err),
        }
    }

    async fn compute_transaction_hash(&self, tx: &Transaction) -> Result<String, ProviderError> {
        let data: SimulationData = self.post("/transaction/simulate", tx).await?;
        Ok(data.result.hash)
    }

    async fn send_transaction(&self, tx: &Transaction) -> Result<String, ProviderError> {
        let data: SendData = self.post("/transaction/send", tx).await?;
        Ok(data.tx_hash)
    }

    fn decode_address(&self, address: &str) -> Result<Vec<u8>, ProviderError> {
        address::decode_address(&self.address_hrp, address).map_err(|e| {
            ProviderError::InvalidAddress {
                address: address.to_string(),
                reason: e.to_string(),
            }
        })
    }

    fn encode_address(&self, pubkey: &[u8]) -> Result<String, ProviderError> {
        address::encode_address(&self.address_hrp, pubkey).map_err(|e| {
            ProviderError::InvalidAddress {
                address: hex::encode(pubkey),
                reason: e.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::io::Write;

    fn observer_config(url: String) -> ObserverConfig {
        ObserverConfig {
            url,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_connect_fetches_network_config() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/network/config");
                then.status(200).json_body(json!({
                    "data": { "config": {
                        "erd_chain_id": "T",
                        "erd_min_gas_price": 1000000000u64,
                        "erd_min_gas_limit": 50000,
                        "erd_gas_per_data_byte": 1500,
                        "erd_start_time": 1647270000,
                        "erd_round_duration": 6000,
                        "erd_num_shards_without_meta": 3
                    }},
                    "error": "",
                    "code": "successful"
                }));
            })
            .await;

        let client = ProxyClient::connect(&observer_config(server.base_url()), &ChainConfig::default())
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(client.network_config().chain_id, "T");
        assert_eq!(client.network_config().gas_per_data_byte, 1500);
        assert_eq!(client.timestamp_for_round(1), 1647270006000);
    }

    #[tokio::test]
    async fn test_get_block_by_nonce() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/block/0/by-nonce/42")
                    .query_param("withTxs", "true");
                then.status(200).json_body(json!({
                    "data": { "block": {
                        "nonce": 42,
                        "round": 43,
                        "hash": "cafe",
                        "prevBlockHash": "babe",
                        "miniBlocks": [{
                            "type": "InvalidBlock",
                            "transactions": [{ "hash": "aa", "type": "invalid" }]
                        }]
                    }},
                    "error": "",
                    "code": "successful"
                }));
            })
            .await;

        let client =
            ProxyClient::new(&observer_config(server.base_url()), &ChainConfig::default()).unwrap();
        let block = client.get_block_by_nonce(42).await.unwrap();

        assert_eq!(block.hash, "cafe");
        assert_eq!(block.previous_block_hash, "babe");
        assert!(block.mini_blocks[0].is_invalid());
    }

    #[tokio::test]
    async fn test_latest_block_is_one_behind_highest_final() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/network/status/0");
                then.status(200).json_body(json!({
                    "data": { "status": { "erd_highest_final_nonce": 100 } },
                    "error": "",
                    "code": "successful"
                }));
            })
            .await;
        let block_mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/block/0/by-nonce/99")
                    .query_param("withTxs", "false");
                then.status(200).json_body(json!({
                    "data": { "block": {
                        "nonce": 99,
                        "round": 101,
                        "hash": "beef",
                        "prevBlockHash": "dead"
                    }},
                    "error": "",
                    "code": "successful"
                }));
            })
            .await;

        let client =
            ProxyClient::new(&observer_config(server.base_url()), &ChainConfig::default()).unwrap();
        let summary = client.get_latest_block_summary().await.unwrap();

        block_mock.assert_async().await;
        assert_eq!(summary.nonce, 99);
        assert_eq!(summary.hash, "beef");
        assert_eq!(summary.previous_block_hash, "dead");
    }

    #[tokio::test]
    async fn test_observer_error_is_surfaced() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/block/0/by-nonce/7");
                then.status(500).json_body(json!({
                    "data": null,
                    "error": "sending request error",
                    "code": "internal_issue"
                }));
            })
            .await;

        let client =
            ProxyClient::new(&observer_config(server.base_url()), &ChainConfig::default()).unwrap();
        let err = client.get_block_by_nonce(7).await.unwrap_err();

        assert!(matches!(err, ProviderError::Observer(msg) if msg.contains("sending request error")));
    }

    #[tokio::test]
    async fn test_mempool_transaction_only_when_pending() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/transaction/aaaa");
                then.status(200).json_body(json!({
                    "data": { "transaction": { "hash": "aaaa", "type": "normal", "status": "pending" }},
                    "error": "",
                    "code": "successful"
                }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/transaction/bbbb");
                then.status(200).json_body(json!({
                    "data": { "transaction": { "hash": "bbbb", "type": "normal", "status": "success" }},
                    "error": "",
                    "code": "successful"
                }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/transaction/cccc");
                then.status(404).json_body(json!({
                    "data": null,
                    "error": "transaction not found",
                    "code": "bad_request"
                }));
            })
            .await;

        let client =
            ProxyClient::new(&observer_config(server.base_url()), &ChainConfig::default()).unwrap();

        let pending = client.get_mempool_transaction_by_hash("aaaa").await.unwrap();
        assert_eq!(pending.unwrap().hash, "aaaa");
        assert!(client.get_mempool_transaction_by_hash("bbbb").await.unwrap().is_none());
        assert!(client.get_mempool_transaction_by_hash("cccc").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_non_hex_hash_is_not_sent_to_observer() {
        let server = MockServer::start_async().await;
        let any_request = server
            .mock_async(|_when, then| {
                then.status(200).json_body(json!({
                    "data": { "config": {} },
                    "error": "",
                    "code": "successful"
                }));
            })
            .await;

        let client =
            ProxyClient::new(&observer_config(server.base_url()), &ChainConfig::default()).unwrap();

        for hash in ["x/../../network/config", "", "zz", "abc?withTxs=false"] {
            let err = client.get_mempool_transaction_by_hash(hash).await.unwrap_err();
            assert!(matches!(err, ProviderError::InvalidHash(_)), "{}", hash);

            let err = client.get_block_by_hash(hash).await.unwrap_err();
            assert!(matches!(err, ProviderError::InvalidHash(_)), "{}", hash);
        }

        any_request.assert_hits_async(0).await;
    }

    #[tokio::test]
    async fn test_send_transaction() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/transaction/send")
                    .json_body_partial(r#"{"chainID": "T", "nonce": 5}"#);
                then.status(200).json_body(json!({
                    "data": { "txHash": "f00d" },
                    "error": "",
                    "code": "successful"
                }));
            })
            .await;

        let client =
            ProxyClient::new(&observer_config(server.base_url()), &ChainConfig::default()).unwrap();
        let tx = Transaction {
            nonce: 5,
            chain_id: "T".to_string(),
            version: 1,
            ..Default::default()
        };

        assert_eq!(client.send_transaction(&tx).await.unwrap(), "f00d");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_offline_client_never_calls_observer() {
        let observer = ObserverConfig {
            offline: true,
            ..Default::default()
        };
        let chain = ChainConfig {
            chain_id: "local".to_string(),
            ..Default::default()
        };

        let client = ProxyClient::connect(&observer, &chain).await.unwrap();
        assert!(client.is_offline());
        assert_eq!(client.network_config().chain_id, "local");
        assert!(matches!(
            client.get_block_by_nonce(1).await,
            Err(ProviderError::Offline)
        ));
    }

    #[tokio::test]
    async fn test_genesis_balances_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"address": "erd1a", "supply": "5", "balance": "3", "stakingvalue": "2"}}]"#
        )
        .unwrap();

        let observer = ObserverConfig {
            genesis_balances_file: Some(file.path().to_string_lossy().to_string()),
            ..Default::default()
        };
        let client = ProxyClient::new(&observer, &ChainConfig::default()).unwrap();

        let balances = client.get_genesis_balances().await.unwrap();
        assert_eq!(balances.len(), 1);
        assert_eq!(balances[0].address, "erd1a");
        assert_eq!(balances[0].balance, "3");
    }
}
