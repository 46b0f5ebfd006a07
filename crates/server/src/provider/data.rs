// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Raw chain data as returned by the observer HTTP API.
//!
//! Tags that the node reports as strings are modelled as closed enums with a
//! catch-all variant, so that unknown values never fail deserialization.

use serde::{Deserialize, Serialize};

// ================================================================================================
// Tags
// ================================================================================================

/// Kind of a transaction, as found in the `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Normal,
    /// Smart contract result, generated by the protocol
    Unsigned,
    Reward,
    Invalid,
    #[default]
    #[serde(other)]
    Other,
}

/// How a transaction was processed on its source or destination shard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TransactionProcessingType {
    MoveBalance,
    BuiltInFunctionCall,
    RelayedTx,
    RelayedTxV2,
    #[serde(rename = "SCDeployment")]
    ScDeployment,
    #[serde(rename = "SCInvoking")]
    ScInvoking,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MiniBlockType {
    TxBlock,
    StateBlock,
    PeerBlock,
    SmartContractResultBlock,
    InvalidBlock,
    ReceiptBlock,
    RewardsBlock,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MiniBlockProcessingType {
    Normal,
    Scheduled,
    Processed,
    #[default]
    #[serde(other)]
    Unset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ConstructionState {
    Final,
    Proposed,
    PartialExecuted,
    #[default]
    #[serde(other)]
    Unset,
}

// ================================================================================================
// Blocks and transactions
// ================================================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    #[serde(default)]
    pub nonce: u64,
    #[serde(default)]
    pub round: u64,
    #[serde(default)]
    pub epoch: u32,
    #[serde(default)]
    pub shard: u32,
    #[serde(default)]
    pub hash: String,
    #[serde(default, rename = "prevBlockHash")]
    pub previous_block_hash: String,
    /// Unix seconds, as reported by the node
    #[serde(default)]
    pub timestamp: u64,
    #[serde(default)]
    pub mini_blocks: Vec<MiniBlock>,
}

impl Block {
    /// Iterates over the transactions of all miniblocks, in order.
    pub fn transactions(&self) -> impl Iterator<Item = &FullTransaction> {
        self.mini_blocks
            .iter()
            .flat_map(|miniblock| miniblock.transactions.iter())
    }

    pub fn is_genesis(&self) -> bool {
        self.nonce == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiniBlock {
    #[serde(default)]
    pub hash: String,
    #[serde(default, rename = "type")]
    pub kind: MiniBlockType,
    #[serde(default)]
    pub processing_type: MiniBlockProcessingType,
    #[serde(default)]
    pub construction_state: ConstructionState,
    #[serde(default)]
    pub source_shard: u32,
    #[serde(default)]
    pub destination_shard: u32,
    #[serde(default)]
    pub transactions: Vec<FullTransaction>,
}

impl MiniBlock {
    pub fn is_invalid(&self) -> bool {
        self.kind == MiniBlockType::InvalidBlock
    }

    pub fn is_scheduled(&self) -> bool {
        self.processing_type == MiniBlockProcessingType::Scheduled
    }

    pub fn is_final(&self) -> bool {
        self.construction_state == ConstructionState::Final
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullTransaction {
    #[serde(default)]
    pub hash: String,
    #[serde(default, rename = "type")]
    pub kind: TransactionKind,
    #[serde(default)]
    pub processing_type_on_source: TransactionProcessingType,
    #[serde(default)]
    pub processing_type_on_destination: TransactionProcessingType,
    #[serde(default)]
    pub nonce: u64,
    #[serde(default)]
    pub round: u64,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub sender: String,
    #[serde(default)]
    pub receiver: String,
    #[serde(default)]
    pub gas_price: u64,
    #[serde(default)]
    pub gas_limit: u64,
    #[serde(default)]
    pub gas_used: u64,
    #[serde(default, with = "base64_bytes", skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<u8>,
    #[serde(default)]
    pub source_shard: u32,
    #[serde(default)]
    pub destination_shard: u32,
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub original_transaction_hash: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub previous_transaction_hash: String,
    #[serde(default)]
    pub is_refund: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initially_paid_fee: Option<String>,
}

impl FullTransaction {
    /// A transaction whose fee is paid by a relayer, as seen by both shards.
    pub fn is_relayed(&self) -> bool {
        matches!(
            self.processing_type_on_source,
            TransactionProcessingType::RelayedTx | TransactionProcessingType::RelayedTxV2
        ) && self.processing_type_on_source == self.processing_type_on_destination
    }
}

/// Transaction as sent to the node for broadcasting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub nonce: u64,
    pub value: String,
    pub receiver: String,
    pub sender: String,
    pub gas_price: u64,
    pub gas_limit: u64,
    #[serde(default, with = "base64_bytes", skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<u8>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub signature: String,
    #[serde(rename = "chainID")]
    pub chain_id: String,
    pub version: u32,
}

// ================================================================================================
// Network, accounts, genesis
// ================================================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkConfig {
    pub chain_id: String,
    pub min_gas_price: u64,
    pub min_gas_limit: u64,
    pub gas_per_data_byte: u64,
    /// Genesis time, unix seconds
    pub start_time: u64,
    /// Round duration, milliseconds
    pub round_duration: u64,
}

impl NetworkConfig {
    pub fn from_chain_config(chain: &config::ChainConfig) -> Self {
        Self {
            chain_id: chain.chain_id.clone(),
            min_gas_price: chain.min_gas_price,
            min_gas_limit: chain.min_gas_limit,
            gas_per_data_byte: chain.gas_per_data_byte,
            start_time: chain.genesis_time,
            round_duration: chain.round_duration_ms,
        }
    }

    /// Unix milliseconds at which `round` started.
    pub fn timestamp_for_round(&self, round: u64) -> u64 {
        self.start_time * 1000 + round * self.round_duration
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockSummary {
    pub nonce: u64,
    pub hash: String,
    pub previous_block_hash: String,
    /// Unix milliseconds
    pub timestamp: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub address: String,
    #[serde(default)]
    pub nonce: u64,
    #[serde(default)]
    pub balance: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockInfo {
    #[serde(default)]
    pub nonce: u64,
    #[serde(default)]
    pub hash: String,
    #[serde(default)]
    pub root_hash: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountModel {
    pub account: Account,
    pub block_info: BlockInfo,
}

/// One entry of the genesis balances file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenesisBalance {
    pub address: String,
    #[serde(default)]
    pub balance: String,
}

// ================================================================================================
// Serde helpers
// ================================================================================================

/// Byte payloads travel as base64 strings; `null` and `""` mean no data.
mod base64_bytes {
    use base64::{Engine, engine::general_purpose::STANDARD};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        // Some observers return the payload verbatim; keep it rather than failing the block.
        Ok(STANDARD
            .decode(encoded.as_bytes())
            .unwrap_or_else(|_| encoded.into_bytes()))
    }
}
