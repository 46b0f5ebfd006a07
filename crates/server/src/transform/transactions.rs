// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::filters::apply_filters;
use super::operations::{credit, debit, index_operations, populate_status_of_operations};
use crate::consts::{
    OP_FEE, OP_FEE_OF_INVALID_TX, OP_FEE_REFUND, OP_GENESIS_BALANCE_MOVEMENT, OP_REWARD,
    OP_SC_RESULT, OP_TRANSFER,
};
use crate::provider::{Block, FullTransaction, GenesisBalance, NetworkConfig, TransactionKind};
use crate::types::{self, Currency, Operation, TransactionIdentifier};
use crate::utils::numeric::parse_amount;

/// Turns raw transactions into Rosetta transactions.
pub struct TransactionsTransformer<'a> {
    network_config: &'a NetworkConfig,
    currency: Currency,
}

impl<'a> TransactionsTransformer<'a> {
    pub fn new(network_config: &'a NetworkConfig, currency: Currency) -> Self {
        Self {
            network_config,
            currency,
        }
    }

    /// Transactions of an already normalized block, filtered and converted.
    ///
    /// Transactions without any balance change are left out.
    pub fn transform_block_transactions(&self, block: &Block) -> Vec<types::Transaction> {
        let txs: Vec<FullTransaction> = block.transactions().cloned().collect();

        apply_filters(&txs)
            .iter()
            .filter_map(|tx| self.transform_transaction(tx))
            .collect()
    }

    pub fn transform_transaction(&self, tx: &FullTransaction) -> Option<types::Transaction> {
        let operations = match tx.kind {
            TransactionKind::Normal => self.normal_transaction_operations(tx),
            TransactionKind::Reward => self.reward_transaction_operations(tx),
            TransactionKind::Unsigned => self.contract_result_operations(tx),
            TransactionKind::Invalid => self.invalid_transaction_operations(tx),
            TransactionKind::Other => {
                tracing::warn!(hash = %tx.hash, "Skipping transaction of unknown type");
                return None;
            }
        };

        Self::finalize(&tx.hash, operations)
    }

    /// The synthetic transaction minting the initial balances, identified by the
    /// genesis block hash.
    pub fn genesis_transaction(
        &self,
        block_hash: &str,
        balances: &[GenesisBalance],
    ) -> Option<types::Transaction> {
        let operations = balances
            .iter()
            .filter_map(|balance| {
                let amount = self.amount_or_zero(&balance.balance, block_hash);
                (amount > 0).then(|| {
                    credit(
                        OP_GENESIS_BALANCE_MOVEMENT,
                        &balance.address,
                        amount,
                        &self.currency,
                    )
                })
            })
            .collect();

        Self::finalize(block_hash, operations)
    }

    /// A pending move-balance transaction; only the transfer itself is shown.
    pub fn mempool_transaction(&self, tx: &FullTransaction) -> types::Transaction {
        let mut operations = Vec::new();
        let value = self.amount_or_zero(&tx.value, &tx.hash);
        if value > 0 {
            operations.push(debit(OP_TRANSFER, &tx.sender, value, &self.currency));
            operations.push(credit(OP_TRANSFER, &tx.receiver, value, &self.currency));
        }

        index_operations(&mut operations);
        populate_status_of_operations(&mut operations);

        types::Transaction {
            transaction_identifier: TransactionIdentifier::new(&tx.hash),
            operations,
            metadata: None,
        }
    }

    /// `(min gas limit + gas per data byte * data length) * gas price`
    pub fn move_balance_fee(&self, tx: &FullTransaction) -> u128 {
        let gas = self.network_config.min_gas_limit as u128
            + self.network_config.gas_per_data_byte as u128 * tx.data.len() as u128;
        gas * tx.gas_price as u128
    }

    fn normal_transaction_operations(&self, tx: &FullTransaction) -> Vec<Operation> {
        let mut operations = Vec::with_capacity(3);

        let value = self.amount_or_zero(&tx.value, &tx.hash);
        if value > 0 {
            operations.push(debit(OP_TRANSFER, &tx.sender, value, &self.currency));
            operations.push(credit(OP_TRANSFER, &tx.receiver, value, &self.currency));
        }

        let fee = self
            .initially_paid_fee(tx)
            .unwrap_or(tx.gas_price as u128 * tx.gas_limit as u128);
        operations.push(debit(OP_FEE, &tx.sender, fee, &self.currency));

        operations
    }

    fn reward_transaction_operations(&self, tx: &FullTransaction) -> Vec<Operation> {
        let value = self.amount_or_zero(&tx.value, &tx.hash);
        vec![credit(OP_REWARD, &tx.receiver, value, &self.currency)]
    }

    fn contract_result_operations(&self, tx: &FullTransaction) -> Vec<Operation> {
        let value = self.amount_or_zero(&tx.value, &tx.hash);

        if tx.is_refund {
            return vec![credit(OP_FEE_REFUND, &tx.receiver, value, &self.currency)];
        }

        vec![
            debit(OP_SC_RESULT, &tx.sender, value, &self.currency),
            credit(OP_SC_RESULT, &tx.receiver, value, &self.currency),
        ]
    }

    fn invalid_transaction_operations(&self, tx: &FullTransaction) -> Vec<Operation> {
        let fee = self
            .initially_paid_fee(tx)
            .unwrap_or_else(|| self.move_balance_fee(tx));
        vec![debit(OP_FEE_OF_INVALID_TX, &tx.sender, fee, &self.currency)]
    }

    fn initially_paid_fee(&self, tx: &FullTransaction) -> Option<u128> {
        let fee = tx.initially_paid_fee.as_deref()?;
        match parse_amount(fee) {
            Ok(fee) => Some(fee),
            Err(err) => {
                tracing::warn!(hash = %tx.hash, error = %err, "Ignoring malformed initially paid fee");
                None
            }
        }
    }

    fn amount_or_zero(&self, value: &str, hash: &str) -> u128 {
        parse_amount(value).unwrap_or_else(|err| {
            tracing::warn!(hash = %hash, error = %err, "Treating malformed amount as zero");
            0
        })
    }

    fn finalize(hash: &str, mut operations: Vec<Operation>) -> Option<types::Transaction> {
        if operations.is_empty() {
            return None;
        }

        index_operations(&mut operations);
        populate_status_of_operations(&mut operations);

        Some(types::Transaction {
            transaction_identifier: TransactionIdentifier::new(hash),
            operations,
            metadata: None,
        })
    }
}
