// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filters over the flattened transaction list of a block.
//!
//! Each filter is pure: it borrows the list and returns the kept transactions
//! in their original order.

use crate::provider::{FullTransaction, TransactionKind};
use crate::utils::numeric::is_zero_or_negative;
use std::collections::HashSet;

/// Runs every filter, in order.
pub fn apply_filters(txs: &[FullTransaction]) -> Vec<FullTransaction> {
    let txs = filter_out_contract_results_of_invalid_transactions(txs);
    let txs = filter_out_relayed_transactions_held_in_invalid_miniblock(&txs);
    filter_out_contract_results_with_no_value(&txs)
}

fn invalid_hashes(txs: &[FullTransaction]) -> HashSet<&str> {
    txs.iter()
        .filter(|tx| tx.kind == TransactionKind::Invalid)
        .map(|tx| tx.hash.as_str())
        .collect()
}

/// Drops contract results whose original transaction is invalid in the same list.
pub fn filter_out_contract_results_of_invalid_transactions(
    txs: &[FullTransaction],
) -> Vec<FullTransaction> {
    let invalid = invalid_hashes(txs);

    txs.iter()
        .filter(|tx| {
            !(tx.kind == TransactionKind::Unsigned
                && invalid.contains(tx.original_transaction_hash.as_str()))
        })
        .cloned()
        .collect()
}

/// Drops relayed transactions that are also present as invalid transactions.
///
/// Such a transaction is reported twice by the node; only its invalid
/// counterpart carries the fee effect.
pub fn filter_out_relayed_transactions_held_in_invalid_miniblock(
    txs: &[FullTransaction],
) -> Vec<FullTransaction> {
    let invalid = invalid_hashes(txs);

    txs.iter()
        .filter(|tx| {
            !(tx.kind == TransactionKind::Normal
                && tx.is_relayed()
                && invalid.contains(tx.hash.as_str()))
        })
        .cloned()
        .collect()
}

pub fn filter_out_contract_results_with_no_value(txs: &[FullTransaction]) -> Vec<FullTransaction> {
    txs.iter()
        .filter(|tx| !(tx.kind == TransactionKind::Unsigned && is_zero_or_negative(&tx.value)))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::TransactionProcessingType;

    fn tx(hash: &str, kind: TransactionKind) -> FullTransaction {
        FullTransaction {
            hash: hash.to_string(),
            kind,
            value: "1".to_string(),
            ..Default::default()
        }
    }

    fn contract_result(hash: &str, original: &str, value: &str) -> FullTransaction {
        FullTransaction {
            original_transaction_hash: original.to_string(),
            value: value.to_string(),
            ..tx(hash, TransactionKind::Unsigned)
        }
    }

    fn relayed(hash: &str) -> FullTransaction {
        FullTransaction {
            processing_type_on_source: TransactionProcessingType::RelayedTx,
            processing_type_on_destination: TransactionProcessingType::RelayedTx,
            ..tx(hash, TransactionKind::Normal)
        }
    }

    fn hashes(txs: &[FullTransaction]) -> Vec<&str> {
        txs.iter().map(|tx| tx.hash.as_str()).collect()
    }

    #[test]
    fn test_filter_out_contract_results_of_invalid_transactions() {
        let txs = vec![
            tx("aaaa", TransactionKind::Normal),
            tx("bbbb", TransactionKind::Invalid),
            contract_result("cccc", "aaaa", "1"),
            contract_result("dddd", "bbbb", "1"),
        ];

        let filtered = filter_out_contract_results_of_invalid_transactions(&txs);
        assert_eq!(hashes(&filtered), vec!["aaaa", "bbbb", "cccc"]);
    }

    #[test]
    fn test_filter_out_relayed_transactions_held_in_invalid_miniblock() {
        let mut relayed_only_on_source = relayed("cccc");
        relayed_only_on_source.processing_type_on_destination =
            TransactionProcessingType::ScInvoking;

        let txs = vec![
            relayed("aaaa"),
            tx("aaaa", TransactionKind::Invalid),
            relayed("bbbb"),
            relayed_only_on_source,
            tx("cccc", TransactionKind::Invalid),
        ];

        let filtered = filter_out_relayed_transactions_held_in_invalid_miniblock(&txs);
        assert_eq!(hashes(&filtered), vec!["aaaa", "bbbb", "cccc", "cccc"]);
        assert_eq!(filtered[0].kind, TransactionKind::Invalid);
    }

    #[test]
    fn test_filter_out_contract_results_with_no_value() {
        let txs = vec![
            contract_result("aaaa", "", "0"),
            contract_result("bbbb", "", ""),
            contract_result("cccc", "", "-5"),
            contract_result("dddd", "", "7"),
            FullTransaction {
                value: "0".to_string(),
                ..tx("eeee", TransactionKind::Normal)
            },
            contract_result("ffff", "", "00"),
        ];

        let filtered = filter_out_contract_results_with_no_value(&txs);
        assert_eq!(hashes(&filtered), vec!["dddd", "eeee", "ffff"]);
    }

    #[test]
    fn test_apply_filters_is_idempotent() {
        let txs = vec![
            relayed("aaaa"),
            tx("aaaa", TransactionKind::Invalid),
            contract_result("bbbb", "aaaa", "10"),
            contract_result("cccc", "ffff", "0"),
            contract_result("dddd", "ffff", "10"),
            tx("eeee", TransactionKind::Reward),
        ];

        let once = apply_filters(&txs);
        assert_eq!(hashes(&once), vec!["aaaa", "dddd", "eeee"]);
        assert_eq!(apply_filters(&once), once);
    }
}
