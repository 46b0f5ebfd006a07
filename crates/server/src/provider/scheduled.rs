// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Normalization of blocks produced under scheduled execution.
//!
//! A miniblock marked `Scheduled` is proposed in block N but executed in
//! block N+1. Its transactions can therefore show up twice: once in the
//! scheduled miniblock of the proposing block and once more (for instance as
//! invalid) in the executing block. Looking at the predecessor and successor
//! of a block is enough to decide which block a transaction really belongs to.

use super::{Block, FullTransaction, MiniBlock, MiniBlockType, TransactionKind};
use std::collections::HashSet;

/// Returns `block` with unfinalized scheduled miniblocks removed and its invalid
/// miniblocks replaced by a single miniblock holding only the invalid
/// transactions attributable to `block`.
///
/// Every transaction hash appears at most once in the result. A hash listed as
/// invalid is only kept in the invalid miniblock; other repeats keep their
/// first appearance. Miniblocks left without transactions are dropped.
///
/// `previous` and `next` are the neighbours of `block`; pass `Block::default()`
/// when one of them does not exist.
pub fn simplify_block_with_scheduled_transactions(
    previous: &Block,
    block: &Block,
    next: &Block,
) -> Block {
    let invalid = gather_invalid_transactions(previous, block, next);

    // A hash is reported once: invalid entries win, then first appearance.
    let mut mini_blocks: Vec<MiniBlock> = {
        let mut seen: HashSet<&str> = invalid.iter().map(|tx| tx.hash.as_str()).collect();
        block
            .mini_blocks
            .iter()
            .filter(|miniblock| !miniblock.is_invalid())
            .filter(|miniblock| !miniblock.is_scheduled() || miniblock.is_final())
            .filter_map(|miniblock| {
                let transactions: Vec<FullTransaction> = miniblock
                    .transactions
                    .iter()
                    .filter(|tx| seen.insert(tx.hash.as_str()))
                    .cloned()
                    .collect();
                if transactions.is_empty() && !miniblock.transactions.is_empty() {
                    return None;
                }
                Some(MiniBlock {
                    transactions,
                    ..miniblock.clone()
                })
            })
            .collect()
    };

    if !invalid.is_empty() {
        mini_blocks.push(MiniBlock {
            kind: MiniBlockType::InvalidBlock,
            source_shard: block.shard,
            destination_shard: block.shard,
            transactions: invalid,
            ..Default::default()
        });
    }

    Block {
        mini_blocks,
        ..block.clone()
    }
}

/// Invalid transactions of `block` that were neither scheduled by `previous`
/// nor will be scheduled by `next`.
///
/// Order of first appearance is kept and duplicates are collapsed.
pub fn gather_invalid_transactions(
    previous: &Block,
    block: &Block,
    next: &Block,
) -> Vec<FullTransaction> {
    let scheduled_previous = scheduled_hashes(previous);
    let scheduled_next = scheduled_hashes(next);

    let mut seen = HashSet::new();
    block
        .mini_blocks
        .iter()
        .filter(|miniblock| miniblock.is_invalid())
        .flat_map(|miniblock| miniblock.transactions.iter())
        .filter(|tx| {
            !scheduled_previous.contains(tx.hash.as_str())
                && !scheduled_next.contains(tx.hash.as_str())
        })
        .filter(|tx| seen.insert(tx.hash.as_str()))
        .map(|tx| FullTransaction {
            kind: TransactionKind::Invalid,
            ..tx.clone()
        })
        .collect()
}

fn scheduled_hashes(block: &Block) -> HashSet<&str> {
    block
        .mini_blocks
        .iter()
        .filter(|miniblock| miniblock.is_scheduled())
        .flat_map(|miniblock| miniblock.transactions.iter())
        .map(|tx| tx.hash.as_str())
        .collect()
}
