// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

mod get_block;
mod get_block_transaction;

pub use get_block::block;
pub use get_block_transaction::block_transaction;
