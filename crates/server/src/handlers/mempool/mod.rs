// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

mod get_mempool;
mod get_mempool_transaction;

pub use get_mempool::mempool;
pub use get_mempool_transaction::mempool_transaction;
