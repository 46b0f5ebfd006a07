// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Conversion of raw chain transactions into Rosetta transactions.
//!
//! A normalized block goes through the [`filters`] first, then every surviving
//! transaction is turned into balance-changing operations by
//! [`TransactionsTransformer`].

pub mod filters;
pub mod operations;
pub mod transactions;

pub use filters::apply_filters;
pub use operations::{TransferIntent, TransferIntentError};
pub use transactions::TransactionsTransformer;
