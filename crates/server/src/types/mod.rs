// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Rosetta data API and construction API objects.
//!
//! Field names follow the Rosetta wire format (snake_case); optional fields are
//! omitted when empty.

pub mod identifiers;
pub mod objects;
pub mod requests;

pub use identifiers::{
    AccountIdentifier, BlockIdentifier, NetworkIdentifier, OperationIdentifier,
    PartialBlockIdentifier, TransactionIdentifier,
};
pub use objects::{
    Allow, Amount, Block, Currency, Metadata, Operation, OperationStatus, Peer, PublicKey,
    Signature, SigningPayload, Transaction, Version,
};
pub use requests::*;
