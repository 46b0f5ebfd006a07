// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod address;
pub mod fee;
pub mod numeric;

pub use address::{AddressError, PUBKEY_LEN, decode_address, encode_address};
pub use fee::{FeeError, FeeOptions, SuggestedFee};
