// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

mod network_list;
mod network_options;
mod network_status;

pub use network_list::network_list;
pub use network_options::network_options;
pub use network_status::network_status;
