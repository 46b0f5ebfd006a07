// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod app;
pub mod consts;
pub mod errors;
pub mod extractors;
pub mod handlers;
pub mod logging;
pub mod metrics;
pub mod provider;
pub mod routes;
pub mod state;
pub mod transform;
pub mod types;
pub mod utils;
