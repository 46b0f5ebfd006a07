// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to .env file (e.g., .env.devnet)
    #[arg(short, long, default_value = ".env")]
    pub env_file: String,

    /// Start without contacting the observer (construction endpoints only)
    #[arg(long, default_value_t = false)]
    pub offline: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
