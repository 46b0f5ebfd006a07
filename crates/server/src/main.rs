// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

#[cfg(not(target_os = "windows"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use anyhow::Context;
use config::{Args, RosettaConfig};
use server::{app, logging, metrics, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse_args();

    let mut config = RosettaConfig::from_env_file(&args.env_file)
        .with_context(|| format!("Failed to load configuration from {}", args.env_file))?;
    if args.offline {
        config.observer.offline = true;
    }

    logging::init(&config.log)?;

    if config.metrics.enabled {
        metrics::init(&config.metrics.prometheus_prefix)?;
        tracing::info!(
            "Metrics enabled with prefix '{}'",
            config.metrics.prometheus_prefix
        );
    }

    let addr = format!("{}:{}", config.express.bind_host, config.express.port);
    let observer_url = config.observer.url.clone();
    let offline = config.observer.offline;

    let state = AppState::connect(config)
        .await
        .context("Failed to connect to the observer")?;
    let network = state.network_identifier();
    let app = app::create_app(state);

    tracing::info!("Starting server on {}", addr);
    tracing::info!("Network: {}/{}", network.blockchain, network.network);
    if offline {
        tracing::info!("Running in offline mode");
    } else {
        tracing::info!("Observer URL: {}", observer_url);
    }

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
