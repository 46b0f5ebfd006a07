// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use lazy_static::lazy_static;
use prometheus::proto::MetricFamily;
use prometheus::{
    Counter, Encoder, Histogram, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry,
    TextEncoder,
};
use std::sync::Mutex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("Metrics not initialized")]
    NotInitialized,

    #[error("Metrics registry lock poisoned")]
    LockPoisoned,

    #[error("Prometheus error: {0}")]
    Prometheus(#[from] prometheus::Error),

    #[error("Metrics output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

lazy_static! {
    pub static ref REGISTRY: Mutex<Option<Registry>> = Mutex::new(None);

    // Created without registering to the default registry
    pub static ref HTTP_REQUESTS: Counter = Counter::new(
        "http_requests",
        "Total number of HTTP requests"
    )
    .expect("Failed to create http_requests counter");

    pub static ref HTTP_REQUEST_SUCCESS: Counter = Counter::new(
        "http_request_success",
        "Number of successful HTTP requests"
    )
    .expect("Failed to create http_request_success counter");

    pub static ref HTTP_REQUEST_ERROR: Counter = Counter::new(
        "http_request_error",
        "Number of HTTP request errors"
    )
    .expect("Failed to create http_request_error counter");

    pub static ref REQUEST_DURATION_SECONDS: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            "request_duration_seconds",
            "Duration of HTTP requests in seconds"
        ).buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.0, 5.0]),
        &["method", "route", "status_code"]
    )
    .expect("Failed to create request_duration_seconds histogram");

    pub static ref RESPONSE_SIZE_BYTES: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            "response_size_bytes",
            "Size of HTTP responses in bytes"
        ).buckets(vec![100.0, 500.0, 1000.0, 5000.0, 10000.0, 50000.0, 100000.0, 500000.0, 1000000.0]),
        &["method", "route", "status_code"]
    )
    .expect("Failed to create response_size_bytes histogram");

    pub static ref ROSETTA_ERRORS: IntCounterVec = IntCounterVec::new(
        Opts::new("rosetta_errors", "Number of Rosetta errors returned, by error code"),
        &["code"]
    )
    .expect("Failed to create rosetta_errors counter");

    pub static ref BLOCKS_NORMALIZED: Counter = Counter::new(
        "blocks_normalized",
        "Number of blocks reconciled with their neighbours"
    )
    .expect("Failed to create blocks_normalized counter");

    pub static ref INVALID_TRANSACTIONS_ATTRIBUTED: Counter = Counter::new(
        "invalid_transactions_attributed",
        "Number of invalid transactions attributed to the block that executed them"
    )
    .expect("Failed to create invalid_transactions_attributed counter");

    pub static ref OPERATIONS_PER_BLOCK: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "operations_per_block",
            "Number of operations in a served block"
        ).buckets(vec![1.0, 4.0, 16.0, 64.0, 256.0, 1024.0, 4096.0, 16384.0]),
    )
    .expect("Failed to create operations_per_block histogram");
}

/// Registers every metric with a registry using `prefix`.
///
/// Calling it again is a no-op.
pub fn init(prefix: &str) -> Result<(), MetricsError> {
    let mut guard = REGISTRY.lock().map_err(|_| MetricsError::LockPoisoned)?;
    if guard.is_some() {
        return Ok(());
    }

    let registry = Registry::new_custom(Some(prefix.to_string()), None)?;

    registry.register(Box::new(HTTP_REQUESTS.clone()))?;
    registry.register(Box::new(HTTP_REQUEST_SUCCESS.clone()))?;
    registry.register(Box::new(HTTP_REQUEST_ERROR.clone()))?;
    registry.register(Box::new(REQUEST_DURATION_SECONDS.clone()))?;
    registry.register(Box::new(RESPONSE_SIZE_BYTES.clone()))?;
    registry.register(Box::new(ROSETTA_ERRORS.clone()))?;
    registry.register(Box::new(BLOCKS_NORMALIZED.clone()))?;
    registry.register(Box::new(INVALID_TRANSACTIONS_ATTRIBUTED.clone()))?;
    registry.register(Box::new(OPERATIONS_PER_BLOCK.clone()))?;

    *guard = Some(registry);
    Ok(())
}

pub fn is_initialized() -> bool {
    REGISTRY.lock().map(|guard| guard.is_some()).unwrap_or(false)
}

pub fn gather_metric_families() -> Result<Vec<MetricFamily>, MetricsError> {
    let guard = REGISTRY.lock().map_err(|_| MetricsError::LockPoisoned)?;
    let registry = guard.as_ref().ok_or(MetricsError::NotInitialized)?;
    Ok(registry.gather())
}

/// Gather all metrics as Prometheus text format
pub fn gather_metrics() -> Result<String, MetricsError> {
    let metric_families = gather_metric_families()?;
    let mut buffer = Vec::new();
    TextEncoder::new().encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

/// Domain metrics of the block endpoint.
pub struct BlockMetrics;

impl BlockMetrics {
    pub fn record(invalid_transactions: usize, operations: usize) {
        BLOCKS_NORMALIZED.inc();
        INVALID_TRANSACTIONS_ATTRIBUTED.inc_by(invalid_transactions as f64);
        OPERATIONS_PER_BLOCK.observe(operations as f64);
    }
}
