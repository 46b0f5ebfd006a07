// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::metrics::{MetricsError, gather_metric_families, gather_metrics};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use prometheus::proto::{Metric, MetricFamily};
use serde_json::{Value, json};

impl IntoResponse for MetricsError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": format!("Failed to gather metrics: {}", self) })),
        )
            .into_response()
    }
}

/// Handler for GET /metrics (Prometheus text format)
pub async fn get_metrics() -> Result<Response, MetricsError> {
    let metrics = gather_metrics()?;
    Ok((
        StatusCode::OK,
        [("Content-Type", "text/plain; version=0.0.4")],
        metrics,
    )
        .into_response())
}

/// Handler for GET /metrics.json
pub async fn get_metrics_json() -> Result<Json<Vec<Value>>, MetricsError> {
    let families = gather_metric_families()?;
    Ok(Json(families.iter().map(family_to_json).collect()))
}

fn family_to_json(family: &MetricFamily) -> Value {
    json!({
        "name": family.get_name(),
        "help": family.get_help(),
        "type": format!("{:?}", family.get_field_type()),
        "metrics": family.get_metric().iter().map(metric_to_json).collect::<Vec<_>>(),
    })
}

fn metric_to_json(metric: &Metric) -> Value {
    let labels: serde_json::Map<String, Value> = metric
        .get_label()
        .iter()
        .map(|label| (label.get_name().to_string(), json!(label.get_value())))
        .collect();

    let value = if metric.has_counter() {
        json!(metric.get_counter().get_value())
    } else if metric.has_gauge() {
        json!(metric.get_gauge().get_value())
    } else if metric.has_histogram() {
        let histogram = metric.get_histogram();
        json!({
            "sample_count": histogram.get_sample_count(),
            "sample_sum": histogram.get_sample_sum(),
        })
    } else {
        Value::Null
    };

    json!({ "labels": labels, "value": value })
}
