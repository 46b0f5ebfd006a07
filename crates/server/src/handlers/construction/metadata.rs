// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::consts::{OP_TRANSFER, TRANSACTION_VERSION};
use crate::errors::{ApiError, ErrorCode};
use crate::extractors::RosettaJson;
use crate::state::AppState;
use crate::types::{Amount, ConstructionMetadataRequest, ConstructionMetadataResponse, Metadata};
use crate::utils::fee::{FeeOptions, compute_suggested_fee_and_gas};
use axum::{Json, extract::State};
use serde_json::Value;

/// Handler for POST /construction/metadata
///
/// Resolves the sender nonce and the gas parameters of the transaction
/// described by the preprocess options.
pub async fn construction_metadata(
    State(state): State<AppState>,
    RosettaJson(request): RosettaJson<ConstructionMetadataRequest>,
) -> Result<Json<ConstructionMetadataResponse>, ApiError> {
    state.check_network(&request.network_identifier)?;
    state.ensure_online()?;

    let options = &request.options;
    let sender = options
        .get("sender")
        .and_then(Value::as_str)
        .ok_or_else(|| ApiError::with_original(ErrorCode::InvalidInputParam, "missing sender"))?;
    let operation_type = options
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or(OP_TRANSFER);

    let network_config = state.network_config();
    let suggested = compute_suggested_fee_and_gas(
        operation_type,
        &FeeOptions::from_map(options),
        network_config,
    )?;

    let account = state
        .provider
        .get_account(sender)
        .await
        .map_err(|err| ApiError::from_provider(ErrorCode::UnableToGetAccount, err))?;

    let mut metadata = Metadata::new();
    for key in ["sender", "receiver", "value", "data"] {
        if let Some(value) = options.get(key) {
            metadata.insert(key.to_string(), value.clone());
        }
    }
    metadata.insert("nonce".to_string(), Value::from(account.account.nonce));
    metadata.insert("gasLimit".to_string(), Value::from(suggested.gas_limit));
    metadata.insert("gasPrice".to_string(), Value::from(suggested.gas_price));
    metadata.insert(
        "chainID".to_string(),
        Value::String(network_config.chain_id.clone()),
    );
    metadata.insert("version".to_string(), Value::from(TRANSACTION_VERSION));

    Ok(Json(ConstructionMetadataResponse {
        metadata,
        suggested_fee: vec![Amount {
            value: suggested.fee.to_string(),
            currency: state.currency(),
        }],
    }))
}
