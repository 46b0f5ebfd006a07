// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::decode_transaction;
use crate::errors::{ApiError, ErrorCode};
use crate::extractors::RosettaJson;
use crate::state::AppState;
use crate::transform::TransferIntent;
use crate::types::{AccountIdentifier, ConstructionParseRequest, ConstructionParseResponse};
use crate::utils::numeric::parse_amount;
use axum::{Json, extract::State};

/// Handler for POST /construction/parse
pub async fn construction_parse(
    State(state): State<AppState>,
    RosettaJson(request): RosettaJson<ConstructionParseRequest>,
) -> Result<Json<ConstructionParseResponse>, ApiError> {
    state.check_network(&request.network_identifier)?;

    let tx = decode_transaction(&request.transaction)?;
    let value = parse_amount(&tx.value)
        .map_err(|err| ApiError::with_original(ErrorCode::MalformedValue, err))?;

    let intent = TransferIntent {
        sender: tx.sender.clone(),
        receiver: tx.receiver,
        value,
    };

    let account_identifier_signers = if request.signed {
        vec![AccountIdentifier::new(tx.sender)]
    } else {
        Vec::new()
    };

    Ok(Json(ConstructionParseResponse {
        operations: intent.to_operations(&state.currency()),
        account_identifier_signers,
    }))
}
