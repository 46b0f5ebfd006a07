// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::errors::{ApiError, ErrorCode};
use crate::extractors::RosettaJson;
use crate::state::AppState;
use crate::types::{AccountBalanceRequest, AccountBalanceResponse, Amount, BlockIdentifier};
use axum::{Json, extract::State};
use serde_json::{Map, Value};

/// Handler for POST /account/balance
///
/// Only the balance at the latest block is available; asking for any specific
/// block is `NotImplemented`.
pub async fn account_balance(
    State(state): State<AppState>,
    RosettaJson(request): RosettaJson<AccountBalanceRequest>,
) -> Result<Json<AccountBalanceResponse>, ApiError> {
    state.check_network(&request.network_identifier)?;
    state.ensure_online()?;

    if let Some(block) = &request.block_identifier
        && (block.index.is_some() || block.hash.is_some())
    {
        return Err(ApiError::with_original(
            ErrorCode::NotImplemented,
            "historical balance lookup is not supported",
        ));
    }

    let address = &request.account_identifier.address;
    state
        .provider
        .decode_address(address)
        .map_err(|err| ApiError::with_original(ErrorCode::InvalidAccountAddress, err))?;

    let model = state
        .provider
        .get_account(address)
        .await
        .map_err(|err| ApiError::from_provider(ErrorCode::UnableToGetAccount, err))?;

    let balance = if model.account.balance.is_empty() {
        "0".to_string()
    } else {
        model.account.balance
    };

    let mut metadata = Map::new();
    metadata.insert("nonce".to_string(), Value::from(model.account.nonce));

    Ok(Json(AccountBalanceResponse {
        block_identifier: BlockIdentifier {
            index: model.block_info.nonce,
            hash: model.block_info.hash,
        },
        balances: vec![Amount {
            value: balance,
            currency: state.currency(),
        }],
        metadata: Some(metadata),
    }))
}
