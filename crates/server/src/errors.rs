// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Rosetta error taxonomy.
//!
//! Every failure of a Rosetta endpoint is reported as one of the [`ErrorCode`]s
//! below, serialized as the Rosetta `Error` object. The full table is
//! advertised by `/network/options`.

use crate::provider::ProviderError;
use crate::utils::FeeError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

// ================================================================================================
// Error codes
// ================================================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    Unknown,
    UnableToGetAccount,
    InvalidAccountAddress,
    UnableToGetBlock,
    NotImplemented,
    UnableToSubmitTransaction,
    MalformedValue,
    UnableToGetNodeStatus,
    InvalidInputParam,
    InsufficientGasLimit,
    GasPriceTooLow,
    TransactionIsNotInPool,
    CannotParsePoolTransaction,
    InvalidNetworkIdentifier,
    OfflineMode,
    UnableToGetNetworkConfig,
    UnableToComputeTransactionHash,
    UnsupportedCurveType,
}

impl ErrorCode {
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::Unknown,
        ErrorCode::UnableToGetAccount,
        ErrorCode::InvalidAccountAddress,
        ErrorCode::UnableToGetBlock,
        ErrorCode::NotImplemented,
        ErrorCode::UnableToSubmitTransaction,
        ErrorCode::MalformedValue,
        ErrorCode::UnableToGetNodeStatus,
        ErrorCode::InvalidInputParam,
        ErrorCode::InsufficientGasLimit,
        ErrorCode::GasPriceTooLow,
        ErrorCode::TransactionIsNotInPool,
        ErrorCode::CannotParsePoolTransaction,
        ErrorCode::InvalidNetworkIdentifier,
        ErrorCode::OfflineMode,
        ErrorCode::UnableToGetNetworkConfig,
        ErrorCode::UnableToComputeTransactionHash,
        ErrorCode::UnsupportedCurveType,
    ];

    pub fn code(self) -> i32 {
        match self {
            ErrorCode::Unknown => 0,
            ErrorCode::UnableToGetAccount => 1,
            ErrorCode::InvalidAccountAddress => 2,
            ErrorCode::UnableToGetBlock => 3,
            ErrorCode::NotImplemented => 4,
            ErrorCode::UnableToSubmitTransaction => 5,
            ErrorCode::MalformedValue => 6,
            ErrorCode::UnableToGetNodeStatus => 7,
            ErrorCode::InvalidInputParam => 8,
            ErrorCode::InsufficientGasLimit => 9,
            ErrorCode::GasPriceTooLow => 10,
            ErrorCode::TransactionIsNotInPool => 11,
            ErrorCode::CannotParsePoolTransaction => 12,
            ErrorCode::InvalidNetworkIdentifier => 13,
            ErrorCode::OfflineMode => 14,
            ErrorCode::UnableToGetNetworkConfig => 15,
            ErrorCode::UnableToComputeTransactionHash => 16,
            ErrorCode::UnsupportedCurveType => 17,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ErrorCode::Unknown => "unknown error",
            ErrorCode::UnableToGetAccount => "unable to get account",
            ErrorCode::InvalidAccountAddress => "invalid account address",
            ErrorCode::UnableToGetBlock => "unable to get block",
            ErrorCode::NotImplemented => "operation not implemented",
            ErrorCode::UnableToSubmitTransaction => "unable to submit transaction",
            ErrorCode::MalformedValue => "malformed value",
            ErrorCode::UnableToGetNodeStatus => "unable to get node status",
            ErrorCode::InvalidInputParam => "invalid input param",
            ErrorCode::InsufficientGasLimit => "insufficient gas limit",
            ErrorCode::GasPriceTooLow => "gas price is too low",
            ErrorCode::TransactionIsNotInPool => "transaction is not in pool",
            ErrorCode::CannotParsePoolTransaction => "cannot parse pool transaction",
            ErrorCode::InvalidNetworkIdentifier => "invalid network identifier",
            ErrorCode::OfflineMode => "rosetta server is in offline mode",
            ErrorCode::UnableToGetNetworkConfig => "unable to get network config",
            ErrorCode::UnableToComputeTransactionHash => "unable to compute transaction hash",
            ErrorCode::UnsupportedCurveType => "unsupported curve type",
        }
    }

    /// Only failures of the upstream observer may succeed on a second try.
    pub fn retriable(self) -> bool {
        matches!(
            self,
            ErrorCode::UnableToGetAccount
                | ErrorCode::UnableToGetBlock
                | ErrorCode::UnableToGetNodeStatus
                | ErrorCode::UnableToGetNetworkConfig
                | ErrorCode::UnableToSubmitTransaction
        )
    }

    /// Entry of the error table advertised by `/network/options`.
    pub fn to_object(self) -> ErrorObject {
        ErrorObject {
            code: self.code(),
            message: self.message().to_string(),
            retriable: self.retriable(),
            details: None,
        }
    }

    pub fn all_objects() -> Vec<ErrorObject> {
        Self::ALL.iter().map(|code| code.to_object()).collect()
    }
}

impl From<FeeError> for ErrorCode {
    fn from(err: FeeError) -> Self {
        match err {
            FeeError::NotImplemented => ErrorCode::NotImplemented,
            FeeError::InsufficientGasLimit => ErrorCode::InsufficientGasLimit,
            FeeError::GasPriceTooLow => ErrorCode::GasPriceTooLow,
        }
    }
}

// ================================================================================================
// Wire object
// ================================================================================================

/// Rosetta `Error` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorObject {
    pub code: i32,
    pub message: String,
    pub retriable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Map<String, Value>>,
}

// ================================================================================================
// API error
// ================================================================================================

/// Error returned by every Rosetta handler.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub code: ErrorCode,
    pub original_error: Option<String>,
}

impl ApiError {
    pub fn new(code: ErrorCode) -> Self {
        Self {
            code,
            original_error: None,
        }
    }

    /// Keeps the message of the underlying failure in `details.originalError`.
    pub fn with_original(code: ErrorCode, err: impl fmt::Display) -> Self {
        Self {
            code,
            original_error: Some(err.to_string()),
        }
    }

    /// Maps a provider failure to `code`, unless the provider is offline or
    /// rejected the request input.
    pub fn from_provider(code: ErrorCode, err: ProviderError) -> Self {
        match err {
            ProviderError::Offline => Self::new(ErrorCode::OfflineMode),
            err @ ProviderError::InvalidHash(_) => {
                Self::with_original(ErrorCode::InvalidInputParam, err)
            }
            err => Self::with_original(code, err),
        }
    }

    pub fn to_object(&self) -> ErrorObject {
        let mut object = self.code.to_object();
        if let Some(original) = &self.original_error {
            let mut details = Map::new();
            details.insert("originalError".to_string(), Value::String(original.clone()));
            object.details = Some(details);
        }
        object
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.original_error {
            Some(original) => write!(f, "{}: {}", self.code.message(), original),
            None => f.write_str(self.code.message()),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ErrorCode> for ApiError {
    fn from(code: ErrorCode) -> Self {
        Self::new(code)
    }
}

impl From<FeeError> for ApiError {
    fn from(err: FeeError) -> Self {
        Self::new(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut response =
            (StatusCode::INTERNAL_SERVER_ERROR, Json(self.to_object())).into_response();
        response.extensions_mut().insert(self.code);
        response
    }
}
