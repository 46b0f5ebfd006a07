// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Construction and inspection of Rosetta operations.

use crate::consts::{OP_STATUS_SUCCESS, OP_TRANSFER};
use crate::types::{AccountIdentifier, Amount, Currency, Operation, OperationIdentifier};
use crate::utils::numeric::{format_signed, parse_signed_amount};
use thiserror::Error;

// ================================================================================================
// Building
// ================================================================================================

fn balance_change(
    kind: &str,
    address: &str,
    amount: u128,
    negative: bool,
    currency: &Currency,
) -> Operation {
    Operation {
        operation_identifier: OperationIdentifier::default(),
        kind: kind.to_string(),
        status: None,
        account: Some(AccountIdentifier::new(address)),
        amount: Some(Amount {
            value: format_signed(amount, negative),
            currency: currency.clone(),
        }),
        metadata: None,
    }
}

/// Operation taking `amount` from `address`.
pub fn debit(kind: &str, address: &str, amount: u128, currency: &Currency) -> Operation {
    balance_change(kind, address, amount, true, currency)
}

/// Operation adding `amount` to `address`.
pub fn credit(kind: &str, address: &str, amount: u128, currency: &Currency) -> Operation {
    balance_change(kind, address, amount, false, currency)
}

/// Assigns identifiers `0..n` in list order.
pub fn index_operations(operations: &mut [Operation]) {
    for (index, operation) in operations.iter_mut().enumerate() {
        operation.operation_identifier = OperationIdentifier {
            index: index as u64,
        };
    }
}

pub fn populate_status_of_operations(operations: &mut [Operation]) {
    for operation in operations.iter_mut() {
        operation.status = Some(OP_STATUS_SUCCESS.to_string());
    }
}

// ================================================================================================
// Parsing
// ================================================================================================

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransferIntentError {
    #[error("Expected exactly two operations, got {0}")]
    WrongOperationCount(usize),

    #[error("Operation type '{0}' is not supported")]
    UnsupportedOperationType(String),

    #[error("Operation {0} has no account")]
    MissingAccount(usize),

    #[error("Operation {0} has no amount")]
    MissingAmount(usize),

    #[error("Malformed amount: {0}")]
    MalformedAmount(String),

    #[error("Transfer operations must debit the sender and credit the receiver with the same value")]
    Unbalanced,
}

/// A native transfer described by a pair of Transfer operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferIntent {
    pub sender: String,
    pub receiver: String,
    pub value: u128,
}

impl TryFrom<&[Operation]> for TransferIntent {
    type Error = TransferIntentError;

    fn try_from(operations: &[Operation]) -> Result<Self, Self::Error> {
        if operations.len() != 2 {
            return Err(TransferIntentError::WrongOperationCount(operations.len()));
        }

        let mut sender = None;
        let mut receiver = None;

        for (index, operation) in operations.iter().enumerate() {
            if operation.kind != OP_TRANSFER {
                return Err(TransferIntentError::UnsupportedOperationType(
                    operation.kind.clone(),
                ));
            }

            let account = operation
                .account
                .as_ref()
                .ok_or(TransferIntentError::MissingAccount(index))?;
            let amount = operation
                .amount
                .as_ref()
                .ok_or(TransferIntentError::MissingAmount(index))?;
            let (negative, value) = parse_signed_amount(&amount.value)
                .map_err(|_| TransferIntentError::MalformedAmount(amount.value.clone()))?;

            if negative {
                sender = Some((account.address.clone(), value));
            } else {
                receiver = Some((account.address.clone(), value));
            }
        }

        match (sender, receiver) {
            (Some((sender, sent)), Some((receiver, received))) if sent == received => Ok(Self {
                sender,
                receiver,
                value: sent,
            }),
            _ => Err(TransferIntentError::Unbalanced),
        }
    }
}

impl TransferIntent {
    /// The two Transfer operations of this intent, indexed, without status.
    pub fn to_operations(&self, currency: &Currency) -> Vec<Operation> {
        let mut operations = vec![
            debit(OP_TRANSFER, &self.sender, self.value, currency),
            credit(OP_TRANSFER, &self.receiver, self.value, currency),
        ];
        index_operations(&mut operations);
        operations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::OP_FEE;

    fn currency() -> Currency {
        Currency {
            symbol: "XeGLD".to_string(),
            decimals: 18,
        }
    }

    #[test]
    fn test_index_and_status() {
        let mut operations = vec![
            debit(OP_TRANSFER, "alice", 10, &currency()),
            credit(OP_TRANSFER, "bob", 10, &currency()),
            debit(OP_FEE, "alice", 1, &currency()),
        ];
        operations[2].operation_identifier.index = 42;

        index_operations(&mut operations);
        populate_status_of_operations(&mut operations);

        let indices: Vec<u64> = operations
            .iter()
            .map(|op| op.operation_identifier.index)
            .collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert!(operations.iter().all(|op| op.status.as_deref() == Some("Success")));
        assert_eq!(operations[0].amount.as_ref().unwrap().value, "-10");
        assert_eq!(operations[1].amount.as_ref().unwrap().value, "10");
    }

    #[test]
    fn test_transfer_intent_from_operations() {
        let intent = TransferIntent {
            sender: "alice".to_string(),
            receiver: "bob".to_string(),
            value: 1234,
        };
        let operations = intent.to_operations(&currency());

        assert_eq!(TransferIntent::try_from(operations.as_slice()), Ok(intent));
    }

    #[test]
    fn test_transfer_intent_rejects_malformed_operations() {
        let fee = vec![
            debit(OP_FEE, "alice", 1, &currency()),
            credit(OP_TRANSFER, "bob", 1, &currency()),
        ];
        assert_eq!(
            TransferIntent::try_from(fee.as_slice()),
            Err(TransferIntentError::UnsupportedOperationType("Fee".to_string()))
        );

        let single = vec![debit(OP_TRANSFER, "alice", 1, &currency())];
        assert_eq!(
            TransferIntent::try_from(single.as_slice()),
            Err(TransferIntentError::WrongOperationCount(1))
        );

        let unbalanced = vec![
            debit(OP_TRANSFER, "alice", 1, &currency()),
            credit(OP_TRANSFER, "bob", 2, &currency()),
        ];
        assert_eq!(
            TransferIntent::try_from(unbalanced.as_slice()),
            Err(TransferIntentError::Unbalanced)
        );
    }
}
