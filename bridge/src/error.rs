//! Error types for the swap bridge contract

use common::{AccessError, Role};
use cosmwasm_std::StdError;
use thiserror::Error;

use crate::ledger::LedgerError;
use crate::signature::SignatureError;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: caller lacks the {role} role")]
    Unauthorized { role: Role },

    #[error("Cannot remove the last admin")]
    CannotRemoveLastAdmin,

    // ========================================================================
    // Chain Errors
    // ========================================================================

    #[error("Wrong chain: this bridge is chain {expected}, got {got}")]
    WrongChain { expected: u64, got: u64 },

    #[error("Chain not allowed: {chain_id}")]
    ChainNotAllowed { chain_id: u64 },

    #[error("Invalid chain ID: {chain_id}")]
    InvalidChainId { chain_id: u64 },

    // ========================================================================
    // Transfer Errors
    // ========================================================================

    #[error("Duplicate transfer: {transfer_id} already processed")]
    DuplicateTransfer { transfer_id: String },

    #[error("Wrong validator: expected {expected}, recovered {recovered}")]
    WrongValidator { expected: String, recovered: String },

    #[error("Malformed signature: {reason}")]
    MalformedSignature { reason: String },

    #[error("Invalid address: {reason}")]
    InvalidAddress { reason: String },

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },
}

impl From<AccessError> for ContractError {
    fn from(err: AccessError) -> Self {
        match err {
            AccessError::Std(e) => ContractError::Std(e),
            AccessError::Unauthorized { role } => ContractError::Unauthorized { role },
            AccessError::CannotRemoveLastAdmin => ContractError::CannotRemoveLastAdmin,
        }
    }
}

impl From<LedgerError> for ContractError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::Std(e) => ContractError::Std(e),
            LedgerError::NotEmpty { transfer_id, .. } => {
                ContractError::DuplicateTransfer { transfer_id }
            }
            LedgerError::InvalidTarget => {
                ContractError::Std(StdError::generic_err("swap status cannot be reset"))
            }
        }
    }
}

impl From<SignatureError> for ContractError {
    fn from(err: SignatureError) -> Self {
        ContractError::MalformedSignature {
            reason: err.to_string(),
        }
    }
}
