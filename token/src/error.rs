use common::{AccessError, Role};
use cosmwasm_std::{OverflowError, StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("Unauthorized: caller lacks the {role} role")]
    Unauthorized { role: Role },

    #[error("Cannot remove the last admin")]
    CannotRemoveLastAdmin,

    #[error("Insufficient funds: available {available}, requested {requested}")]
    InsufficientFunds {
        available: Uint128,
        requested: Uint128,
    },

    #[error("Invalid zero amount")]
    InvalidZeroAmount,
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
