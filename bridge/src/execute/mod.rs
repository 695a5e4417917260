//! Execute handlers for the swap bridge contract.
//!
//! - `outgoing` - `InitSwap` (burn on the source chain)
//! - `incoming` - `Redeem` (validator-signed mint on the destination chain)
//! - `config` - Chain registry, token address, signature policy
//! - `admin` - Role grant/revoke/renounce

mod admin;
mod config;
mod incoming;
mod outgoing;

pub use admin::*;
pub use config::*;
pub use incoming::*;
pub use outgoing::*;

use cosmwasm_std::Uint128;

use crate::address::Principal;
use crate::error::ContractError;

/// Parse a principal from message input, mapping failures to `InvalidAddress`
pub(crate) fn parse_principal(field: &str, value: &str) -> Result<Principal, ContractError> {
    Principal::parse(value).map_err(|e| ContractError::InvalidAddress {
        reason: format!("{}: {}", field, e),
    })
}

pub(crate) fn ensure_nonzero(amount: Uint128) -> Result<(), ContractError> {
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "amount must be greater than zero".to_string(),
        });
    }
    Ok(())
}
