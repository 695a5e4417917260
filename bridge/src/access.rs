//! Authorization guards for bridge operations.
//!
//! Thin wrappers over the instance's role table. Guards only read roles; they
//! never touch chain or ledger state.

use common::Role;
use cosmwasm_std::{Addr, Api, Storage};

use crate::address::Principal;
use crate::error::ContractError;
use crate::state::ROLES;

pub fn has_role(storage: &dyn Storage, role: Role, who: &Addr) -> Result<bool, ContractError> {
    Ok(ROLES.has_role(storage, role, who)?)
}

pub fn ensure_admin(storage: &dyn Storage, sender: &Addr) -> Result<(), ContractError> {
    Ok(ROLES.ensure(storage, Role::Admin, sender)?)
}

pub fn is_validator(storage: &dyn Storage, signer: &Principal) -> Result<bool, ContractError> {
    has_role(storage, Role::Validator, &signer.to_addr())
}

/// Validate a role member address at the message boundary.
///
/// Validators are signing principals and must be 20-byte hex addresses; other
/// roles accept any address the chain considers valid.
pub fn role_member_addr(api: &dyn Api, role: Role, address: &str) -> Result<Addr, ContractError> {
    match role {
        Role::Validator => Principal::parse(address)
            .map(|p| p.to_addr())
            .map_err(|e| ContractError::InvalidAddress {
                reason: e.to_string(),
            }),
        _ => Ok(api.addr_validate(address)?),
    }
}

/// Role table key for the caller's own membership.
///
/// A validator acts from the local account whose canonical bytes are its
/// principal, so its key is the principal rather than the bech32 sender.
pub fn caller_member_addr(
    api: &dyn Api,
    role: Role,
    sender: &Addr,
) -> Result<Addr, ContractError> {
    match role {
        Role::Validator => Principal::from_local_addr(api, sender)
            .map(|p| p.to_addr())
            .map_err(|e| ContractError::InvalidAddress {
                reason: format!("caller: {}", e),
            }),
        _ => Ok(sender.clone()),
    }
}
