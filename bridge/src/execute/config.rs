//! Configuration management handlers.
//!
//! This module handles:
//! - Counterpart chain allow-list
//! - Own chain id
//! - Paired token address
//! - `InitSwap` signature policy

use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::access::ensure_admin;
use crate::error::ContractError;
use crate::registry::{set_allowed, update_own_chain_id};
use crate::state::CONFIG;

// ============================================================================
// Chain Registry
// ============================================================================

/// Allow or deny a counterpart chain. Setting the current value is a no-op.
pub fn execute_set_chain_id(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u64,
    allowed: bool,
) -> Result<Response, ContractError> {
    ensure_admin(deps.storage, &info.sender)?;

    let changed = set_allowed(deps.storage, chain_id, allowed)?;

    Ok(Response::new()
        .add_attribute("method", "set_chain_id")
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("allowed", allowed.to_string())
        .add_attribute("changed", changed.to_string()))
}

/// Replace this instance's own chain id.
pub fn execute_update_chain_id(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u64,
) -> Result<Response, ContractError> {
    ensure_admin(deps.storage, &info.sender)?;

    let previous = update_own_chain_id(deps.storage, chain_id)?;

    Ok(Response::new()
        .add_attribute("method", "update_chain_id")
        .add_attribute("previous_chain_id", previous.to_string())
        .add_attribute("chain_id", chain_id.to_string()))
}

// ============================================================================
// Token & Signature Policy
// ============================================================================

pub fn execute_update_token_address(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
) -> Result<Response, ContractError> {
    ensure_admin(deps.storage, &info.sender)?;

    let token_addr = deps.api.addr_validate(&token)?;
    let mut config = CONFIG.load(deps.storage)?;
    config.token = token_addr.clone();
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "update_token_address")
        .add_attribute("token", token_addr))
}

pub fn execute_set_init_signature_check(
    deps: DepsMut,
    info: MessageInfo,
    enabled: bool,
) -> Result<Response, ContractError> {
    ensure_admin(deps.storage, &info.sender)?;

    let mut config = CONFIG.load(deps.storage)?;
    config.verify_init_signature = enabled;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_init_signature_check")
        .add_attribute("enabled", enabled.to_string()))
}
