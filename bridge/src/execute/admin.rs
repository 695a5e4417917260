//! Role management handlers.

use common::Role;
use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::access::{caller_member_addr, role_member_addr};
use crate::error::ContractError;
use crate::state::ROLES;

/// Grant `role` to `address` (admin only, idempotent).
pub fn execute_grant_role(
    deps: DepsMut,
    info: MessageInfo,
    role: Role,
    address: String,
) -> Result<Response, ContractError> {
    let member = role_member_addr(deps.api, role, &address)?;
    let changed = ROLES.grant(deps.storage, &info.sender, role, &member)?;

    Ok(Response::new()
        .add_attribute("method", "grant_role")
        .add_attribute("role", role.as_str())
        .add_attribute("address", member)
        .add_attribute("changed", changed.to_string()))
}

/// Revoke `role` from `address` (admin only, idempotent).
pub fn execute_revoke_role(
    deps: DepsMut,
    info: MessageInfo,
    role: Role,
    address: String,
) -> Result<Response, ContractError> {
    let member = role_member_addr(deps.api, role, &address)?;
    let changed = ROLES.revoke(deps.storage, &info.sender, role, &member)?;

    Ok(Response::new()
        .add_attribute("method", "revoke_role")
        .add_attribute("role", role.as_str())
        .add_attribute("address", member)
        .add_attribute("changed", changed.to_string()))
}

/// Drop one of the caller's own roles.
pub fn execute_renounce_role(
    deps: DepsMut,
    info: MessageInfo,
    role: Role,
) -> Result<Response, ContractError> {
    let member = caller_member_addr(deps.api, role, &info.sender)?;
    let changed = ROLES.renounce(deps.storage, &member, role)?;

    Ok(Response::new()
        .add_attribute("method", "renounce_role")
        .add_attribute("role", role.as_str())
        .add_attribute("address", member)
        .add_attribute("changed", changed.to_string()))
}
