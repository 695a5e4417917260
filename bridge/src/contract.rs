//! Swap Bridge Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use common::Role;
use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_grant_role, execute_init_swap, execute_redeem, execute_renounce_role,
    execute_revoke_role, execute_set_chain_id, execute_set_init_signature_check,
    execute_update_chain_id, execute_update_token_address, parse_principal,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_allowed_chains, query_compute_transfer_id, query_config, query_has_role,
    query_is_chain_allowed, query_role_members, query_stats, query_swap_status,
    query_this_chain_id,
};
use crate::registry::{set_allowed, update_own_chain_id};
use crate::state::{Config, Stats, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, ROLES, STATS};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = match msg.admin {
        Some(admin) => deps.api.addr_validate(&admin)?,
        None => info.sender,
    };
    ROLES.bootstrap(deps.storage, Role::Admin, &admin)?;

    let token = deps.api.addr_validate(&msg.token)?;
    update_own_chain_id(deps.storage, msg.chain_id)?;

    for chain_id in &msg.allowed_chains {
        set_allowed(deps.storage, *chain_id, true)?;
    }

    let mut validator_count = 0u32;
    for validator in &msg.validators {
        let principal = parse_principal("validator", validator)?;
        if ROLES.bootstrap(deps.storage, Role::Validator, &principal.to_addr())? {
            validator_count += 1;
        }
    }

    let config = Config {
        token,
        verify_init_signature: msg.verify_init_signature,
    };
    CONFIG.save(deps.storage, &config)?;
    STATS.save(deps.storage, &Stats::default())?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", admin)
        .add_attribute("token", config.token)
        .add_attribute("chain_id", msg.chain_id.to_string())
        .add_attribute("allowed_chains", msg.allowed_chains.len().to_string())
        .add_attribute("validator_count", validator_count.to_string())
        .add_attribute(
            "verify_init_signature",
            config.verify_init_signature.to_string(),
        ))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Transfers
        ExecuteMsg::InitSwap {
            chain_from,
            chain_to,
            recipient,
            amount,
            nonce,
            signature,
        } => execute_init_swap(
            deps, info, chain_from, chain_to, recipient, amount, nonce, signature,
        ),
        ExecuteMsg::Redeem {
            chain_from,
            chain_to,
            initiator,
            recipient,
            amount,
            nonce,
            signature,
        } => execute_redeem(
            deps, info, chain_from, chain_to, initiator, recipient, amount, nonce, signature,
        ),

        // Chain registry
        ExecuteMsg::SetChainId { chain_id, allowed } => {
            execute_set_chain_id(deps, info, chain_id, allowed)
        }
        ExecuteMsg::UpdateChainId { chain_id } => execute_update_chain_id(deps, info, chain_id),

        // Configuration
        ExecuteMsg::UpdateTokenAddress { token } => {
            execute_update_token_address(deps, info, token)
        }
        ExecuteMsg::SetInitSignatureCheck { enabled } => {
            execute_set_init_signature_check(deps, info, enabled)
        }

        // Access control
        ExecuteMsg::GrantRole { role, address } => execute_grant_role(deps, info, role, address),
        ExecuteMsg::RevokeRole { role, address } => {
            execute_revoke_role(deps, info, role, address)
        }
        ExecuteMsg::RenounceRole { role } => execute_renounce_role(deps, info, role),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Stats {} => to_json_binary(&query_stats(deps)?),

        // Chain registry
        QueryMsg::ThisChainId {} => to_json_binary(&query_this_chain_id(deps)?),
        QueryMsg::IsChainAllowed { chain_id } => {
            to_json_binary(&query_is_chain_allowed(deps, chain_id)?)
        }
        QueryMsg::AllowedChains { start_after, limit } => {
            to_json_binary(&query_allowed_chains(deps, start_after, limit)?)
        }

        // Access control
        QueryMsg::HasRole { role, address } => to_json_binary(&query_has_role(deps, role, address)?),
        QueryMsg::RoleMembers {
            role,
            start_after,
            limit,
        } => to_json_binary(&query_role_members(deps, role, start_after, limit)?),

        // Ledger
        QueryMsg::SwapStatus { transfer_id } => {
            to_json_binary(&query_swap_status(deps, transfer_id)?)
        }
        QueryMsg::ComputeTransferId {
            chain_from,
            chain_to,
            initiator,
            recipient,
            amount,
            nonce,
        } => to_json_binary(&query_compute_transfer_id(
            chain_from, chain_to, initiator, recipient, amount, nonce,
        )?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
