//! Query handlers for the swap bridge contract.

use common::{HasRoleResponse, Role, RoleMembersResponse};
use cosmwasm_std::{Addr, Binary, Deps, StdError, StdResult, Uint128};

use crate::access::role_member_addr;
use crate::address::Principal;
use crate::hash::{bytes32_to_hex, compute_transfer_id};
use crate::ledger::status_of;
use crate::msg::{
    AllowedChainsResponse, ChainAllowedResponse, ConfigResponse, StatsResponse,
    SwapStatusResponse, ThisChainIdResponse, TransferIdResponse,
};
use crate::registry::{allowed_chains, is_allowed, own_chain_id};
use crate::state::{CONFIG, ROLES, STATS};

// ============================================================================
// Core Queries
// ============================================================================

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        token: config.token,
        chain_id: own_chain_id(deps.storage)?,
        verify_init_signature: config.verify_init_signature,
    })
}

pub fn query_stats(deps: Deps) -> StdResult<StatsResponse> {
    let stats = STATS.load(deps.storage)?;
    Ok(StatsResponse {
        total_swaps: stats.total_swaps,
        total_redeems: stats.total_redeems,
        total_swapped: stats.total_swapped,
        total_redeemed: stats.total_redeemed,
    })
}

// ============================================================================
// Chain Registry Queries
// ============================================================================

pub fn query_this_chain_id(deps: Deps) -> StdResult<ThisChainIdResponse> {
    Ok(ThisChainIdResponse {
        chain_id: own_chain_id(deps.storage)?,
    })
}

pub fn query_is_chain_allowed(deps: Deps, chain_id: u64) -> StdResult<ChainAllowedResponse> {
    Ok(ChainAllowedResponse {
        chain_id,
        allowed: is_allowed(deps.storage, chain_id)?,
    })
}

pub fn query_allowed_chains(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<AllowedChainsResponse> {
    Ok(AllowedChainsResponse {
        chains: allowed_chains(deps.storage, start_after, limit)?,
    })
}

// ============================================================================
// Access Control Queries
// ============================================================================

pub fn query_has_role(deps: Deps, role: Role, address: String) -> StdResult<HasRoleResponse> {
    let address = role_member_addr(deps.api, role, &address)
        .map_err(|e| StdError::generic_err(e.to_string()))?;
    let has_role = ROLES.has_role(deps.storage, role, &address)?;
    Ok(HasRoleResponse {
        role,
        address,
        has_role,
    })
}

pub fn query_role_members(
    deps: Deps,
    role: Role,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<RoleMembersResponse> {
    // Stored keys are canonical; lowercase so hex cursors match validator keys
    let start = start_after.map(|s| Addr::unchecked(s.to_lowercase()));
    let members = ROLES.members(deps.storage, role, start, limit)?;
    Ok(RoleMembersResponse { role, members })
}

// ============================================================================
// Ledger Queries
// ============================================================================

/// Status of a transfer id. Unknown ids report `Empty`.
pub fn query_swap_status(deps: Deps, transfer_id: Binary) -> StdResult<SwapStatusResponse> {
    let id: [u8; 32] = transfer_id
        .to_vec()
        .try_into()
        .map_err(|_| StdError::generic_err("Invalid transfer_id length, expected 32 bytes"))?;

    Ok(SwapStatusResponse {
        transfer_id,
        status: status_of(deps.storage, &id)?,
    })
}

/// Compute a transfer id without touching state.
pub fn query_compute_transfer_id(
    chain_from: u64,
    chain_to: u64,
    initiator: String,
    recipient: String,
    amount: Uint128,
    nonce: u64,
) -> StdResult<TransferIdResponse> {
    let initiator = Principal::parse(&initiator)?;
    let recipient = Principal::parse(&recipient)?;

    let id = compute_transfer_id(chain_from, chain_to, &initiator, &recipient, amount, nonce);
    Ok(TransferIdResponse {
        transfer_id: Binary::from(id.to_vec()),
        transfer_id_hex: bytes32_to_hex(&id),
    })
}
