//! Chain registry
//!
//! Holds this instance's own chain id and the allow-list of counterpart
//! chains. The own id is never implicitly allowed; a chain must be added to the
//! allow-list explicitly before it can be swapped to or redeemed from.

use cosmwasm_std::{Order, StdResult, Storage};
use cw_storage_plus::Bound;

use crate::error::ContractError;
use crate::state::{ALLOWED_CHAINS, THIS_CHAIN_ID};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 50;

pub fn own_chain_id(storage: &dyn Storage) -> StdResult<u64> {
    THIS_CHAIN_ID.load(storage)
}

/// Replace the own chain id, returning the previous one.
///
/// Swap records are keyed by the ids active when they were created and are
/// not touched.
pub fn update_own_chain_id(storage: &mut dyn Storage, chain_id: u64) -> Result<u64, ContractError> {
    if chain_id == 0 {
        return Err(ContractError::InvalidChainId { chain_id });
    }
    let previous = THIS_CHAIN_ID.may_load(storage)?.unwrap_or_default();
    THIS_CHAIN_ID.save(storage, &chain_id)?;
    Ok(previous)
}

pub fn is_allowed(storage: &dyn Storage, chain_id: u64) -> StdResult<bool> {
    Ok(ALLOWED_CHAINS
        .may_load(storage, chain_id)?
        .unwrap_or(false))
}

/// Toggle a counterpart chain. Returns `true` if the stored value changed.
pub fn set_allowed(
    storage: &mut dyn Storage,
    chain_id: u64,
    allowed: bool,
) -> Result<bool, ContractError> {
    if chain_id == 0 {
        return Err(ContractError::InvalidChainId { chain_id });
    }
    let current = is_allowed(storage, chain_id)?;
    if current == allowed {
        return Ok(false);
    }

    if allowed {
        ALLOWED_CHAINS.save(storage, chain_id, &true)?;
    } else {
        ALLOWED_CHAINS.remove(storage, chain_id);
    }
    Ok(true)
}

pub fn ensure_own_chain(storage: &dyn Storage, chain_id: u64) -> Result<(), ContractError> {
    let expected = own_chain_id(storage)?;
    if chain_id != expected {
        return Err(ContractError::WrongChain {
            expected,
            got: chain_id,
        });
    }
    Ok(())
}

pub fn ensure_allowed(storage: &dyn Storage, chain_id: u64) -> Result<(), ContractError> {
    if !is_allowed(storage, chain_id)? {
        return Err(ContractError::ChainNotAllowed { chain_id });
    }
    Ok(())
}

pub fn allowed_chains(
    storage: &dyn Storage,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Vec<u64>> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    ALLOWED_CHAINS
        .keys(storage, start, None, Order::Ascending)
        .take(limit)
        .collect()
}
