//! State definitions for the swap bridge contract

use common::RoleTable;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

use crate::ledger::SwapStatus;

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Paired token contract (must grant this bridge `minter` and `burner`)
    pub token: Addr,
    /// Whether `InitSwap` signatures are recovered and checked against the
    /// validator set, or only recorded for the relayer
    pub verify_init_signature: bool,
}

/// Bridge statistics
#[cw_serde]
#[derive(Default)]
pub struct Stats {
    pub total_swaps: u64,
    pub total_redeems: u64,
    pub total_swapped: Uint128,
    pub total_redeemed: Uint128,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:swap-bridge";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Storage
// ============================================================================

pub const CONFIG: Item<Config> = Item::new("config");

pub const STATS: Item<Stats> = Item::new("stats");

/// This instance's own chain id
pub const THIS_CHAIN_ID: Item<u64> = Item::new("this_chain_id");

/// Counterpart chains this instance may swap to / redeem from.
/// Only `true` entries are stored.
pub const ALLOWED_CHAINS: Map<u64, bool> = Map::new("allowed_chains");

/// Swap ledger: transfer id (32 bytes) -> status. Entries are never removed.
pub const SWAPS: Map<&[u8], SwapStatus> = Map::new("swaps");

/// Role membership (admin, validator, ...)
pub const ROLES: RoleTable = RoleTable::new("roles", "role_counts");
