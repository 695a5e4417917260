use common::RoleTable;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:bridge-token";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cw_serde]
pub struct TokenInfo {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: Uint128,
}

pub const TOKEN_INFO: Item<TokenInfo> = Item::new("token_info");

/// holder => balance (zero balances are removed)
pub const BALANCES: Map<&Addr, Uint128> = Map::new("balances");

/// admin, minter and burner membership
pub const ROLES: RoleTable = RoleTable::new("roles", "role_counts");
