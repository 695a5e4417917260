use common::{HasRoleResponse, Role, RoleMembersResponse};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;
use cw20::{BalanceResponse, Cw20Coin, TokenInfoResponse};

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    /// Initial admin (defaults to the instantiating address)
    pub admin: Option<String>,
    #[serde(default)]
    pub initial_balances: Vec<Cw20Coin>,
}

/// `MintTo` and `BurnFrom` share their JSON shape with `common::TokenMsg`,
/// which is what the bridge sends.
#[cw_serde]
pub enum ExecuteMsg {
    /// Minter only
    MintTo { recipient: String, amount: Uint128 },
    /// Burner only; burns from `owner` without an allowance
    BurnFrom { owner: String, amount: Uint128 },
    /// Move tokens from the caller to `recipient`
    Transfer { recipient: String, amount: Uint128 },
    /// Admin only
    GrantRole { role: Role, address: String },
    /// Admin only
    RevokeRole { role: Role, address: String },
    RenounceRole { role: Role },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(BalanceResponse)]
    Balance { address: String },
    #[returns(TokenInfoResponse)]
    TokenInfo {},
    #[returns(HasRoleResponse)]
    HasRole { role: Role, address: String },
    #[returns(RoleMembersResponse)]
    RoleMembers {
        role: Role,
        start_after: Option<String>,
        limit: Option<u32>,
    },
}
