//! Token messages dispatched by the bridge.
//!
//! The paired token contract accepts these variants as part of its own
//! `ExecuteMsg`, so the JSON shape must stay identical on both sides.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_json_binary, CosmosMsg, StdResult, Uint128, WasmMsg};

#[cw_serde]
pub enum TokenMsg {
    /// Mint `amount` to `recipient` (caller must hold `Minter` on the token)
    MintTo { recipient: String, amount: Uint128 },
    /// Burn `amount` from `owner` (caller must hold `Burner` on the token)
    BurnFrom { owner: String, amount: Uint128 },
}

impl TokenMsg {
    /// Wrap into a `WasmMsg::Execute` against `token`
    pub fn into_cosmos_msg(self, token: impl Into<String>) -> StdResult<CosmosMsg> {
        Ok(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: token.into(),
            msg: to_json_binary(&self)?,
            funds: vec![],
        }))
    }
}
