use common::{HasRoleResponse, Role, RoleMembersResponse};
use cosmwasm_std::{
    entry_point, to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Response,
    StdResult, Storage, Uint128,
};
use cw2::set_contract_version;
use cw20::{BalanceResponse, TokenInfoResponse};

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::state::{TokenInfo, BALANCES, CONTRACT_NAME, CONTRACT_VERSION, ROLES, TOKEN_INFO};

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

    let mut total_supply = Uint128::zero();
    for coin in &msg.initial_balances {
        let holder = deps.api.addr_validate(&coin.address)?;
        credit(deps.storage, &holder, coin.amount)?;
        total_supply = total_supply.checked_add(coin.amount)?;
    }

    TOKEN_INFO.save(
        deps.storage,
        &TokenInfo {
            name: msg.name,
            symbol: msg.symbol.clone(),
            decimals: msg.decimals,
            total_supply,
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", admin)
        .add_attribute("symbol", msg.symbol)
        .add_attribute("total_supply", total_supply))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::MintTo { recipient, amount } => execute_mint_to(deps, info, recipient, amount),
        ExecuteMsg::BurnFrom { owner, amount } => execute_burn_from(deps, info, owner, amount),
        ExecuteMsg::Transfer { recipient, amount } => {
            execute_transfer(deps, info, recipient, amount)
        }
        ExecuteMsg::GrantRole { role, address } => execute_grant_role(deps, info, role, address),
        ExecuteMsg::RevokeRole { role, address } => {
            execute_revoke_role(deps, info, role, address)
        }
        ExecuteMsg::RenounceRole { role } => execute_renounce_role(deps, info, role),
    }
}

fn execute_mint_to(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ROLES.ensure(deps.storage, Role::Minter, &info.sender)?;
    if amount.is_zero() {
        return Err(ContractError::InvalidZeroAmount);
    }

    let recipient = deps.api.addr_validate(&recipient)?;
    credit(deps.storage, &recipient, amount)?;

    let mut token_info = TOKEN_INFO.load(deps.storage)?;
    token_info.total_supply = token_info.total_supply.checked_add(amount)?;
    TOKEN_INFO.save(deps.storage, &token_info)?;

    Ok(Response::new()
        .add_attribute("action", "mint_to")
        .add_attribute("minter", info.sender)
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount))
}

fn execute_burn_from(
    deps: DepsMut,
    info: MessageInfo,
    owner: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ROLES.ensure(deps.storage, Role::Burner, &info.sender)?;
    if amount.is_zero() {
        return Err(ContractError::InvalidZeroAmount);
    }

    let owner = deps.api.addr_validate(&owner)?;
    debit(deps.storage, &owner, amount)?;

    let mut token_info = TOKEN_INFO.load(deps.storage)?;
    token_info.total_supply = token_info.total_supply.checked_sub(amount)?;
    TOKEN_INFO.save(deps.storage, &token_info)?;

    Ok(Response::new()
        .add_attribute("action", "burn_from")
        .add_attribute("burner", info.sender)
        .add_attribute("owner", owner)
        .add_attribute("amount", amount))
}

fn execute_transfer(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    if amount.is_zero() {
        return Err(ContractError::InvalidZeroAmount);
    }

    let recipient = deps.api.addr_validate(&recipient)?;
    debit(deps.storage, &info.sender, amount)?;
    credit(deps.storage, &recipient, amount)?;

    Ok(Response::new()
        .add_attribute("action", "transfer")
        .add_attribute("from", info.sender)
        .add_attribute("to", recipient)
        .add_attribute("amount", amount))
}

fn execute_grant_role(
    deps: DepsMut,
    info: MessageInfo,
    role: Role,
    address: String,
) -> Result<Response, ContractError> {
    let member = deps.api.addr_validate(&address)?;
    let changed = ROLES.grant(deps.storage, &info.sender, role, &member)?;

    Ok(Response::new()
        .add_attribute("action", "grant_role")
        .add_attribute("role", role.as_str())
        .add_attribute("address", member)
        .add_attribute("changed", changed.to_string()))
}

fn execute_revoke_role(
    deps: DepsMut,
    info: MessageInfo,
    role: Role,
    address: String,
) -> Result<Response, ContractError> {
    let member = deps.api.addr_validate(&address)?;
    let changed = ROLES.revoke(deps.storage, &info.sender, role, &member)?;

    Ok(Response::new()
        .add_attribute("action", "revoke_role")
        .add_attribute("role", role.as_str())
        .add_attribute("address", member)
        .add_attribute("changed", changed.to_string()))
}

fn execute_renounce_role(
    deps: DepsMut,
    info: MessageInfo,
    role: Role,
) -> Result<Response, ContractError> {
    let changed = ROLES.renounce(deps.storage, &info.sender, role)?;

    Ok(Response::new()
        .add_attribute("action", "renounce_role")
        .add_attribute("role", role.as_str())
        .add_attribute("address", info.sender)
        .add_attribute("changed", changed.to_string()))
}

fn credit(storage: &mut dyn Storage, holder: &Addr, amount: Uint128) -> Result<(), ContractError> {
    let balance = BALANCES.may_load(storage, holder)?.unwrap_or_default();
    BALANCES.save(storage, holder, &balance.checked_add(amount)?)?;
    Ok(())
}

fn debit(storage: &mut dyn Storage, holder: &Addr, amount: Uint128) -> Result<(), ContractError> {
    let available = BALANCES.may_load(storage, holder)?.unwrap_or_default();
    if available < amount {
        return Err(ContractError::InsufficientFunds {
            available,
            requested: amount,
        });
    }

    let remaining = available - amount;
    if remaining.is_zero() {
        BALANCES.remove(storage, holder);
    } else {
        BALANCES.save(storage, holder, &remaining)?;
    }
    Ok(())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Balance { address } => to_json_binary(&query_balance(deps, address)?),
        QueryMsg::TokenInfo {} => to_json_binary(&query_token_info(deps)?),
        QueryMsg::HasRole { role, address } => to_json_binary(&query_has_role(deps, role, address)?),
        QueryMsg::RoleMembers {
            role,
            start_after,
            limit,
        } => to_json_binary(&query_role_members(deps, role, start_after, limit)?),
    }
}

fn query_balance(deps: Deps, address: String) -> StdResult<BalanceResponse> {
    let address = deps.api.addr_validate(&address)?;
    let balance = BALANCES
        .may_load(deps.storage, &address)?
        .unwrap_or_default();
    Ok(BalanceResponse { balance })
}

fn query_token_info(deps: Deps) -> StdResult<TokenInfoResponse> {
    let info = TOKEN_INFO.load(deps.storage)?;
    Ok(TokenInfoResponse {
        name: info.name,
        symbol: info.symbol,
        decimals: info.decimals,
        total_supply: info.total_supply,
    })
}

fn query_has_role(deps: Deps, role: Role, address: String) -> StdResult<HasRoleResponse> {
    let address = deps.api.addr_validate(&address)?;
    let has_role = ROLES.has_role(deps.storage, role, &address)?;
    Ok(HasRoleResponse {
        role,
        address,
        has_role,
    })
}

fn query_role_members(
    deps: Deps,
    role: Role,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<RoleMembersResponse> {
    let start = start_after
        .map(|s| deps.api.addr_validate(&s))
        .transpose()?;
    let members = ROLES.members(deps.storage, role, start, limit)?;
    Ok(RoleMembersResponse { role, members })
}
