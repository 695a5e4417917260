//! Outgoing transfer handler (`InitSwap`).
//!
//! The caller's tokens are burned through the paired token contract and the
//! swap is recorded under its transfer id. The burn is dispatched as a
//! sub-message, so a failed burn reverts the ledger write as well.
//!
//! The initiator principal is the sender's canonical address, so only
//! 20-byte accounts can start a swap.

use common::{Role, TokenMsg};
use cosmwasm_std::{Binary, DepsMut, MessageInfo, Response, Uint128};

use crate::access::is_validator;
use crate::address::Principal;
use crate::error::ContractError;
use crate::hash::{bytes32_to_hex, TransferIntent};
use crate::ledger::{transition, SwapStatus};
use crate::registry::{ensure_allowed, ensure_own_chain};
use crate::signature::recover;
use crate::state::{CONFIG, STATS};

use super::{ensure_nonzero, parse_principal};

#[allow(clippy::too_many_arguments)]
pub fn execute_init_swap(
    deps: DepsMut,
    info: MessageInfo,
    chain_from: u64,
    chain_to: u64,
    recipient: String,
    amount: Uint128,
    nonce: u64,
    signature: Binary,
) -> Result<Response, ContractError> {
    ensure_own_chain(deps.storage, chain_from)?;
    ensure_allowed(deps.storage, chain_to)?;
    ensure_nonzero(amount)?;

    let initiator = Principal::from_local_addr(deps.api, &info.sender).map_err(|e| {
        ContractError::InvalidAddress {
            reason: format!("caller: {}", e),
        }
    })?;
    let recipient = parse_principal("recipient", &recipient)?;

    let intent = TransferIntent {
        chain_from,
        chain_to,
        initiator,
        recipient,
        amount,
        nonce,
    };
    let transfer_id = intent.transfer_id();

    let config = CONFIG.load(deps.storage)?;
    if config.verify_init_signature {
        let signer = recover(deps.api, &transfer_id, signature.as_slice())?;
        if !is_validator(deps.storage, &signer)? {
            return Err(ContractError::Unauthorized {
                role: Role::Validator,
            });
        }
    }

    transition(deps.storage, &transfer_id, SwapStatus::Swap)?;

    let mut stats = STATS.load(deps.storage)?;
    stats.total_swaps = stats.total_swaps.saturating_add(1);
    stats.total_swapped = stats.total_swapped.saturating_add(amount);
    STATS.save(deps.storage, &stats)?;

    let burn = TokenMsg::BurnFrom {
        owner: info.sender.to_string(),
        amount,
    }
    .into_cosmos_msg(config.token)?;

    Ok(Response::new()
        .add_message(burn)
        .add_attribute("method", "init_swap")
        .add_attribute("transfer_id", bytes32_to_hex(&transfer_id))
        .add_attribute("chain_from", chain_from.to_string())
        .add_attribute("chain_to", chain_to.to_string())
        .add_attribute("initiator", initiator.to_string())
        .add_attribute("sender", info.sender)
        .add_attribute("recipient", recipient.to_string())
        .add_attribute("amount", amount.to_string())
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("signature", format!("0x{}", hex::encode(signature.as_slice())))
        .add_attribute(
            "signature_verified",
            config.verify_init_signature.to_string(),
        ))
}
