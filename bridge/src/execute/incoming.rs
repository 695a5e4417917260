//! Incoming transfer handler (`Redeem`).
//!
//! Anyone may submit a redeem; authenticity comes from the signature, which
//! must recover to the claimed initiator and that principal must be a
//! validator on this instance. The minted tokens go to the local account
//! whose canonical bytes are the recipient principal.

use common::{Role, TokenMsg};
use cosmwasm_std::{Binary, DepsMut, MessageInfo, Response, Uint128};

use crate::access::is_validator;
use crate::error::ContractError;
use crate::hash::{bytes32_to_hex, TransferIntent};
use crate::ledger::{transition, SwapStatus};
use crate::registry::{ensure_allowed, ensure_own_chain};
use crate::signature::recover;
use crate::state::{CONFIG, STATS};

use super::{ensure_nonzero, parse_principal};

#[allow(clippy::too_many_arguments)]
pub fn execute_redeem(
    deps: DepsMut,
    info: MessageInfo,
    chain_from: u64,
    chain_to: u64,
    initiator: String,
    recipient: String,
    amount: Uint128,
    nonce: u64,
    signature: Binary,
) -> Result<Response, ContractError> {
    // Destination context: the roles of chain_from/chain_to are reversed
    // relative to InitSwap
    ensure_own_chain(deps.storage, chain_to)?;
    ensure_allowed(deps.storage, chain_from)?;
    ensure_nonzero(amount)?;

    let initiator = parse_principal("initiator", &initiator)?;
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

    let signer = recover(deps.api, &transfer_id, signature.as_slice())?;
    if signer != initiator {
        return Err(ContractError::WrongValidator {
            expected: initiator.to_string(),
            recovered: signer.to_string(),
        });
    }
    if !is_validator(deps.storage, &signer)? {
        return Err(ContractError::Unauthorized {
            role: Role::Validator,
        });
    }

    transition(deps.storage, &transfer_id, SwapStatus::Redeem)?;

    let mut stats = STATS.load(deps.storage)?;
    stats.total_redeems = stats.total_redeems.saturating_add(1);
    stats.total_redeemed = stats.total_redeemed.saturating_add(amount);
    STATS.save(deps.storage, &stats)?;

    let recipient_addr = recipient
        .to_local_addr(deps.api)
        .map_err(|e| ContractError::InvalidAddress {
            reason: format!("recipient: {}", e),
        })?;

    let config = CONFIG.load(deps.storage)?;
    let mint = TokenMsg::MintTo {
        recipient: recipient_addr.to_string(),
        amount,
    }
    .into_cosmos_msg(config.token)?;

    Ok(Response::new()
        .add_message(mint)
        .add_attribute("method", "redeem")
        .add_attribute("transfer_id", bytes32_to_hex(&transfer_id))
        .add_attribute("chain_from", chain_from.to_string())
        .add_attribute("chain_to", chain_to.to_string())
        .add_attribute("initiator", initiator.to_string())
        .add_attribute("recipient", recipient.to_string())
        .add_attribute("recipient_addr", recipient_addr)
        .add_attribute("amount", amount.to_string())
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("relayer", info.sender)
        .add_attribute("signature", format!("0x{}", hex::encode(signature.as_slice()))))
}
