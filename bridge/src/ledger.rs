//! Swap ledger
//!
//! Permanent record of every transfer id this instance has processed. A record
//! leaves `Empty` at most once; the check and the write happen in a single
//! `Map::update` inside the executing transaction, so a replayed or
//! concurrently submitted transfer always observes the first write.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{StdError, Storage};
use thiserror::Error;

use crate::hash::bytes32_to_hex;
use crate::state::SWAPS;

#[cw_serde]
#[derive(Copy, Eq)]
pub enum SwapStatus {
    /// Never seen
    Empty,
    /// Locked/burned on this (source) chain
    Swap,
    /// Released/minted on this (destination) chain
    Redeem,
}

#[derive(Error, Debug, PartialEq)]
pub enum LedgerError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Transfer {transfer_id} is already {status:?}")]
    NotEmpty {
        transfer_id: String,
        status: SwapStatus,
    },

    #[error("Cannot transition a transfer back to Empty")]
    InvalidTarget,
}

pub fn status_of(storage: &dyn Storage, transfer_id: &[u8; 32]) -> Result<SwapStatus, StdError> {
    Ok(SWAPS
        .may_load(storage, transfer_id)?
        .unwrap_or(SwapStatus::Empty))
}

/// Move `transfer_id` from `Empty` to `target`.
pub fn transition(
    storage: &mut dyn Storage,
    transfer_id: &[u8; 32],
    target: SwapStatus,
) -> Result<(), LedgerError> {
    if target == SwapStatus::Empty {
        return Err(LedgerError::InvalidTarget);
    }

    SWAPS.update(storage, transfer_id, |existing| match existing {
        None | Some(SwapStatus::Empty) => Ok(target),
        Some(status) => Err(LedgerError::NotEmpty {
            transfer_id: bytes32_to_hex(transfer_id),
            status,
        }),
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::MockStorage;

    #[test]
    fn test_transition_once() {
        let mut storage = MockStorage::new();
        let id = [7u8; 32];

        assert_eq!(status_of(&storage, &id).unwrap(), SwapStatus::Empty);
        transition(&mut storage, &id, SwapStatus::Swap).unwrap();
        assert_eq!(status_of(&storage, &id).unwrap(), SwapStatus::Swap);

        let err = transition(&mut storage, &id, SwapStatus::Redeem).unwrap_err();
        assert_eq!(
            err,
            LedgerError::NotEmpty {
                transfer_id: bytes32_to_hex(&id),
                status: SwapStatus::Swap,
            }
        );
        // Failed transition leaves the record alone
        assert_eq!(status_of(&storage, &id).unwrap(), SwapStatus::Swap);
    }

    #[test]
    fn test_ids_are_independent() {
        let mut storage = MockStorage::new();
        transition(&mut storage, &[1u8; 32], SwapStatus::Redeem).unwrap();
        transition(&mut storage, &[2u8; 32], SwapStatus::Swap).unwrap();
        assert_eq!(status_of(&storage, &[1u8; 32]).unwrap(), SwapStatus::Redeem);
        assert_eq!(status_of(&storage, &[2u8; 32]).unwrap(), SwapStatus::Swap);
        assert_eq!(status_of(&storage, &[3u8; 32]).unwrap(), SwapStatus::Empty);
    }

    #[test]
    fn test_empty_target_rejected() {
        let mut storage = MockStorage::new();
        assert_eq!(
            transition(&mut storage, &[1u8; 32], SwapStatus::Empty).unwrap_err(),
            LedgerError::InvalidTarget
        );
    }
}
