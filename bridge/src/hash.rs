//! Transfer identity hashing
//!
//! A transfer is identified by the keccak256 of its six defining fields,
//! ABI-encoded in a fixed order. Relayers compute the same identifier off-chain,
//! so the layout below must be preserved byte for byte.
//!
//! # Reference
//! ```solidity
//! keccak256(abi.encode(
//!     uint256 chainFrom,
//!     uint256 chainTo,
//!     address initiator,
//!     address recipient,
//!     uint256 amount,
//!     uint256 nonce
//! ))
//! ```
//!
//! # Byte Layout (192 bytes total)
//! - Bytes 0-31:    chainFrom (uint256, big-endian, left-padded)
//! - Bytes 32-63:   chainTo (uint256, big-endian, left-padded)
//! - Bytes 64-95:   initiator (address, 12 zero bytes + 20 address bytes)
//! - Bytes 96-127:  recipient (address, 12 zero bytes + 20 address bytes)
//! - Bytes 128-159: amount (uint256, big-endian, left-padded)
//! - Bytes 160-191: nonce (uint256, big-endian, left-padded)

use cosmwasm_std::Uint128;
use tiny_keccak::{Hasher, Keccak};

use crate::address::Principal;

/// Size of the encoded transfer intent
pub const ENCODED_INTENT_LEN: usize = 192;

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// The fields that define one transfer. Never stored; only hashed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferIntent {
    pub chain_from: u64,
    pub chain_to: u64,
    pub initiator: Principal,
    pub recipient: Principal,
    pub amount: Uint128,
    pub nonce: u64,
}

impl TransferIntent {
    /// ABI-encode the intent (see module docs for the layout)
    pub fn encode(&self) -> [u8; ENCODED_INTENT_LEN] {
        let mut data = [0u8; ENCODED_INTENT_LEN];

        // u64 (8 bytes) goes into bytes 24-31 of its slot
        data[24..32].copy_from_slice(&self.chain_from.to_be_bytes());
        data[32 + 24..64].copy_from_slice(&self.chain_to.to_be_bytes());

        data[64..96].copy_from_slice(&self.initiator.to_bytes32());
        data[96..128].copy_from_slice(&self.recipient.to_bytes32());

        // u128 (16 bytes) goes into bytes 16-31 of its slot
        data[128 + 16..160].copy_from_slice(&self.amount.u128().to_be_bytes());
        data[160 + 24..192].copy_from_slice(&self.nonce.to_be_bytes());

        data
    }

    pub fn transfer_id(&self) -> [u8; 32] {
        keccak256(&self.encode())
    }
}

/// Compute the transfer id from its individual fields
pub fn compute_transfer_id(
    chain_from: u64,
    chain_to: u64,
    initiator: &Principal,
    recipient: &Principal,
    amount: Uint128,
    nonce: u64,
) -> [u8; 32] {
    TransferIntent {
        chain_from,
        chain_to,
        initiator: *initiator,
        recipient: *recipient,
        amount,
        nonce,
    }
    .transfer_id()
}

/// Convert 32-byte hash to hex string (for attributes/logging)
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}
