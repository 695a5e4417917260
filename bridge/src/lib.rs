//! Swap Bridge Contract - Two-sided token bridge
//!
//! One instance runs on each chain, paired with a mintable/burnable token.
//!
//! # Outgoing Flow (`InitSwap`)
//! 1. User calls `InitSwap` on the source chain
//! 2. The transfer id is recorded as `Swap` and the user's tokens are burned
//! 3. A relayer picks up the event and forwards it with a validator signature
//!
//! # Incoming Flow (`Redeem`)
//! 1. Anyone submits `Redeem` on the destination chain with the signature
//! 2. The signature must recover to the initiator, who must be a validator
//! 3. The transfer id is recorded as `Redeem` and tokens are minted
//!
//! # Security
//! - Transfer ids are keccak256 of the ABI-encoded transfer fields
//! - Each id is processed at most once per instance
//! - Low-S secp256k1 signatures only
//! - Role-based access control with a last-admin guard

pub mod access;
pub mod address;
pub mod contract;
pub mod error;
mod execute;
pub mod hash;
pub mod ledger;
pub mod msg;
mod query;
pub mod registry;
pub mod signature;
pub mod state;

pub use crate::address::Principal;
pub use crate::error::ContractError;
pub use crate::hash::{compute_transfer_id, keccak256, TransferIntent};
pub use crate::ledger::SwapStatus;
