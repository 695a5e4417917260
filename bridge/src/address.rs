//! Principal addresses
//!
//! Every party to a transfer (initiator, recipient, validator) is a 20-byte
//! Ethereum-style address. This is the address space produced by secp256k1
//! key recovery and the one encoded into the transfer id as `address`.
//!
//! ## Text form
//!
//! `0x` followed by 40 hex characters. Input is case-insensitive; the
//! canonical form (used as the on-chain `Addr` key) is lowercase.
//!
//! ## Local accounts
//!
//! On this chain the same 20 bytes are the canonical form of a local
//! account. `from_canonical` and `to_local_addr` move between the two, so a
//! bech32 sender burns as its principal and a redeemed principal is minted
//! to its bech32 account.

use std::fmt;

use cosmwasm_std::{Addr, Api, CanonicalAddr, StdError, StdResult};

/// 20-byte account address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Principal([u8; 20]);

impl Principal {
    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Parse a `0x`-prefixed (or bare) 40 hex character address
    pub fn parse(addr: &str) -> StdResult<Self> {
        let hex_str = addr
            .strip_prefix("0x")
            .or_else(|| addr.strip_prefix("0X"))
            .unwrap_or(addr);

        if hex_str.len() != 40 {
            return Err(StdError::generic_err(format!(
                "Invalid address length: expected 40 hex chars, got {}",
                hex_str.len()
            )));
        }

        let bytes =
            hex::decode(hex_str).map_err(|e| StdError::generic_err(format!("Invalid hex: {}", e)))?;

        let mut raw = [0u8; 20];
        raw.copy_from_slice(&bytes);
        Ok(Self(raw))
    }

    /// Principal behind a canonical local address; only 20-byte accounts qualify
    pub fn from_canonical(canonical: &CanonicalAddr) -> StdResult<Self> {
        let bytes = canonical.as_slice();
        if bytes.len() != 20 {
            return Err(StdError::generic_err(format!(
                "Invalid address length: expected 20 bytes, got {}",
                bytes.len()
            )));
        }
        let mut raw = [0u8; 20];
        raw.copy_from_slice(bytes);
        Ok(Self(raw))
    }

    /// Principal of a local account (the inverse of `to_local_addr`)
    pub fn from_local_addr(api: &dyn Api, addr: &Addr) -> StdResult<Self> {
        Self::from_canonical(&api.addr_canonicalize(addr.as_str())?)
    }

    /// Local account holding this principal's bytes
    pub fn to_local_addr(&self, api: &dyn Api) -> StdResult<Addr> {
        api.addr_humanize(&CanonicalAddr::from(self.0.to_vec()))
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// ABI `address` slot: 12 zero bytes followed by the 20 address bytes
    pub fn to_bytes32(&self) -> [u8; 32] {
        let mut result = [0u8; 32];
        result[12..].copy_from_slice(&self.0);
        result
    }

    /// Role table key (lowercase hex)
    pub fn to_addr(&self) -> Addr {
        Addr::unchecked(self.to_string())
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}
