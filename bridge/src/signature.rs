//! Validator signature recovery
//!
//! Validators sign transfer ids with `eth_sign`, i.e. over the EIP-191
//! personal-message digest of the 32-byte id:
//!
//! ```text
//! keccak256("\x19Ethereum Signed Message:\n32" || transfer_id)
//! ```
//!
//! Signatures are 65 bytes `r (32) || s (32) || v (1)`. Only low-S signatures
//! are accepted so that each (digest, signer) pair has exactly one valid
//! encoding. This module recovers the signer; deciding whether the signer is
//! acceptable is up to the caller.

use cosmwasm_std::Api;
use thiserror::Error;

use crate::address::Principal;
use crate::hash::keccak256;

pub const SIGNATURE_LENGTH: usize = 65;

const ETH_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";

/// secp256k1 group order n, divided by two (big-endian)
const SECP256K1_HALF_ORDER: [u8; 32] = [
    0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0x5d, 0x57, 0x6e, 0x73, 0x57, 0xa4, 0x50, 0x1d, 0xdf, 0xe9, 0x2f, 0x46, 0x68, 0x1b, 0x20, 0xa0,
];

#[derive(Error, Debug, PartialEq)]
pub enum SignatureError {
    #[error("invalid signature length: expected 65 bytes, got {got}")]
    InvalidLength { got: usize },

    #[error("invalid recovery parameter v={v}")]
    InvalidRecoveryParam { v: u8 },

    #[error("signature r or s is zero")]
    ZeroScalar,

    #[error("signature s value is not normalized (high-S)")]
    NonCanonicalS,

    #[error("public key recovery failed: {reason}")]
    RecoveryFailed { reason: String },
}

/// Digest that `eth_sign` actually signs for a 32-byte message
pub fn eth_signed_message_hash(message: &[u8; 32]) -> [u8; 32] {
    let mut data = [0u8; 60];
    data[..28].copy_from_slice(ETH_MESSAGE_PREFIX);
    data[28..].copy_from_slice(message);
    keccak256(&data)
}

/// Validate the shape of a signature and split it into `(r || s, recovery_param)`
pub fn split_signature(signature: &[u8]) -> Result<(&[u8], u8), SignatureError> {
    if signature.len() != SIGNATURE_LENGTH {
        return Err(SignatureError::InvalidLength {
            got: signature.len(),
        });
    }

    let (rs, v) = signature.split_at(64);
    let recovery_param = match v[0] {
        0 | 1 => v[0],
        27 | 28 => v[0] - 27,
        other => return Err(SignatureError::InvalidRecoveryParam { v: other }),
    };

    let (r, s) = rs.split_at(32);
    if r.iter().all(|b| *b == 0) || s.iter().all(|b| *b == 0) {
        return Err(SignatureError::ZeroScalar);
    }
    // Big-endian byte slices of equal length compare numerically
    if s > &SECP256K1_HALF_ORDER[..] {
        return Err(SignatureError::NonCanonicalS);
    }

    Ok((rs, recovery_param))
}

/// Derive the account address from a 65-byte uncompressed public key
pub fn principal_from_pubkey(pubkey: &[u8]) -> Result<Principal, SignatureError> {
    if pubkey.len() != 65 || pubkey[0] != 0x04 {
        return Err(SignatureError::RecoveryFailed {
            reason: format!("unexpected public key encoding ({} bytes)", pubkey.len()),
        });
    }

    let hash = keccak256(&pubkey[1..]);
    let mut raw = [0u8; 20];
    raw.copy_from_slice(&hash[12..]);
    Ok(Principal::new(raw))
}

/// Recover the principal that signed `transfer_id`
pub fn recover(
    api: &dyn Api,
    transfer_id: &[u8; 32],
    signature: &[u8],
) -> Result<Principal, SignatureError> {
    let (rs, recovery_param) = split_signature(signature)?;
    let digest = eth_signed_message_hash(transfer_id);

    let pubkey = api
        .secp256k1_recover_pubkey(&digest, rs, recovery_param)
        .map_err(|e| SignatureError::RecoveryFailed {
            reason: e.to_string(),
        })?;

    principal_from_pubkey(&pubkey)
}
