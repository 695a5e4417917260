//! Message types for the swap bridge contract

use common::{HasRoleResponse, Role, RoleMembersResponse};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

use crate::ledger::SwapStatus;

// ============================================================================
// Instantiate & Migrate
// ============================================================================

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    /// Initial admin (defaults to the instantiating address)
    pub admin: Option<String>,
    /// Paired token contract
    pub token: String,
    /// This instance's own chain id (non-zero)
    pub chain_id: u64,
    /// Counterpart chains allowed from the start
    #[serde(default)]
    pub allowed_chains: Vec<u64>,
    /// Initial validator principals (0x-prefixed 20-byte addresses)
    #[serde(default)]
    pub validators: Vec<String>,
    /// Recover and check the signature passed to `InitSwap`
    #[serde(default)]
    pub verify_init_signature: bool,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Transfers
    // ========================================================================
    /// Burn `amount` from the caller and record the swap for relaying.
    ///
    /// Authorization: Anyone (the caller becomes the transfer initiator)
    InitSwap {
        /// Must equal this instance's chain id
        chain_from: u64,
        /// Destination chain (must be allowed)
        chain_to: u64,
        /// Recipient principal on the destination chain
        recipient: String,
        amount: Uint128,
        nonce: u64,
        /// 65-byte validator signature over the transfer id
        signature: Binary,
    },

    /// Mint `amount` to `recipient` for a transfer initiated elsewhere.
    ///
    /// Authorization: Anyone holding a valid validator signature
    Redeem {
        /// Source chain (must be allowed)
        chain_from: u64,
        /// Must equal this instance's chain id
        chain_to: u64,
        /// Principal that initiated and signed the transfer
        initiator: String,
        recipient: String,
        amount: Uint128,
        nonce: u64,
        signature: Binary,
    },

    // ========================================================================
    // Chain Registry
    // ========================================================================
    /// Allow or deny a counterpart chain
    ///
    /// Authorization: Admin only
    SetChainId { chain_id: u64, allowed: bool },

    /// Replace this instance's own chain id
    ///
    /// Authorization: Admin only
    UpdateChainId { chain_id: u64 },

    // ========================================================================
    // Configuration
    // ========================================================================
    /// Point the bridge at a different token contract
    ///
    /// Authorization: Admin only
    UpdateTokenAddress { token: String },

    /// Toggle signature verification on `InitSwap`
    ///
    /// Authorization: Admin only
    SetInitSignatureCheck { enabled: bool },

    // ========================================================================
    // Access Control
    // ========================================================================
    /// Authorization: Admin only
    GrantRole { role: Role, address: String },

    /// Authorization: Admin only
    RevokeRole { role: Role, address: String },

    /// Drop one of the caller's own roles
    RenounceRole { role: Role },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(ThisChainIdResponse)]
    ThisChainId {},

    #[returns(ChainAllowedResponse)]
    IsChainAllowed { chain_id: u64 },

    #[returns(AllowedChainsResponse)]
    AllowedChains {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    #[returns(HasRoleResponse)]
    HasRole { role: Role, address: String },

    #[returns(RoleMembersResponse)]
    RoleMembers {
        role: Role,
        start_after: Option<String>,
        limit: Option<u32>,
    },

    /// Status of a transfer id on this instance
    #[returns(SwapStatusResponse)]
    SwapStatus { transfer_id: Binary },

    /// Compute a transfer id exactly as `InitSwap`/`Redeem` would
    #[returns(TransferIdResponse)]
    ComputeTransferId {
        chain_from: u64,
        chain_to: u64,
        initiator: String,
        recipient: String,
        amount: Uint128,
        nonce: u64,
    },

    #[returns(StatsResponse)]
    Stats {},
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub token: Addr,
    pub chain_id: u64,
    pub verify_init_signature: bool,
}

#[cw_serde]
pub struct ThisChainIdResponse {
    pub chain_id: u64,
}

#[cw_serde]
pub struct ChainAllowedResponse {
    pub chain_id: u64,
    pub allowed: bool,
}

#[cw_serde]
pub struct AllowedChainsResponse {
    pub chains: Vec<u64>,
}

#[cw_serde]
pub struct SwapStatusResponse {
    pub transfer_id: Binary,
    pub status: SwapStatus,
}

#[cw_serde]
pub struct TransferIdResponse {
    pub transfer_id: Binary,
    /// 0x-prefixed hex, as emitted in event attributes
    pub transfer_id_hex: String,
}

#[cw_serde]
pub struct StatsResponse {
    pub total_swaps: u64,
    pub total_redeems: u64,
    pub total_swapped: Uint128,
    pub total_redeemed: Uint128,
}
