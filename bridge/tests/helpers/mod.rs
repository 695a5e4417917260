//! Shared setup for the swap bridge integration tests.
//!
//! Deploys a bridge + token pair per chain inside one `App` and signs transfer
//! ids with real secp256k1 keys. The app uses bech32 addresses, so principals
//! map to real local accounts the way they do on chain.

#![allow(dead_code)]

use bridge_token::msg as token_msg;
use common::Role;
use cosmwasm_std::{Addr, Binary, Empty, Uint128};
use cw20::{BalanceResponse, Cw20Coin};
use cw_multi_test::{
    no_init, App, AppBuilder, AppResponse, BankKeeper, Contract, ContractWrapper, Executor,
    MockAddressGenerator, MockApiBech32, WasmKeeper,
};
use k256::ecdsa::SigningKey;
use k256::elliptic_curve::sec1::ToEncodedPoint;

use swap_bridge::msg::{InstantiateMsg, QueryMsg, SwapStatusResponse};
use swap_bridge::signature::{eth_signed_message_hash, principal_from_pubkey};
use swap_bridge::{compute_transfer_id, Principal, SwapStatus};

pub const PREFIX: &str = "terra";

pub const ADMIN: &str = "admin";
pub const RELAYER: &str = "relayer";
pub const RECIPIENT: &str = "0x2222222222222222222222222222222222222222";

pub const CHAIN_A: u64 = 4;
pub const CHAIN_B: u64 = 97;

pub type BridgeApp = App<BankKeeper, MockApiBech32>;

pub fn mock_app() -> BridgeApp {
    AppBuilder::new()
        .with_api(MockApiBech32::new(PREFIX))
        .with_wasm(WasmKeeper::<Empty, Empty>::new().with_address_generator(MockAddressGenerator))
        .build(no_init)
}

/// Bech32 account derived from a name (32 bytes, so never a principal)
pub fn account(name: &str) -> Addr {
    MockApiBech32::new(PREFIX).addr_make(name)
}

/// Local account whose canonical bytes are the given principal
pub fn local(principal: &str) -> Addr {
    Principal::parse(principal)
        .unwrap()
        .to_local_addr(&MockApiBech32::new(PREFIX))
        .unwrap()
}

// ============================================================================
// Contracts
// ============================================================================

pub fn contract_bridge() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        swap_bridge::contract::execute,
        swap_bridge::contract::instantiate,
        swap_bridge::contract::query,
    );
    Box::new(contract)
}

pub fn contract_token() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        bridge_token::contract::execute,
        bridge_token::contract::instantiate,
        bridge_token::contract::query,
    );
    Box::new(contract)
}

// ============================================================================
// Signers
// ============================================================================

/// A secp256k1 key and the principal it signs as
pub struct Signer {
    pub key: SigningKey,
    pub address: String,
}

impl Signer {
    pub fn new(seed: u8) -> Self {
        let key = SigningKey::from_slice(&[seed; 32]).unwrap();
        let pubkey = k256::PublicKey::from(key.verifying_key());
        let address = principal_from_pubkey(pubkey.to_encoded_point(false).as_bytes())
            .unwrap()
            .to_string();
        Self { key, address }
    }

    /// The signer's local account, which burns and receives as its principal
    pub fn addr(&self) -> Addr {
        local(&self.address)
    }

    /// `eth_sign`-style signature over a transfer id, `v` in {27, 28}
    pub fn sign(&self, transfer_id: &[u8; 32]) -> Binary {
        let digest = eth_signed_message_hash(transfer_id);
        let (sig, recid) = self.key.sign_prehash_recoverable(&digest).unwrap();
        let mut out = sig.to_bytes().to_vec();
        out.push(27 + recid.to_byte());
        Binary::from(out)
    }
}

pub fn transfer_id(
    chain_from: u64,
    chain_to: u64,
    initiator: &str,
    recipient: &str,
    amount: u128,
    nonce: u64,
) -> [u8; 32] {
    compute_transfer_id(
        chain_from,
        chain_to,
        &Principal::parse(initiator).unwrap(),
        &Principal::parse(recipient).unwrap(),
        Uint128::new(amount),
        nonce,
    )
}

// ============================================================================
// Deployment
// ============================================================================

/// One chain's bridge instance and its paired token
pub struct Side {
    pub bridge: Addr,
    pub token: Addr,
}

pub fn deploy(
    app: &mut BridgeApp,
    chain_id: u64,
    allowed_chains: Vec<u64>,
    validators: Vec<String>,
    initial_balances: Vec<Cw20Coin>,
) -> Side {
    let admin = account(ADMIN);
    let token_code = app.store_code(contract_token());
    let bridge_code = app.store_code(contract_bridge());

    let token = app
        .instantiate_contract(
            token_code,
            admin.clone(),
            &token_msg::InstantiateMsg {
                name: "Bridge Token".to_string(),
                symbol: "BRG".to_string(),
                decimals: 18,
                admin: None,
                initial_balances,
            },
            &[],
            "bridge-token",
            Some(admin.to_string()),
        )
        .unwrap();

    let bridge = app
        .instantiate_contract(
            bridge_code,
            admin.clone(),
            &InstantiateMsg {
                admin: None,
                token: token.to_string(),
                chain_id,
                allowed_chains,
                validators,
                verify_init_signature: false,
            },
            &[],
            "swap-bridge",
            Some(admin.to_string()),
        )
        .unwrap();

    for role in [Role::Minter, Role::Burner] {
        app.execute_contract(
            admin.clone(),
            token.clone(),
            &token_msg::ExecuteMsg::GrantRole {
                role,
                address: bridge.to_string(),
            },
            &[],
        )
        .unwrap();
    }

    Side { bridge, token }
}

// ============================================================================
// Queries
// ============================================================================

/// Balance of the local account behind a principal
pub fn token_balance(app: &BridgeApp, side: &Side, principal: &str) -> Uint128 {
    let res: BalanceResponse = app
        .wrap()
        .query_wasm_smart(
            &side.token,
            &token_msg::QueryMsg::Balance {
                address: local(principal).to_string(),
            },
        )
        .unwrap();
    res.balance
}

pub fn swap_status(app: &BridgeApp, side: &Side, transfer_id: &[u8; 32]) -> SwapStatus {
    let res: SwapStatusResponse = app
        .wrap()
        .query_wasm_smart(
            &side.bridge,
            &QueryMsg::SwapStatus {
                transfer_id: Binary::from(transfer_id.to_vec()),
            },
        )
        .unwrap();
    res.status
}

/// First attribute named `key` across all events
pub fn attr(res: &AppResponse, key: &str) -> Option<String> {
    res.events
        .iter()
        .flat_map(|e| &e.attributes)
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
}
