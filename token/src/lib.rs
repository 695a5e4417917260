//! Bridge Token - role-gated fungible token paired with a swap bridge
//!
//! The bridge holds `minter` and `burner` on its paired token: `Redeem` mints
//! through `MintTo` and `InitSwap` burns through `BurnFrom`. Holders can move
//! balances with `Transfer`. Balance and token info queries return the cw20
//! response types so existing wallets and indexers can read them.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
