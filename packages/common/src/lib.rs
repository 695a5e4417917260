//! Common - Shared Types and Utilities for the Swap Bridge Contracts
//!
//! This package provides the role tags and role table used by both the bridge
//! and its paired token, and the token messages the bridge dispatches.

pub mod access;
pub mod role;
pub mod token;

pub use access::{AccessError, HasRoleResponse, RoleMembersResponse, RoleTable};
pub use role::Role;
pub use token::TokenMsg;
