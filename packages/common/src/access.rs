//! Storage-backed role table.
//!
//! Each contract declares its own `RoleTable` constant; tables are never shared
//! between instances. Membership is keyed by `(role tag, address)` and a
//! per-role member count guards against removing the last admin.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Order, StdError, StdResult, Storage};
use cw_storage_plus::{Bound, Map};
use thiserror::Error;

use crate::role::Role;

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 50;

#[derive(Error, Debug, PartialEq)]
pub enum AccessError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: caller lacks the {role} role")]
    Unauthorized { role: Role },

    #[error("Cannot remove the last admin")]
    CannotRemoveLastAdmin,
}

#[cw_serde]
pub struct HasRoleResponse {
    pub role: Role,
    pub address: Addr,
    pub has_role: bool,
}

#[cw_serde]
pub struct RoleMembersResponse {
    pub role: Role,
    pub members: Vec<Addr>,
}

pub struct RoleTable {
    members: Map<'static, (&'static str, Addr), bool>,
    counts: Map<'static, &'static str, u32>,
}

impl RoleTable {
    pub const fn new(members_namespace: &'static str, counts_namespace: &'static str) -> Self {
        Self {
            members: Map::new(members_namespace),
            counts: Map::new(counts_namespace),
        }
    }

    pub fn has_role(&self, storage: &dyn Storage, role: Role, who: &Addr) -> StdResult<bool> {
        Ok(self
            .members
            .may_load(storage, (role.as_str(), who.clone()))?
            .unwrap_or(false))
    }

    pub fn member_count(&self, storage: &dyn Storage, role: Role) -> StdResult<u32> {
        Ok(self.counts.may_load(storage, role.as_str())?.unwrap_or(0))
    }

    /// Fails with `Unauthorized` unless `who` holds `role`.
    pub fn ensure(&self, storage: &dyn Storage, role: Role, who: &Addr) -> Result<(), AccessError> {
        if !self.has_role(storage, role, who)? {
            return Err(AccessError::Unauthorized { role });
        }
        Ok(())
    }

    /// Unchecked grant, used at instantiation before any admin exists.
    ///
    /// Returns `true` if membership changed.
    pub fn bootstrap(&self, storage: &mut dyn Storage, role: Role, who: &Addr) -> StdResult<bool> {
        if self.has_role(storage, role, who)? {
            return Ok(false);
        }
        self.members
            .save(storage, (role.as_str(), who.clone()), &true)?;
        let count = self.member_count(storage, role)?;
        self.counts.save(storage, role.as_str(), &(count + 1))?;
        Ok(true)
    }

    /// Admin-gated grant. Granting an existing membership is a no-op success.
    pub fn grant(
        &self,
        storage: &mut dyn Storage,
        sender: &Addr,
        role: Role,
        who: &Addr,
    ) -> Result<bool, AccessError> {
        self.ensure(storage, Role::Admin, sender)?;
        Ok(self.bootstrap(storage, role, who)?)
    }

    /// Admin-gated revoke. Revoking a missing membership is a no-op success.
    pub fn revoke(
        &self,
        storage: &mut dyn Storage,
        sender: &Addr,
        role: Role,
        who: &Addr,
    ) -> Result<bool, AccessError> {
        self.ensure(storage, Role::Admin, sender)?;
        self.remove(storage, role, who)
    }

    /// Drop one of the caller's own roles.
    pub fn renounce(
        &self,
        storage: &mut dyn Storage,
        sender: &Addr,
        role: Role,
    ) -> Result<bool, AccessError> {
        self.remove(storage, role, sender)
    }

    pub fn members(
        &self,
        storage: &dyn Storage,
        role: Role,
        start_after: Option<Addr>,
        limit: Option<u32>,
    ) -> StdResult<Vec<Addr>> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
        let start = start_after.map(Bound::exclusive);

        self.members
            .prefix(role.as_str())
            .keys(storage, start, None, Order::Ascending)
            .take(limit)
            .collect()
    }

    fn remove(&self, storage: &mut dyn Storage, role: Role, who: &Addr) -> Result<bool, AccessError> {
        if !self.has_role(storage, role, who)? {
            return Ok(false);
        }

        let count = self.member_count(storage, role)?;
        if role == Role::Admin && count <= 1 {
            return Err(AccessError::CannotRemoveLastAdmin);
        }

        self.members.remove(storage, (role.as_str(), who.clone()));
        self.counts
            .save(storage, role.as_str(), &count.saturating_sub(1))?;
        Ok(true)
    }
}
