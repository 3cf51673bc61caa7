//! Role-based access control for CosmWasm contracts.
//!
//! Roles are plain names. Holders of [`DEFAULT_ADMIN_ROLE`] may grant and
//! revoke every role; any holder may renounce its own roles.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Empty, Order, StdError, StdResult, Storage};
use cw_storage_plus::{Bound, Map};
use thiserror::Error;

pub const DEFAULT_ADMIN_ROLE: &str = "default_admin";
pub const MINTER_ROLE: &str = "minter";

const DEFAULT_LIMIT: u32 = 20;
const MAX_LIMIT: u32 = 100;

#[derive(Error, Debug, PartialEq)]
pub enum AccessError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("AccessControl: account {account} is missing role {role}")]
    MissingRole { account: String, role: String },

    #[error("AccessControl: role name must not be empty")]
    EmptyRole,
}

#[cw_serde]
pub struct HasRoleResponse {
    pub has_role: bool,
}

#[cw_serde]
pub struct RoleResponse {
    pub role: String,
}

#[cw_serde]
pub struct RoleMembersResponse {
    pub role: String,
    pub members: Vec<Addr>,
}

/// Role membership keyed by `(role, account)`.
pub struct Roles<'a> {
    members: Map<'a, (&'a str, &'a Addr), Empty>,
}

impl<'a> Roles<'a> {
    pub const fn new(namespace: &'a str) -> Self {
        Roles {
            members: Map::new(namespace),
        }
    }

    pub fn has_role(&self, storage: &dyn Storage, role: &str, account: &Addr) -> bool {
        self.members.has(storage, (role, account))
    }

    /// Fails with [`AccessError::MissingRole`] unless `account` holds `role`.
    pub fn assert_role(
        &self,
        storage: &dyn Storage,
        role: &str,
        account: &Addr,
    ) -> Result<(), AccessError> {
        if self.has_role(storage, role, account) {
            Ok(())
        } else {
            Err(AccessError::MissingRole {
                account: account.to_string(),
                role: role.to_string(),
            })
        }
    }

    /// Grants without a caller check. Used at instantiation.
    /// Returns `false` when the account already held the role.
    pub fn grant_unchecked(
        &self,
        storage: &mut dyn Storage,
        role: &str,
        account: &Addr,
    ) -> Result<bool, AccessError> {
        if role.is_empty() {
            return Err(AccessError::EmptyRole);
        }
        if self.has_role(storage, role, account) {
            return Ok(false);
        }
        self.members.save(storage, (role, account), &Empty {})?;
        Ok(true)
    }

    pub fn grant(
        &self,
        storage: &mut dyn Storage,
        sender: &Addr,
        role: &str,
        account: &Addr,
    ) -> Result<bool, AccessError> {
        self.assert_role(storage, DEFAULT_ADMIN_ROLE, sender)?;
        self.grant_unchecked(storage, role, account)
    }

    /// Returns `false` when the account did not hold the role.
    pub fn revoke(
        &self,
        storage: &mut dyn Storage,
        sender: &Addr,
        role: &str,
        account: &Addr,
    ) -> Result<bool, AccessError> {
        self.assert_role(storage, DEFAULT_ADMIN_ROLE, sender)?;
        Ok(self.remove(storage, role, account))
    }

    pub fn renounce(&self, storage: &mut dyn Storage, sender: &Addr, role: &str) -> bool {
        self.remove(storage, role, sender)
    }

    pub fn members(
        &self,
        storage: &dyn Storage,
        role: &str,
        start_after: Option<&Addr>,
        limit: Option<u32>,
    ) -> StdResult<Vec<Addr>> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
        let start = start_after.map(Bound::exclusive);
        self.members
            .prefix(role)
            .keys(storage, start, None, Order::Ascending)
            .take(limit)
            .collect()
    }

    fn remove(&self, storage: &mut dyn Storage, role: &str, account: &Addr) -> bool {
        if !self.has_role(storage, role, account) {
            return false;
        }
        self.members.remove(storage, (role, account));
        true
    }
}
