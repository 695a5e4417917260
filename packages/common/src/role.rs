//! Role tags for contract access control.

use std::fmt;

use cosmwasm_schema::cw_serde;

/// Closed set of roles a contract instance can hand out.
///
/// Serialized as snake_case strings (`"admin"`, `"minter"`, ...). Any other tag
/// fails deserialization at the message boundary.
#[cw_serde]
#[derive(Copy, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    /// May grant/revoke roles and change configuration
    Admin,
    /// May mint on the token
    Minter,
    /// May burn from any holder on the token
    Burner,
    /// Signatures from members are accepted as proof of a transfer
    Validator,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Minter, Role::Burner, Role::Validator];

    /// Storage/attribute tag
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Minter => "minter",
            Role::Burner => "burner",
            Role::Validator => "validator",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
