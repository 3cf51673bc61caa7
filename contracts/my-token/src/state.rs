use access_control::Roles;

/// Fungible balances, allowances and token info live in `cw20_base::state`.
pub const ROLES: Roles = Roles::new("roles");
