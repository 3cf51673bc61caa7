use access_control::{HasRoleResponse, RoleMembersResponse, RoleResponse};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Uint128};
use cw20::{AllowanceResponse, BalanceResponse, Cw20Coin, Expiration, TokenInfoResponse};

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    #[serde(default)]
    pub initial_balances: Vec<Cw20Coin>,
}

/// Wire-compatible with the matching `cw20::Cw20ExecuteMsg` variants.
#[cw_serde]
pub enum ExecuteMsg {
    Transfer { recipient: String, amount: Uint128 },
    Burn { amount: Uint128 },
    Send {
        contract: String,
        amount: Uint128,
        msg: Binary,
    },
    IncreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },
    DecreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },
    BurnFrom { owner: String, amount: Uint128 },

    /// Requires the minter role.
    Mint { recipient: String, amount: Uint128 },

    /// Requires the default admin role.
    GrantRole { role: String, account: String },
    /// Requires the default admin role.
    RevokeRole { role: String, account: String },
    RenounceRole { role: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(BalanceResponse)]
    Balance { address: String },

    #[returns(TokenInfoResponse)]
    TokenInfo {},

    #[returns(AllowanceResponse)]
    Allowance { owner: String, spender: String },

    #[returns(HasRoleResponse)]
    HasRole { role: String, account: String },

    #[returns(RoleResponse)]
    MinterRole {},

    #[returns(RoleMembersResponse)]
    RoleMembers {
        role: String,
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct MigrateMsg {}
