use access_control::{HasRoleResponse, RoleMembersResponse, RoleResponse};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cw_utils::Expiration;

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Requires the minter role. Fails if `token_id` already exists.
    Mint {
        token_id: String,
        owner: String,
        token_uri: Option<String>,
    },

    /// Owner or approved spender only
    TransferNft { recipient: String, token_id: String },

    /// Owner only
    Approve { spender: String, token_id: String },

    /// Owner only
    Revoke { spender: String, token_id: String },

    /// Owner or approved spender only
    Burn { token_id: String },

    GrantRole { role: String, account: String },
    RevokeRole { role: String, account: String },
    RenounceRole { role: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Field names follow the CW721 `OwnerOf` query.
    #[returns(OwnerOfResponse)]
    OwnerOf {
        token_id: String,
        include_expired: Option<bool>,
    },

    #[returns(NftInfoResponse)]
    NftInfo { token_id: String },

    #[returns(NumTokensResponse)]
    NumTokens {},

    #[returns(ContractInfoResponse)]
    ContractInfo {},

    #[returns(TokensResponse)]
    Tokens {
        owner: String,
        start_after: Option<String>,
        limit: Option<u32>,
    },

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

// ---- Response types ----

#[cw_serde]
pub struct Approval {
    pub spender: String,
    pub expires: Expiration,
}

#[cw_serde]
pub struct OwnerOfResponse {
    pub owner: String,
    pub approvals: Vec<Approval>,
}

#[cw_serde]
pub struct NftInfoResponse {
    pub token_uri: Option<String>,
}

#[cw_serde]
pub struct NumTokensResponse {
    pub count: u64,
}

#[cw_serde]
pub struct ContractInfoResponse {
    pub name: String,
    pub symbol: String,
}

#[cw_serde]
pub struct TokensResponse {
    pub tokens: Vec<String>,
}
