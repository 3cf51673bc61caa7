use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};
use serde::{Deserialize, Serialize};

#[cw_serde]
pub struct InstantiateMsg {
    /// Payment-token units minted per unit of native coin (must be > 0)
    pub ratio: u64,
    /// Payment-token units charged per item (must be > 0)
    pub price: Uint128,
    /// CW20 payment token contract address
    pub token_address: String,
    /// Item NFT contract address
    pub nft_address: String,
    /// Native denom accepted by BuyTokens. Default: uaxm
    #[serde(default = "crate::state::default_native_denom")]
    pub native_denom: String,
    /// Defaults to the instantiating account
    pub owner: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Mint `sent * ratio` payment tokens to the sender.
    /// Attach native funds to this message.
    BuyTokens {},

    /// Burn `amount` payment tokens from the sender and return
    /// `amount / ratio` native coin. Needs a prior allowance to this contract.
    BurnTokens { amount: Uint128 },

    /// Pay `price` payment tokens and receive item `token_id`.
    /// Needs a prior allowance of at least `price`.
    BuyNft { token_id: String },

    /// Burn an owned item and get back the share of its price
    /// not credited to the owner pool. Needs the item approved to this contract.
    BurnNft { token_id: String },

    /// Owner: withdraw from the pool (None = everything)
    Withdraw { amount: Option<Uint128> },

    /// Owner: propose a new owner (step 1 of 2-step transfer)
    TransferOwnership { new_owner: String },

    /// Pending owner: accept ownership (step 2 of 2-step transfer)
    AcceptOwnership {},
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(RatioResponse)]
    Ratio {},

    #[returns(AddressResponse)]
    TokenAddress {},

    #[returns(AddressResponse)]
    NftAddress {},

    #[returns(PriceResponse)]
    Price {},

    #[returns(WithdrawableAmountResponse)]
    WithdrawableAmount {},

    #[returns(OwnershipResponse)]
    Ownership {},
}

// ---- Response types ----

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub token_address: Addr,
    pub nft_address: Addr,
    pub ratio: u64,
    pub price: Uint128,
    pub native_denom: String,
}

#[cw_serde]
pub struct RatioResponse {
    pub ratio: u64,
}

#[cw_serde]
pub struct AddressResponse {
    pub address: Addr,
}

#[cw_serde]
pub struct PriceResponse {
    pub price: Uint128,
}

#[cw_serde]
pub struct WithdrawableAmountResponse {
    pub amount: Uint128,
}

#[cw_serde]
pub struct OwnershipResponse {
    pub owner: Addr,
    pub pending_owner: Option<Addr>,
}

// ---- Item collection interface ----

/// Execute messages this contract sends to the item collection.
#[cw_serde]
pub enum NftExecuteMsg {
    Mint {
        token_id: String,
        owner: String,
        token_uri: Option<String>,
    },
    Burn {
        token_id: String,
    },
}

#[cw_serde]
pub enum NftQueryMsg {
    OwnerOf {
        token_id: String,
        include_expired: Option<bool>,
    },
}

/// Only the owner is read; other fields of the collection's reply are ignored.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NftOwnerResponse {
    pub owner: String,
}
