use cosmwasm_std::{Addr, Empty, Uint128};
use cosmwasm_schema::cw_serde;
use cw_storage_plus::{Item, Map};

pub fn default_native_denom() -> String {
    "uaxm".to_string()
}

#[cw_serde]
pub struct Config {
    pub owner: Addr,
    /// CW20 payment token. The sale must hold its minter role.
    pub token_address: Addr,
    /// Item collection. The sale must hold its minter role.
    pub nft_address: Addr,
    /// Payment-token units minted per unit of native coin.
    pub ratio: u64,
    /// Payment-token units charged per item.
    pub price: Uint128,
    pub native_denom: String,
}

impl Config {
    /// Share of each item sale credited to the owner's pool.
    pub fn pool_share(&self) -> Uint128 {
        self.price / Uint128::new(2)
    }

    /// Share of each item sale kept as contract balance and refunded on burn.
    pub fn refund_share(&self) -> Uint128 {
        self.price - self.pool_share()
    }
}

// ---- Storage keys ----

pub const CONFIG: Item<Config> = Item::new("config");

/// Owner-withdrawable payment tokens, funded by item sales only.
pub const WITHDRAWABLE: Item<Uint128> = Item::new("withdrawable_amount");

/// Pending owner for 2-step ownership transfer
pub const PENDING_OWNER: Item<Addr> = Item::new("pending_owner");

/// Items minted through `BuyNft` and not yet burned. Only these are refundable.
pub const SOLD: Map<&str, Empty> = Map::new("sold_items");
