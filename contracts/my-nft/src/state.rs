use access_control::Roles;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct CollectionInfo {
    pub name: String,
    pub symbol: String,
}

#[cw_serde]
pub struct TokenInfo {
    pub owner: Addr,
    /// Accounts allowed to transfer or burn this token on the owner's behalf.
    /// Cleared on every transfer.
    pub approvals: Vec<Addr>,
    pub token_uri: Option<String>,
}

impl TokenInfo {
    pub fn can_operate(&self, sender: &Addr) -> bool {
        self.owner == *sender || self.approvals.contains(sender)
    }
}

// ---- Storage keys ----

pub const COLLECTION_INFO: Item<CollectionInfo> = Item::new("collection_info");
pub const TOKEN_COUNT: Item<u64> = Item::new("num_tokens");
pub const TOKENS: Map<&str, TokenInfo> = Map::new("tokens");
pub const ROLES: Roles = Roles::new("roles");
