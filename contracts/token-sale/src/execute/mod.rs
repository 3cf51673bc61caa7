pub mod burn_nft;
pub mod burn_tokens;
pub mod buy_nft;
pub mod buy_tokens;
pub mod ownership;
pub mod withdraw;
