use access_control::AccessError;
use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Access(#[from] AccessError),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("token_id already claimed")]
    Claimed,

    #[error("Token not found: {token_id}")]
    TokenNotFound { token_id: String },

    #[error("Approval not found for: {spender}")]
    ApprovalNotFound { spender: String },
}
