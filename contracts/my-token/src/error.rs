use access_control::AccessError;
use cosmwasm_std::{OverflowError, StdError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    Base(#[from] cw20_base::ContractError),

    #[error("{0}")]
    Access(#[from] AccessError),

    #[error("ERC20: transfer amount exceeds balance")]
    TransferExceedsBalance,

    #[error("ERC20: burn amount exceeds balance")]
    BurnExceedsBalance,

    #[error("ERC20: insufficient allowance")]
    InsufficientAllowance,

    #[error("Invalid zero amount")]
    InvalidZeroAmount,
}
