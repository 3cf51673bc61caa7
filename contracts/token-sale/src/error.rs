use cosmwasm_std::{DivideByZeroError, OverflowError, StdError};
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    DivideByZero(#[from] DivideByZeroError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Invalid ratio: must be > 0")]
    InvalidRatio,

    #[error("Invalid price: must be > 0")]
    InvalidPrice,

    #[error("Amount must be greater than zero")]
    InvalidZeroAmount,

    #[error("Computed native refund is zero: burn at least {ratio} tokens")]
    ZeroOutput { ratio: u64 },

    #[error("Insufficient native reserve. Available: {available}, requested: {requested}")]
    InsufficientReserve {
        available: String,
        requested: String,
    },

    #[error("Item {token_id} is already owned")]
    ItemAlreadyOwned { token_id: String },

    #[error("Item not found: {token_id}")]
    ItemNotFound { token_id: String },

    #[error("Item {token_id} was not sold by this contract")]
    ItemNotSold { token_id: String },

    #[error("Sender does not own item {token_id}")]
    NotItemOwner { token_id: String },

    #[error("Insufficient withdrawable pool. Available: {available}, requested: {requested}")]
    InsufficientPool {
        available: String,
        requested: String,
    },

    #[error("Nothing to withdraw")]
    NothingToWithdraw,

    #[error("No pending ownership transfer")]
    NoPendingOwner,
}
