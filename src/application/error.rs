use thiserror::Error;

use crate::domain::{Cents, ParseAmountError};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid amount format: {0:?}")]
    InvalidAmount(String),

    #[error("Invalid interest rate format: {0:?}")]
    InvalidRate(String),

    #[error("Invalid amount for withdrawal: requested {requested} cents, balance {balance} cents")]
    WithdrawalRejected { requested: Cents, balance: Cents },
}

impl From<ParseAmountError> for AppError {
    fn from(err: ParseAmountError) -> Self {
        match err {
            ParseAmountError::InvalidAmount(input) => AppError::InvalidAmount(input),
            ParseAmountError::InvalidRate(input) => AppError::InvalidRate(input),
        }
    }
}
