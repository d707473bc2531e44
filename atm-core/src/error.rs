use thiserror::Error;

use crate::money::Money;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AtmError {
    #[error("Unknown mode: {0:?}")]
    UnknownMode(String),

    #[error("Opening balance cannot be negative: {0}")]
    NegativeBalance(Money),

    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),
}
