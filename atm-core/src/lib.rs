pub mod account;
mod error;
pub mod mode;
pub mod money;

pub use crate::account::{Account, AccountEvent, Receipt, Validity};
pub use crate::error::AtmError;
pub use crate::mode::Mode;
pub use crate::money::Money;
