//! Errors raised by ledger operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerError {
    /// Withdrawal or transfer amount exceeds the source balance.
    #[error("insufficient funds")]
    InsufficientFunds,

    /// Amounts must be strictly positive.
    #[error("amount must be greater than zero")]
    InvalidAmount,
}
