//! # Teller Ledger
//!
//! In-memory account ledger backing the Teller demo bank. Balances are
//! [`rust_decimal::Decimal`] values, accounts are created lazily with a
//! configurable opening balance, and every completed movement is recorded
//! against the accounts it touched.
//!
//! ```rust
//! use rust_decimal::dec;
//! use teller_ledger::Ledger;
//!
//! let ledger = Ledger::new(dec!(1000));
//! assert_eq!(ledger.deposit("alice", dec!(250)), Ok(dec!(1250)));
//! assert_eq!(ledger.transfer("alice", "bob", dec!(50)), Ok(dec!(1200)));
//! ```

pub mod account;
pub mod error;
pub mod ledger;

pub use account::{Account, TransactionKind, TransactionRecord};
pub use error::LedgerError;
pub use ledger::Ledger;
