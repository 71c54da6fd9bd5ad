//! Account and transaction record types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single account in the in-memory ledger.
#[derive(Debug, Clone)]
pub struct Account {
    pub user_id: String,
    pub balance: Decimal,
    pub transactions: Vec<TransactionRecord>,
}

impl Account {
    /// Open a fresh account funded with the ledger's opening balance.
    pub fn open(user_id: impl Into<String>, opening_balance: Decimal) -> Self {
        Self {
            user_id: user_id.into(),
            balance: opening_balance,
            transactions: Vec::new(),
        }
    }
}

/// One completed movement against an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: u64,
    pub amount: Decimal,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
    TransferIn,
    TransferOut,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdrawal => "withdrawal",
            TransactionKind::TransferIn => "transfer_in",
            TransactionKind::TransferOut => "transfer_out",
        }
    }
}
