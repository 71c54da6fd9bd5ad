//! In-memory ledger with deposit, withdraw and transfer operations.
//!
//! All state lives behind a single [`std::sync::RwLock`]; every operation
//! takes the lock once, so a transfer debits and credits inside one
//! critical section and readers never observe a half-applied movement.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use rust_decimal::Decimal;

use crate::account::{Account, TransactionKind, TransactionRecord};
use crate::error::LedgerError;

/// Thread-safe map of accounts keyed by user id.
///
/// Accounts are opened lazily: the first operation that names an unseen
/// user id creates the account funded with the opening balance. This also
/// applies to the recipient of a transfer.
pub struct Ledger {
    opening_balance: Decimal,
    inner: RwLock<LedgerInner>,
}

#[derive(Default)]
struct LedgerInner {
    accounts: HashMap<String, Account>,
    last_tx_id: u64,
}

impl LedgerInner {
    fn open_or_get(&mut self, user_id: &str, opening_balance: Decimal) -> &mut Account {
        self.accounts
            .entry(user_id.to_string())
            .or_insert_with(|| Account::open(user_id, opening_balance))
    }

    /// Transaction ids are monotonic across the whole ledger.
    fn next_tx_id(&mut self) -> u64 {
        self.last_tx_id += 1;
        self.last_tx_id
    }
}

impl Ledger {
    pub fn new(opening_balance: Decimal) -> Self {
        Self {
            opening_balance,
            inner: RwLock::new(LedgerInner::default()),
        }
    }

    /// Credit `amount` to the user's account and return the new balance.
    pub fn deposit(&self, user_id: &str, amount: Decimal) -> Result<Decimal, LedgerError> {
        check_amount(amount)?;

        let mut inner = self.write();
        let tx_id = inner.next_tx_id();
        let account = inner.open_or_get(user_id, self.opening_balance);
        account.balance += amount;
        account.transactions.push(TransactionRecord {
            id: tx_id,
            amount,
            date: Utc::now().date_naive(),
            kind: TransactionKind::Deposit,
        });
        Ok(account.balance)
    }

    /// Debit `amount` from the user's account and return the new balance.
    ///
    /// Fails with [`LedgerError::InsufficientFunds`] when the balance does
    /// not cover the amount; the account is left unchanged in that case.
    pub fn withdraw(&self, user_id: &str, amount: Decimal) -> Result<Decimal, LedgerError> {
        check_amount(amount)?;

        let mut inner = self.write();
        if inner.open_or_get(user_id, self.opening_balance).balance < amount {
            return Err(LedgerError::InsufficientFunds);
        }
        let tx_id = inner.next_tx_id();
        let account = inner.open_or_get(user_id, self.opening_balance);
        account.balance -= amount;
        account.transactions.push(TransactionRecord {
            id: tx_id,
            amount,
            date: Utc::now().date_naive(),
            kind: TransactionKind::Withdrawal,
        });
        Ok(account.balance)
    }

    /// Move `amount` from one account to another and return the source's
    /// new balance.
    ///
    /// Both accounts are opened lazily before the sufficiency check, so a
    /// failed transfer can still create the recipient, but no money moves
    /// unless the source covers the full amount. Both legs are applied
    /// under one write lock.
    pub fn transfer(
        &self,
        from: &str,
        to: &str,
        amount: Decimal,
    ) -> Result<Decimal, LedgerError> {
        check_amount(amount)?;

        let mut inner = self.write();
        inner.open_or_get(to, self.opening_balance);
        if inner.open_or_get(from, self.opening_balance).balance < amount {
            return Err(LedgerError::InsufficientFunds);
        }

        let out_id = inner.next_tx_id();
        let in_id = inner.next_tx_id();
        let date = Utc::now().date_naive();

        let source = inner.open_or_get(from, self.opening_balance);
        source.balance -= amount;
        source.transactions.push(TransactionRecord {
            id: out_id,
            amount,
            date,
            kind: TransactionKind::TransferOut,
        });
        let new_balance = source.balance;

        let recipient = inner.open_or_get(to, self.opening_balance);
        recipient.balance += amount;
        recipient.transactions.push(TransactionRecord {
            id: in_id,
            amount,
            date,
            kind: TransactionKind::TransferIn,
        });

        Ok(new_balance)
    }

    /// Balance and transaction history for an existing account, or `None`
    /// when the user id has never been seen.
    pub fn balance_with_history(
        &self,
        user_id: &str,
    ) -> Option<(Decimal, Vec<TransactionRecord>)> {
        self.read()
            .accounts
            .get(user_id)
            .map(|account| (account.balance, account.transactions.clone()))
    }

    /// Balance for display purposes: unseen users show the opening balance
    /// they would start with, without creating the account.
    pub fn balance_or_opening(&self, user_id: &str) -> Decimal {
        self.read()
            .accounts
            .get(user_id)
            .map(|account| account.balance)
            .unwrap_or(self.opening_balance)
    }

    // A poisoned lock only means another thread panicked mid-operation;
    // the map itself is still usable.
    fn read(&self) -> RwLockReadGuard<'_, LedgerInner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, LedgerInner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

fn check_amount(amount: Decimal) -> Result<(), LedgerError> {
    if amount <= Decimal::ZERO {
        return Err(LedgerError::InvalidAmount);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    fn ledger() -> Ledger {
        Ledger::new(dec!(1000))
    }

    #[test]
    fn deposit_opens_account_and_credits() {
        let ledger = ledger();

        let balance = ledger.deposit("alice", dec!(250)).unwrap();
        assert_eq!(balance, dec!(1250));

        let (balance, history) = ledger.balance_with_history("alice").unwrap();
        assert_eq!(balance, dec!(1250));
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].kind, TransactionKind::Deposit);
        assert_eq!(history[0].amount, dec!(250));
    }

    #[test]
    fn withdraw_debits_when_covered() {
        let ledger = ledger();

        let balance = ledger.withdraw("alice", dec!(300)).unwrap();
        assert_eq!(balance, dec!(700));

        let (_, history) = ledger.balance_with_history("alice").unwrap();
        assert_eq!(history[0].kind, TransactionKind::Withdrawal);
    }

    #[test]
    fn withdraw_can_empty_the_account() {
        let ledger = ledger();
        assert_eq!(ledger.withdraw("alice", dec!(1000)), Ok(dec!(0)));
    }

    #[test]
    fn withdraw_rejects_amounts_over_balance() {
        let ledger = ledger();

        let result = ledger.withdraw("alice", dec!(1000.01));
        assert_eq!(result, Err(LedgerError::InsufficientFunds));

        // The attempt still opened the account, but left it untouched.
        let (balance, history) = ledger.balance_with_history("alice").unwrap();
        assert_eq!(balance, dec!(1000));
        assert!(history.is_empty());
    }

    #[test]
    fn transfer_moves_funds_between_accounts() {
        let ledger = ledger();

        let balance = ledger.transfer("alice", "bob", dec!(400)).unwrap();
        assert_eq!(balance, dec!(600));

        let (bob_balance, bob_history) = ledger.balance_with_history("bob").unwrap();
        assert_eq!(bob_balance, dec!(1400));
        assert_eq!(bob_history.len(), 1);
        assert_eq!(bob_history[0].kind, TransactionKind::TransferIn);

        let (_, alice_history) = ledger.balance_with_history("alice").unwrap();
        assert_eq!(alice_history[0].kind, TransactionKind::TransferOut);
    }

    #[test]
    fn failed_transfer_moves_no_money() {
        let ledger = ledger();

        let result = ledger.transfer("alice", "bob", dec!(5000));
        assert_eq!(result, Err(LedgerError::InsufficientFunds));

        assert_eq!(ledger.balance_or_opening("alice"), dec!(1000));
        let (bob_balance, bob_history) = ledger.balance_with_history("bob").unwrap();
        assert_eq!(bob_balance, dec!(1000));
        assert!(bob_history.is_empty());
    }

    #[test]
    fn self_transfer_leaves_balance_unchanged() {
        let ledger = ledger();

        let balance = ledger.transfer("alice", "alice", dec!(100)).unwrap();
        assert_eq!(balance, dec!(1000));

        let (_, history) = ledger.balance_with_history("alice").unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].kind, TransactionKind::TransferOut);
        assert_eq!(history[1].kind, TransactionKind::TransferIn);
    }

    #[test]
    fn non_positive_amounts_are_rejected() {
        let ledger = ledger();

        assert_eq!(ledger.deposit("alice", dec!(0)), Err(LedgerError::InvalidAmount));
        assert_eq!(ledger.deposit("alice", dec!(-5)), Err(LedgerError::InvalidAmount));
        assert_eq!(ledger.withdraw("alice", dec!(-1)), Err(LedgerError::InvalidAmount));
        assert_eq!(
            ledger.transfer("alice", "bob", dec!(0)),
            Err(LedgerError::InvalidAmount)
        );

        // Rejected amounts never open accounts.
        assert!(ledger.balance_with_history("alice").is_none());
        assert!(ledger.balance_with_history("bob").is_none());
    }

    #[test]
    fn transaction_ids_are_monotonic_across_accounts() {
        let ledger = ledger();

        ledger.deposit("alice", dec!(10)).unwrap();
        ledger.deposit("bob", dec!(20)).unwrap();
        ledger.withdraw("alice", dec!(5)).unwrap();

        let (_, alice_history) = ledger.balance_with_history("alice").unwrap();
        let (_, bob_history) = ledger.balance_with_history("bob").unwrap();
        assert_eq!(alice_history[0].id, 1);
        assert_eq!(bob_history[0].id, 2);
        assert_eq!(alice_history[1].id, 3);
    }

    #[test]
    fn unseen_users_have_no_history_but_show_the_opening_balance() {
        let ledger = ledger();

        assert!(ledger.balance_with_history("nobody").is_none());
        assert_eq!(ledger.balance_or_opening("nobody"), dec!(1000));
    }

    #[test]
    fn fractional_amounts_round_trip_exactly() {
        let ledger = ledger();

        ledger.deposit("alice", dec!(0.10)).unwrap();
        ledger.deposit("alice", dec!(0.20)).unwrap();
        let balance = ledger.withdraw("alice", dec!(0.30)).unwrap();
        assert_eq!(balance, dec!(1000));
    }
}
