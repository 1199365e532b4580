//! Wallet facade over payment subsystems.
//!
//! # Responsibility
//! - Expose credit/debit as one call while coordinating account check,
//!   security code check, balance mutation, ledger entry and
//!   notification behind the scenes.
//!
//! # Invariants
//! - A failing operation leaves every subsystem unchanged: the balance
//!   keeps its value, no ledger entry is written, no notification fires.
//! - Checks run before any mutation.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Error raised by a wallet operation. Local and recoverable; the
/// facade state is unchanged when one is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    AccountMismatch,
    SecurityCodeMismatch,
    InsufficientBalance { balance: u64, requested: u64 },
}

impl Display for WalletError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AccountMismatch => write!(f, "account name is incorrect"),
            Self::SecurityCodeMismatch => write!(f, "security code is incorrect"),
            Self::InsufficientBalance { balance, requested } => write!(
                f,
                "balance is not sufficient: have {balance}, requested {requested}"
            ),
        }
    }
}

impl Error for WalletError {}

/// Transaction direction recorded in the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TxnKind {
    Credit,
    Debit,
}

/// One append-only ledger record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: Uuid,
    pub account_id: String,
    pub kind: TxnKind,
    pub amount: u64,
}

struct Account {
    name: String,
}

impl Account {
    fn check(&self, account_id: &str) -> Result<(), WalletError> {
        if self.name != account_id {
            return Err(WalletError::AccountMismatch);
        }
        Ok(())
    }
}

struct SecurityCode {
    code: u32,
}

impl SecurityCode {
    fn check(&self, incoming: u32) -> Result<(), WalletError> {
        if self.code != incoming {
            return Err(WalletError::SecurityCodeMismatch);
        }
        Ok(())
    }
}

struct Wallet {
    balance: u64,
}

impl Wallet {
    fn credit(&mut self, amount: u64) {
        self.balance += amount;
    }

    fn debit(&mut self, amount: u64) -> Result<(), WalletError> {
        if self.balance < amount {
            return Err(WalletError::InsufficientBalance {
                balance: self.balance,
                requested: amount,
            });
        }
        self.balance -= amount;
        Ok(())
    }
}

#[derive(Default)]
struct Ledger {
    entries: Vec<LedgerEntry>,
}

impl Ledger {
    fn record(&mut self, account_id: &str, kind: TxnKind, amount: u64) {
        let entry = LedgerEntry {
            id: Uuid::new_v4(),
            account_id: account_id.to_string(),
            kind,
            amount,
        };
        info!(
            "event=ledger_entry module=facade status=ok txn={} account={} kind={:?} amount={}",
            entry.id, entry.account_id, entry.kind, entry.amount
        );
        self.entries.push(entry);
    }
}

#[derive(Default)]
struct Notification {
    credits_sent: usize,
    debits_sent: usize,
}

impl Notification {
    fn credit_sent(&mut self) {
        self.credits_sent += 1;
        info!("event=notification module=facade status=ok kind=credit");
    }

    fn debit_sent(&mut self) {
        self.debits_sent += 1;
        info!("event=notification module=facade status=ok kind=debit");
    }
}

/// Facade coordinating the payment subsystems for one account.
pub struct WalletFacade {
    account: Account,
    security_code: SecurityCode,
    wallet: Wallet,
    ledger: Ledger,
    notification: Notification,
}

impl WalletFacade {
    /// Opens a zero-balance wallet for `account_id` protected by `code`.
    pub fn new(account_id: impl Into<String>, code: u32) -> Self {
        let name = account_id.into();
        info!("event=wallet_created module=facade status=ok account={name}");
        Self {
            account: Account { name },
            security_code: SecurityCode { code },
            wallet: Wallet { balance: 0 },
            ledger: Ledger::default(),
            notification: Notification::default(),
        }
    }

    /// Credits `amount` after verifying the account and security code.
    ///
    /// # Errors
    /// - `AccountMismatch`, `SecurityCodeMismatch`. On error nothing is
    ///   credited or recorded.
    pub fn add_money(
        &mut self,
        account_id: &str,
        code: u32,
        amount: u64,
    ) -> Result<(), WalletError> {
        self.verify(account_id, code)?;
        self.wallet.credit(amount);
        self.notification.credit_sent();
        self.ledger.record(account_id, TxnKind::Credit, amount);
        Ok(())
    }

    /// Debits `amount` after verifying the account, security code and
    /// available balance.
    ///
    /// # Errors
    /// - `AccountMismatch`, `SecurityCodeMismatch`,
    ///   `InsufficientBalance`. On error the balance is unchanged and
    ///   nothing is recorded.
    pub fn deduct_money(
        &mut self,
        account_id: &str,
        code: u32,
        amount: u64,
    ) -> Result<(), WalletError> {
        self.verify(account_id, code)?;
        self.wallet.debit(amount)?;
        self.notification.debit_sent();
        self.ledger.record(account_id, TxnKind::Debit, amount);
        Ok(())
    }

    /// Current wallet balance.
    pub fn balance(&self) -> u64 {
        self.wallet.balance
    }

    /// All recorded transactions, oldest first.
    pub fn ledger_entries(&self) -> &[LedgerEntry] {
        &self.ledger.entries
    }

    /// `(credit, debit)` notification counters.
    pub fn notifications_sent(&self) -> (usize, usize) {
        (
            self.notification.credits_sent,
            self.notification.debits_sent,
        )
    }

    fn verify(&self, account_id: &str, code: u32) -> Result<(), WalletError> {
        if let Err(err) = self.account.check(account_id) {
            warn!("event=verify module=facade status=error reason=account");
            return Err(err);
        }
        if let Err(err) = self.security_code.check(code) {
            warn!("event=verify module=facade status=error reason=security_code");
            return Err(err);
        }
        Ok(())
    }
}
