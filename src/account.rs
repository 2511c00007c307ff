use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::decimal::Money;
use crate::errors::{LoanError, Result};
use crate::events::{Event, EventStore};

/// account shared by every loan drawn against it
///
/// single-threaded by contract: loans read the live balance through the
/// shared handle and callers must not interleave conflicting mutations.
pub type SharedAccount = Rc<RefCell<Account>>;

/// outcome of a lenient deposit or withdrawal
#[must_use]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TransactionOutcome {
    Applied { balance: Money },
    Rejected { reason: String },
}

impl TransactionOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, TransactionOutcome::Applied { .. })
    }
}

/// bank account with a balance that can never go negative
#[derive(Debug, Clone)]
pub struct Account {
    owner: String,
    balance: Money,
    events: EventStore,
}

impl Account {
    /// open an account, rejecting a negative opening balance
    pub fn new(owner: impl Into<String>, balance: Money) -> Result<Self> {
        let mut account = Self {
            owner: owner.into(),
            balance: Money::ZERO,
            events: EventStore::new(),
        };
        account.set_balance(balance)?;
        account.events.clear();
        Ok(account)
    }

    /// open an account behind a shared handle
    pub fn shared(owner: impl Into<String>, balance: Money) -> Result<SharedAccount> {
        Ok(Rc::new(RefCell::new(Self::new(owner, balance)?)))
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// validated assignment; the balance is untouched on error
    pub fn set_balance(&mut self, value: Money) -> Result<()> {
        if value.is_negative() {
            return Err(LoanError::NegativeBalance { value });
        }
        let old_balance = self.balance;
        self.balance = value;

        self.events.emit(Event::BalanceSet {
            owner: self.owner.clone(),
            old_balance,
            new_balance: value,
            timestamp: Utc::now(),
        });
        Ok(())
    }

    /// deposit, propagating validation errors
    pub fn try_deposit(&mut self, amount: Money) -> Result<Money> {
        if !amount.is_positive() {
            return Err(LoanError::InvalidAmount { amount });
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| LoanError::CalculationError {
                message: format!("deposit of {} overflows balance {}", amount, self.balance),
            })?;

        tracing::debug!(owner = %self.owner, amount = %amount, balance = %self.balance, "deposit applied");
        self.events.emit(Event::Deposited {
            owner: self.owner.clone(),
            amount,
            new_balance: self.balance,
            timestamp: Utc::now(),
        });
        Ok(self.balance)
    }

    /// withdraw, propagating validation errors
    pub fn try_withdraw(&mut self, amount: Money) -> Result<Money> {
        if !amount.is_positive() {
            return Err(LoanError::InvalidAmount { amount });
        }
        if amount > self.balance {
            return Err(LoanError::InsufficientFunds {
                available: self.balance,
                requested: amount,
            });
        }
        self.balance -= amount;

        tracing::debug!(owner = %self.owner, amount = %amount, balance = %self.balance, "withdrawal applied");
        self.events.emit(Event::Withdrawn {
            owner: self.owner.clone(),
            amount,
            new_balance: self.balance,
            timestamp: Utc::now(),
        });
        Ok(self.balance)
    }

    /// deposit; a rejected amount is reported and leaves the balance as is
    pub fn deposit(&mut self, amount: Money) -> TransactionOutcome {
        match self.try_deposit(amount) {
            Ok(balance) => TransactionOutcome::Applied { balance },
            Err(err) => {
                tracing::warn!(owner = %self.owner, amount = %amount, error = %err, "deposit rejected");
                self.events.emit(Event::DepositRejected {
                    owner: self.owner.clone(),
                    amount,
                    reason: err.to_string(),
                    timestamp: Utc::now(),
                });
                TransactionOutcome::Rejected { reason: err.to_string() }
            }
        }
    }

    /// withdraw; a rejected amount is reported and leaves the balance as is
    pub fn withdraw(&mut self, amount: Money) -> TransactionOutcome {
        match self.try_withdraw(amount) {
            Ok(balance) => TransactionOutcome::Applied { balance },
            Err(err) => {
                tracing::warn!(owner = %self.owner, amount = %amount, error = %err, "withdrawal rejected");
                self.events.emit(Event::WithdrawalRejected {
                    owner: self.owner.clone(),
                    amount,
                    reason: err.to_string(),
                    timestamp: Utc::now(),
                });
                TransactionOutcome::Rejected { reason: err.to_string() }
            }
        }
    }

    pub fn events(&self) -> &[Event] {
        self.events.events()
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        self.events.take_events()
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Account(owner={:?}, balance={:.2})", self.owner, self.balance)
    }
}
