use thiserror::Error;

use crate::decimal::{Money, Rate};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoanError {
    #[error("invalid amount: {amount} (must be greater than zero)")]
    InvalidAmount {
        amount: Money,
    },

    #[error("insufficient funds: available {available}, requested {requested}")]
    InsufficientFunds {
        available: Money,
        requested: Money,
    },

    #[error("balance cannot be negative: {value}")]
    NegativeBalance {
        value: Money,
    },

    #[error("interest rate {rate} out of range: must be in [0, 1), use 0.03 for 3% per period")]
    RateOutOfRange {
        rate: Rate,
    },

    #[error("periods must be a positive integer, got {periods}")]
    NonPositivePeriods {
        periods: i64,
    },

    #[error("principal must be greater than zero, got {principal}")]
    NonPositivePrincipal {
        principal: Money,
    },

    #[error("unknown loan kind {kind:?}: use one of {}", .valid.join(", "))]
    UnknownLoanKind {
        kind: String,
        valid: Vec<String>,
    },

    #[error("requested principal is not financeable: requested {requested}, max allowed {max_allowed} (check the account balance)")]
    NotFinanceable {
        requested: Money,
        max_allowed: Money,
    },

    #[error("calculation error: {message}")]
    CalculationError {
        message: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, LoanError>;
