use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::account::{Account, SharedAccount};
use crate::decimal::{Money, Rate};
use crate::errors::{LoanError, Result};
use crate::factory::LoanFactory;
use crate::loan::Loan;
use crate::summary::LoanSummary;
use crate::types::LoanKind;

/// loan terms as supplied by a caller or a json document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanConfig {
    pub kind: String,
    pub interest_rate: Rate,
    pub periods: u32,
}

impl LoanConfig {
    pub fn new(kind: impl Into<String>, interest_rate: Rate, periods: u32) -> Self {
        Self {
            kind: kind.into(),
            interest_rate,
            periods,
        }
    }

    /// monthly loan quoted with an annual rate over whole years
    pub fn monthly(kind: impl Into<String>, annual_rate: Rate, years: u32) -> Self {
        Self::new(kind, annual_rate.monthly_rate(), years * 12)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| LoanError::InvalidConfiguration {
            message: e.to_string(),
        })
    }

    /// check the terms without creating a loan
    pub fn validate(&self) -> Result<LoanKind> {
        let kind = LoanFactory::resolve(&self.kind)?;
        if !self.interest_rate.is_per_period() {
            return Err(LoanError::RateOutOfRange {
                rate: self.interest_rate,
            });
        }
        if self.periods == 0 {
            return Err(LoanError::NonPositivePeriods { periods: 0 });
        }
        Ok(kind)
    }

    /// create the configured loan against an account
    pub fn open(&self, account: SharedAccount) -> Result<Loan> {
        LoanFactory::create(&self.kind, account, self.interest_rate, self.periods)
    }
}

/// an account plus the loans to quote against it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteConfig {
    pub owner: String,
    pub balance: Money,
    pub requested_principal: Money,
    #[serde(default)]
    pub deposits: Vec<Money>,
    pub loans: Vec<LoanConfig>,
}

impl QuoteConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| LoanError::InvalidConfiguration {
            message: e.to_string(),
        })
    }

    /// open the account, apply deposits and summarize every loan
    pub fn quote(&self) -> Result<Vec<LoanSummary>> {
        if self.loans.is_empty() {
            return Err(LoanError::InvalidConfiguration {
                message: "at least one loan is required".to_string(),
            });
        }

        let account = Account::shared(self.owner.clone(), self.balance)?;
        for amount in &self.deposits {
            account.borrow_mut().try_deposit(*amount)?;
        }

        self.loans
            .iter()
            .map(|cfg| cfg.open(account.clone())?.summary(self.requested_principal))
            .collect()
    }

    /// example document used by the demos
    pub fn sample() -> Self {
        Self {
            owner: "mauricio".to_string(),
            balance: Money::from_major(1_000),
            requested_principal: Money::from_major(10_000),
            deposits: vec![Money::from_major(500)],
            loans: vec![
                LoanConfig::new("alemán", Rate::from_decimal(dec!(0.03)), 12),
                LoanConfig::new("americano", Rate::from_decimal(dec!(0.03)), 12),
                LoanConfig::new("francés", Rate::from_decimal(dec!(0.03)), 12),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_preset() {
        let cfg = LoanConfig::monthly("annuity", Rate::from_percentage(36), 2);
        assert_eq!(cfg.interest_rate, Rate::from_percentage(3));
        assert_eq!(cfg.periods, 24);
        assert_eq!(cfg.validate().unwrap(), LoanKind::Annuity);
    }

    #[test]
    fn test_from_json() {
        let cfg = LoanConfig::from_json(r#"{"kind": "Frances", "interest_rate": "0.03", "periods": 12}"#).unwrap();
        assert_eq!(cfg.interest_rate, Rate::from_decimal(dec!(0.03)));
        assert_eq!(cfg.validate().unwrap(), LoanKind::Annuity);
    }

    #[test]
    fn test_malformed_json_is_a_configuration_error() {
        let err = LoanConfig::from_json(r#"{"kind": "annuity", "periods": -3}"#).unwrap_err();
        assert!(matches!(err, LoanError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_validate_rejects_bad_terms() {
        assert!(matches!(
            LoanConfig::new("annuity", Rate::ONE, 12).validate(),
            Err(LoanError::RateOutOfRange { .. })
        ));
        assert!(matches!(
            LoanConfig::new("annuity", Rate::ZERO, 0).validate(),
            Err(LoanError::NonPositivePeriods { .. })
        ));
        assert!(matches!(
            LoanConfig::new("leasing", Rate::ZERO, 12).validate(),
            Err(LoanError::UnknownLoanKind { .. })
        ));
    }

    #[test]
    fn test_sample_quote() {
        let summaries = QuoteConfig::sample().quote().unwrap();
        assert_eq!(summaries.len(), 3);

        // balance 1500 after the deposit
        let approved: Vec<Money> = summaries.iter().map(|s| s.approved_principal).collect();
        assert_eq!(
            approved,
            vec![Money::from_major(3_000), Money::from_major(2_250), Money::from_major(4_500)]
        );
    }

    #[test]
    fn test_quote_requires_loans() {
        let mut cfg = QuoteConfig::sample();
        cfg.loans.clear();
        assert!(cfg.quote().is_err());
    }

    #[test]
    fn test_quote_propagates_rejected_deposit() {
        let mut cfg = QuoteConfig::sample();
        cfg.deposits = vec![Money::ZERO];
        assert_eq!(
            cfg.quote().unwrap_err(),
            LoanError::InvalidAmount { amount: Money::ZERO }
        );
    }
}
