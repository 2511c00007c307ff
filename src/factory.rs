use crate::account::SharedAccount;
use crate::amortization::AmortizationStrategy;
use crate::decimal::Rate;
use crate::errors::{LoanError, Result};
use crate::loan::Loan;
use crate::types::LoanKind;

/// label -> loan kind, including the spanish names with and without accents
const REGISTRY: &[(&str, LoanKind)] = &[
    ("constant-amortization", LoanKind::ConstantAmortization),
    ("german", LoanKind::ConstantAmortization),
    ("aleman", LoanKind::ConstantAmortization),
    ("alemán", LoanKind::ConstantAmortization),
    ("interest-only", LoanKind::InterestOnly),
    ("american", LoanKind::InterestOnly),
    ("americano", LoanKind::InterestOnly),
    ("annuity", LoanKind::Annuity),
    ("french", LoanKind::Annuity),
    ("frances", LoanKind::Annuity),
    ("francés", LoanKind::Annuity),
];

/// creates loans from a free-form label
pub struct LoanFactory;

impl LoanFactory {
    /// resolve a label, ignoring surrounding whitespace and case
    pub fn resolve(kind: &str) -> Result<LoanKind> {
        let normalized = kind.trim().to_lowercase();
        REGISTRY
            .iter()
            .find(|(label, _)| *label == normalized)
            .map(|(_, kind)| *kind)
            .ok_or_else(|| LoanError::UnknownLoanKind {
                kind: normalized,
                valid: Self::canonical_labels(),
            })
    }

    /// create a loan; the loan re-validates rate and periods itself
    pub fn create(kind: &str, account: SharedAccount, rate: Rate, periods: u32) -> Result<Loan> {
        let kind = Self::resolve(kind)?;
        Loan::new(kind, account, rate, periods)
    }

    /// every label the registry accepts
    pub fn labels() -> impl Iterator<Item = &'static str> {
        REGISTRY.iter().map(|(label, _)| *label)
    }

    pub fn canonical_labels() -> Vec<String> {
        LoanKind::ALL.iter().map(|k| k.label().to_string()).collect()
    }
}

/// builder for creating loans
#[derive(Debug, Default)]
pub struct LoanBuilder {
    kind: Option<LoanKind>,
    label: Option<String>,
    account: Option<SharedAccount>,
    rate: Option<Rate>,
    periods: Option<u32>,
    strategy: Option<Box<dyn AmortizationStrategy>>,
}

impl LoanBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: LoanKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// pick the kind by factory label instead of enum
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn account(mut self, account: SharedAccount) -> Self {
        self.account = Some(account);
        self
    }

    pub fn rate(mut self, rate: Rate) -> Self {
        self.rate = Some(rate);
        self
    }

    pub fn periods(mut self, periods: u32) -> Self {
        self.periods = Some(periods);
        self
    }

    /// override the kind's default strategy
    pub fn strategy(mut self, strategy: Box<dyn AmortizationStrategy>) -> Self {
        self.strategy = Some(strategy);
        self
    }

    pub fn build(self) -> Result<Loan> {
        let kind = match (self.kind, self.label) {
            (Some(kind), _) => kind,
            (None, Some(label)) => LoanFactory::resolve(&label)?,
            (None, None) => {
                return Err(LoanError::InvalidConfiguration {
                    message: "loan kind is required".to_string(),
                })
            }
        };
        let account = self.account.ok_or_else(|| LoanError::InvalidConfiguration {
            message: "account is required".to_string(),
        })?;
        let rate = self.rate.ok_or_else(|| LoanError::InvalidConfiguration {
            message: "rate is required".to_string(),
        })?;
        let periods = self.periods.ok_or_else(|| LoanError::InvalidConfiguration {
            message: "periods is required".to_string(),
        })?;

        let strategy = self.strategy.unwrap_or_else(|| kind.default_strategy());
        Loan::with_strategy(kind, account, rate, periods, strategy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::Account;
    use crate::amortization::{level_payment, Annuity};
    use crate::decimal::Money;
    use crate::types::ApprovalOutcome;
    use rust_decimal_macros::dec;

    fn shared(balance: i64) -> SharedAccount {
        Account::shared("mauricio", Money::from_major(balance)).unwrap()
    }

    fn close(a: Money, b: Money) -> bool {
        (a - b).abs() < Money::from_decimal(dec!(0.000000001))
    }

    #[test]
    fn test_labels_are_case_and_whitespace_insensitive() {
        for label in ["annuity", "  ANNUITY ", "Frances", "francés", "FRANCÉS", "\tfrench\n"] {
            assert_eq!(LoanFactory::resolve(label).unwrap(), LoanKind::Annuity, "{label:?}");
        }
        for label in ["constant-amortization", "Alemán", "ALEMAN", "german"] {
            assert_eq!(LoanFactory::resolve(label).unwrap(), LoanKind::ConstantAmortization);
        }
        for label in ["interest-only", " Americano", "AMERICAN"] {
            assert_eq!(LoanFactory::resolve(label).unwrap(), LoanKind::InterestOnly);
        }
    }

    #[test]
    fn test_unknown_kind_lists_canonical_labels() {
        let err = LoanFactory::resolve(" Balloon ").unwrap_err();
        assert_eq!(
            err,
            LoanError::UnknownLoanKind {
                kind: "balloon".to_string(),
                valid: vec![
                    "constant-amortization".to_string(),
                    "interest-only".to_string(),
                    "annuity".to_string(),
                ],
            }
        );
    }

    #[test]
    fn test_registry_covers_every_kind() {
        for kind in LoanKind::ALL {
            assert!(LoanFactory::labels().any(|l| l == kind.label()));
        }
    }

    #[test]
    fn test_create_revalidates_terms() {
        let err = LoanFactory::create("annuity", shared(1_000), Rate::ONE, 12).unwrap_err();
        assert!(matches!(err, LoanError::RateOutOfRange { .. }));

        let err = LoanFactory::create("annuity", shared(1_000), Rate::from_percentage(3), 0).unwrap_err();
        assert!(matches!(err, LoanError::NonPositivePeriods { .. }));
    }

    #[test]
    fn test_builder_requires_every_term() {
        let rate = Rate::from_percentage(2);
        assert!(LoanBuilder::new().account(shared(10)).rate(rate).periods(3).build().is_err());
        assert!(LoanBuilder::new().kind(LoanKind::Annuity).rate(rate).periods(3).build().is_err());
        assert!(LoanBuilder::new().kind(LoanKind::Annuity).account(shared(10)).rate(rate).build().is_err());

        let err = LoanBuilder::new()
            .kind(LoanKind::Annuity)
            .account(shared(10))
            .periods(3)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            LoanError::InvalidConfiguration {
                message: "rate is required".to_string(),
            }
        );

        let loan = LoanBuilder::new()
            .label("americano")
            .account(shared(10))
            .rate(Rate::from_percentage(2))
            .periods(6)
            .strategy(Box::new(Annuity))
            .build()
            .unwrap();
        assert_eq!(loan.kind(), LoanKind::InterestOnly);
        assert_eq!(loan.strategy().name(), "annuity");
    }

    // reference scenario: balance 1000, 3% per period, 12 periods, 10000 requested

    #[test]
    fn test_scenario_constant_amortization() {
        let loan = LoanFactory::create("constant-amortization", shared(1_000), Rate::from_percentage(3), 12).unwrap();
        let summary = loan.summary(Money::from_major(10_000)).unwrap();

        assert_eq!(summary.loan_type, "ConstantAmortizationLoan");
        assert_eq!(summary.strategy, "constant-amortization");
        assert_eq!(summary.approved_principal, Money::from_major(2_000));
        assert_eq!(summary.approval, ApprovalOutcome::Partial);

        let first = &summary.schedule[0];
        assert_eq!(first.interest, Money::from_major(60));
        assert_eq!(first.amortization.round_dp(3), Money::from_decimal(dec!(166.667)));
        assert_eq!(first.payment.round_dp(3), Money::from_decimal(dec!(226.667)));

        // 12 * 2000/12 principal plus 0.03 * 2000 * (12 + 11 + ... + 1) / 12 interest
        assert!(close(summary.total_interest, Money::from_major(390)));
        assert!(close(summary.total_paid, Money::from_major(2_390)));
    }

    #[test]
    fn test_scenario_interest_only() {
        let loan = LoanFactory::create("americano", shared(1_000), Rate::from_percentage(3), 12).unwrap();
        let summary = loan.summary(Money::from_major(10_000)).unwrap();

        assert_eq!(summary.loan_type, "InterestOnlyLoan");
        assert_eq!(summary.approved_principal, Money::from_major(1_500));
        for row in &summary.schedule[..11] {
            assert_eq!(row.payment, Money::from_major(45));
        }
        assert_eq!(summary.schedule[11].payment, Money::from_major(1_545));
        assert_eq!(summary.total_paid, Money::from_major(2_040));
    }

    #[test]
    fn test_scenario_annuity() {
        let loan = LoanFactory::create("Francés", shared(1_000), Rate::from_percentage(3), 12).unwrap();
        let summary = loan.summary(Money::from_major(10_000)).unwrap();

        assert_eq!(summary.loan_type, "AnnuityLoan");
        assert_eq!(summary.approved_principal, Money::from_major(3_000));

        let payment = level_payment(Money::from_major(3_000), Rate::from_percentage(3), 12).unwrap();
        assert_eq!(summary.schedule.len(), 12);
        assert!(summary.schedule.iter().all(|r| close(r.payment, payment)));
        assert!(close(summary.total_paid, payment * dec!(12)));
    }

    #[test]
    fn test_request_under_limit_is_fully_approved() {
        let loan = LoanFactory::create("annuity", shared(1_000), Rate::from_percentage(3), 12).unwrap();
        let summary = loan.summary(Money::from_major(1_200)).unwrap();
        assert_eq!(summary.approved_principal, Money::from_major(1_200));
        assert_eq!(summary.approval, ApprovalOutcome::Full);
    }
}
