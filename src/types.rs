use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::amortization::{Annuity, AmortizationStrategy, ConstantAmortization, InterestOnly};
use crate::decimal::Money;

/// unique identifier for a loan
pub type LoanId = Uuid;

/// loan variants, one per repayment system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoanKind {
    /// fixed principal reduction, decreasing payments (german system)
    ConstantAmortization,
    /// interest every period, principal at maturity (american system)
    InterestOnly,
    /// level payment every period (french system)
    Annuity,
}

impl LoanKind {
    pub const ALL: [LoanKind; 3] = [
        LoanKind::ConstantAmortization,
        LoanKind::InterestOnly,
        LoanKind::Annuity,
    ];

    /// canonical label accepted by the factory
    pub fn label(&self) -> &'static str {
        match self {
            LoanKind::ConstantAmortization => "constant-amortization",
            LoanKind::InterestOnly => "interest-only",
            LoanKind::Annuity => "annuity",
        }
    }

    /// display name of the concrete loan variant
    pub fn type_name(&self) -> &'static str {
        match self {
            LoanKind::ConstantAmortization => "ConstantAmortizationLoan",
            LoanKind::InterestOnly => "InterestOnlyLoan",
            LoanKind::Annuity => "AnnuityLoan",
        }
    }

    /// balance multiplier bounding the approvable principal
    pub fn approval_multiplier(&self) -> Decimal {
        match self {
            LoanKind::ConstantAmortization => dec!(2.0),
            // the bullet payment at maturity warrants a tighter limit
            LoanKind::InterestOnly => dec!(1.5),
            LoanKind::Annuity => dec!(3.0),
        }
    }

    /// strategy a freshly created loan of this kind is bound to
    pub fn default_strategy(&self) -> Box<dyn AmortizationStrategy> {
        match self {
            LoanKind::ConstantAmortization => Box::new(ConstantAmortization),
            LoanKind::InterestOnly => Box::new(InterestOnly),
            LoanKind::Annuity => Box::new(Annuity),
        }
    }
}

impl fmt::Display for LoanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// whether the full request was approved or clamped to the account limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApprovalOutcome {
    Full,
    Partial,
}

/// result of sizing a request against the balance-derived limit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Approval {
    pub requested: Money,
    pub approved: Money,
    pub max_allowed: Money,
    pub outcome: ApprovalOutcome,
}

impl Approval {
    pub fn is_partial(&self) -> bool {
        self.outcome == ApprovalOutcome::Partial
    }

    /// amount of the request left unfinanced
    pub fn shortfall(&self) -> Money {
        (self.requested - self.approved).floor_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multipliers_per_kind() {
        assert_eq!(LoanKind::ConstantAmortization.approval_multiplier(), dec!(2));
        assert_eq!(LoanKind::InterestOnly.approval_multiplier(), dec!(1.5));
        assert_eq!(LoanKind::Annuity.approval_multiplier(), dec!(3));
    }

    #[test]
    fn test_default_strategy_matches_label() {
        for kind in LoanKind::ALL {
            assert_eq!(kind.default_strategy().name(), kind.label());
        }
    }

    #[test]
    fn test_approval_shortfall() {
        let approval = Approval {
            requested: Money::from_major(10_000),
            approved: Money::from_major(2_000),
            max_allowed: Money::from_major(2_000),
            outcome: ApprovalOutcome::Partial,
        };
        assert!(approval.is_partial());
        assert_eq!(approval.shortfall(), Money::from_major(8_000));
    }
}
