pub mod annuity;
pub mod constant;
pub mod interest_only;
pub mod schedule;

use rust_decimal::Decimal;
use std::fmt;

use crate::decimal::{Money, Rate};
use crate::errors::{LoanError, Result};

pub use annuity::{level_payment, Annuity};
pub use constant::ConstantAmortization;
pub use interest_only::InterestOnly;
pub use schedule::{AmortizationSchedule, ScheduleRow};

/// a repayment system: turns loan terms into a period-by-period schedule
///
/// implementations are stateless and must return exactly `periods` rows,
/// numbered contiguously from 1, with `payment == interest + amortization`
/// on every row and `remaining` never negative.
pub trait AmortizationStrategy: fmt::Debug {
    /// tag used for display and lookup
    fn name(&self) -> &'static str;

    fn build_schedule(&self, principal: Money, rate: Rate, periods: u32) -> Result<Vec<ScheduleRow>>;
}

/// check the inputs every strategy shares
///
/// every schedule repays at most `principal * (1 + rate * periods)`, the
/// interest-only total; that bound must fit the decimal range.
pub fn validate_terms(principal: Money, rate: Rate, periods: u32) -> Result<()> {
    if !principal.is_positive() {
        return Err(LoanError::NonPositivePrincipal { principal });
    }
    if !rate.is_per_period() {
        return Err(LoanError::RateOutOfRange { rate });
    }
    if periods == 0 {
        return Err(LoanError::NonPositivePeriods { periods: 0 });
    }

    let ceiling = Decimal::ONE + rate.as_decimal() * Decimal::from(periods);
    if principal.checked_mul(ceiling).is_none() {
        return Err(LoanError::CalculationError {
            message: format!(
                "repayment of {} at {} over {} periods exceeds the decimal range",
                principal, rate, periods
            ),
        });
    }
    Ok(())
}
