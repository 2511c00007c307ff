use rust_decimal::Decimal;

use crate::amortization::{validate_terms, AmortizationStrategy, ScheduleRow};
use crate::decimal::{Money, Rate};
use crate::errors::{LoanError, Result};

/// french system: a level payment every period, interest shrinking and
/// amortization growing as the balance falls
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Annuity;

impl AmortizationStrategy for Annuity {
    fn name(&self) -> &'static str {
        "annuity"
    }

    fn build_schedule(&self, principal: Money, rate: Rate, periods: u32) -> Result<Vec<ScheduleRow>> {
        validate_terms(principal, rate, periods)?;

        let payment = level_payment(principal, rate, periods)?;
        let mut remaining = principal;
        let mut rows = Vec::with_capacity(periods as usize);

        for period in 1..=periods {
            let interest = remaining.interest_at(rate);
            let amortization = payment - interest;
            remaining = if period == periods {
                Money::ZERO
            } else {
                (remaining - amortization).floor_zero()
            };
            rows.push(ScheduleRow::new(period, interest, amortization, remaining));
        }

        Ok(rows)
    }
}

/// level payment A = P * r / (1 - (1 + r)^-n); a zero rate degrades to P / n
pub fn level_payment(principal: Money, rate: Rate, periods: u32) -> Result<Money> {
    if periods == 0 {
        return Err(LoanError::NonPositivePeriods { periods: 0 });
    }
    if rate.is_zero() {
        return Ok(principal / Decimal::from(periods));
    }

    // rewritten as P * r * c / (c - 1) with c = (1 + r)^n
    let r = rate.as_decimal();
    let base = Decimal::ONE + r;
    let mut compound = Decimal::ONE;
    for _ in 0..periods {
        compound = compound.checked_mul(base).ok_or_else(|| LoanError::CalculationError {
            message: format!("compounding factor overflows at rate {} over {} periods", rate, periods),
        })?;
    }

    let numerator = principal
        .checked_mul(r)
        .and_then(|m| m.checked_mul(compound))
        .ok_or_else(|| LoanError::CalculationError {
            message: format!("level payment overflows for principal {}", principal),
        })?;

    Ok(numerator / (compound - Decimal::ONE))
}
