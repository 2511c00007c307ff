use rust_decimal::Decimal;

use crate::amortization::{validate_terms, AmortizationStrategy, ScheduleRow};
use crate::decimal::{Money, Rate};
use crate::errors::Result;

/// german system: principal / periods repaid every period, interest on the
/// outstanding balance, so payments decrease over time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConstantAmortization;

impl AmortizationStrategy for ConstantAmortization {
    fn name(&self) -> &'static str {
        "constant-amortization"
    }

    fn build_schedule(&self, principal: Money, rate: Rate, periods: u32) -> Result<Vec<ScheduleRow>> {
        validate_terms(principal, rate, periods)?;

        let amortization = principal / Decimal::from(periods);
        let mut remaining = principal;
        let mut rows = Vec::with_capacity(periods as usize);

        for period in 1..=periods {
            let interest = remaining.interest_at(rate);
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
