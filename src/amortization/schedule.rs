use serde::{Deserialize, Serialize};

use crate::amortization::AmortizationStrategy;
use crate::decimal::{Money, Rate};
use crate::errors::Result;

/// one period of a repayment schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub period: u32,
    pub payment: Money,
    pub interest: Money,
    pub amortization: Money,
    pub remaining: Money,
}

impl ScheduleRow {
    /// build a row; payment is always the sum of its two portions
    pub fn new(period: u32, interest: Money, amortization: Money, remaining: Money) -> Self {
        Self {
            period,
            payment: interest + amortization,
            interest,
            amortization,
            remaining: remaining.floor_zero(),
        }
    }
}

/// a generated schedule with its running totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub strategy: String,
    pub principal: Money,
    pub rate: Rate,
    pub periods: u32,
    pub rows: Vec<ScheduleRow>,
    pub total_paid: Money,
    pub total_interest: Money,
}

impl AmortizationSchedule {
    /// generate payment schedule
    pub fn generate(
        strategy: &dyn AmortizationStrategy,
        principal: Money,
        rate: Rate,
        periods: u32,
    ) -> Result<Self> {
        let rows = strategy.build_schedule(principal, rate, periods)?;
        Ok(Self::from_rows(strategy.name(), principal, rate, periods, rows))
    }

    pub fn from_rows(
        strategy: &str,
        principal: Money,
        rate: Rate,
        periods: u32,
        rows: Vec<ScheduleRow>,
    ) -> Self {
        let total_paid: Money = rows.iter().map(|r| r.payment).sum();
        let total_interest: Money = rows.iter().map(|r| r.interest).sum();

        Self {
            strategy: strategy.to_string(),
            principal,
            rate,
            periods,
            rows,
            total_paid,
            total_interest,
        }
    }

    /// sum of all principal portions
    pub fn total_amortization(&self) -> Money {
        self.rows.iter().map(|r| r.amortization).sum()
    }

    /// get row for specific period (1-based)
    pub fn row(&self, period: u32) -> Option<&ScheduleRow> {
        period
            .checked_sub(1)
            .and_then(|idx| self.rows.get(idx as usize))
    }

    /// remaining principal after the given period; period 0 is the start
    pub fn remaining_after(&self, period: u32) -> Money {
        self.row(period)
            .map(|r| r.remaining)
            .unwrap_or(if period == 0 { self.principal } else { Money::ZERO })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amortization::InterestOnly;

    #[test]
    fn test_row_payment_is_sum_of_portions() {
        let row = ScheduleRow::new(3, Money::from_major(45), Money::from_major(100), Money::from_major(900));
        assert_eq!(row.payment, Money::from_major(145));
    }

    #[test]
    fn test_row_clamps_remaining() {
        let row = ScheduleRow::new(1, Money::ZERO, Money::from_major(10), Money::from_major(-1));
        assert_eq!(row.remaining, Money::ZERO);
    }

    #[test]
    fn test_generate_totals() {
        let schedule = AmortizationSchedule::generate(
            &InterestOnly,
            Money::from_major(1_500),
            Rate::from_percentage(3),
            12,
        )
        .unwrap();

        assert_eq!(schedule.strategy, "interest-only");
        assert_eq!(schedule.len(), 12);
        assert_eq!(schedule.total_interest, Money::from_major(540));
        assert_eq!(schedule.total_paid, Money::from_major(2_040));
        assert_eq!(schedule.total_amortization(), Money::from_major(1_500));
    }

    #[test]
    fn test_row_lookup() {
        let schedule = AmortizationSchedule::generate(
            &InterestOnly,
            Money::from_major(1_500),
            Rate::from_percentage(3),
            12,
        )
        .unwrap();

        assert!(schedule.row(0).is_none());
        assert_eq!(schedule.row(1).unwrap().period, 1);
        assert!(schedule.row(13).is_none());
        assert_eq!(schedule.remaining_after(0), Money::from_major(1_500));
        assert_eq!(schedule.remaining_after(11), Money::from_major(1_500));
        assert_eq!(schedule.remaining_after(12), Money::ZERO);
    }
}
