use crate::amortization::{validate_terms, AmortizationStrategy, ScheduleRow};
use crate::decimal::{Money, Rate};
use crate::errors::Result;

/// american system: flat interest payments, then a bullet repaying the
/// whole principal with the last interest payment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InterestOnly;

impl AmortizationStrategy for InterestOnly {
    fn name(&self) -> &'static str {
        "interest-only"
    }

    fn build_schedule(&self, principal: Money, rate: Rate, periods: u32) -> Result<Vec<ScheduleRow>> {
        validate_terms(principal, rate, periods)?;

        let interest = principal.interest_at(rate);
        let mut rows: Vec<ScheduleRow> = (1..periods)
            .map(|period| ScheduleRow::new(period, interest, Money::ZERO, principal))
            .collect();

        // bullet
        rows.push(ScheduleRow::new(periods, interest, principal, Money::ZERO));

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_bullet_loan() {
        let principal = Money::from_major(1_500);
        let rows = InterestOnly
            .build_schedule(principal, Rate::from_percentage(3), 12)
            .unwrap();

        for row in &rows[..11] {
            assert_eq!(row.payment, Money::from_major(45));
            assert_eq!(row.amortization, Money::ZERO);
            assert_eq!(row.remaining, principal);
        }

        let last = &rows[11];
        assert_eq!(last.period, 12);
        assert_eq!(last.payment, Money::from_major(1_545));
        assert_eq!(last.amortization, principal);
        assert_eq!(last.remaining, Money::ZERO);
    }

    #[test]
    fn test_single_period_is_just_the_bullet() {
        let rows = InterestOnly
            .build_schedule(Money::from_major(1_000), Rate::from_percentage(4), 1)
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].period, 1);
        assert_eq!(rows[0].interest, Money::from_major(40));
        assert_eq!(rows[0].amortization, Money::from_major(1_000));
        assert_eq!(rows[0].payment, Money::from_major(1_040));
        assert_eq!(rows[0].remaining, Money::ZERO);
    }
}
