use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::account::SharedAccount;
use crate::amortization::{AmortizationSchedule, AmortizationStrategy, ScheduleRow};
use crate::decimal::{Money, Rate};
use crate::errors::{LoanError, Result};
use crate::events::{Event, EventStore};
use crate::summary::LoanSummary;
use crate::types::{Approval, ApprovalOutcome, LoanId, LoanKind};

/// a loan drawn against an account, repaid under a swappable strategy
#[derive(Debug)]
pub struct Loan {
    pub id: LoanId,
    kind: LoanKind,
    account: SharedAccount,
    rate: Rate,
    periods: u32,
    strategy: Box<dyn AmortizationStrategy>,
    events: EventStore,
}

impl Loan {
    /// create a loan bound to the kind's default strategy
    pub fn new(kind: LoanKind, account: SharedAccount, rate: Rate, periods: u32) -> Result<Self> {
        Self::with_strategy(kind, account, rate, periods, kind.default_strategy())
    }

    /// create a loan with an explicit strategy
    pub fn with_strategy(
        kind: LoanKind,
        account: SharedAccount,
        rate: Rate,
        periods: u32,
        strategy: Box<dyn AmortizationStrategy>,
    ) -> Result<Self> {
        validate_rate(rate)?;
        validate_periods(periods)?;

        let loan = Self {
            id: Uuid::new_v4(),
            kind,
            account,
            rate,
            periods,
            strategy,
            events: EventStore::new(),
        };

        tracing::debug!(
            loan_id = %loan.id,
            kind = %kind,
            rate = %rate,
            periods,
            strategy = loan.strategy.name(),
            "loan created"
        );

        Ok(loan)
    }

    pub fn kind(&self) -> LoanKind {
        self.kind
    }

    pub fn account(&self) -> &SharedAccount {
        &self.account
    }

    pub fn rate(&self) -> Rate {
        self.rate
    }

    pub fn periods(&self) -> u32 {
        self.periods
    }

    pub fn strategy(&self) -> &dyn AmortizationStrategy {
        self.strategy.as_ref()
    }

    pub fn events(&self) -> &[Event] {
        self.events.events()
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        self.events.take_events()
    }

    /// change the per-period rate; rejected values leave the loan untouched
    pub fn set_rate(&mut self, rate: Rate) -> Result<()> {
        validate_rate(rate)?;
        let old_rate = self.rate;
        self.rate = rate;

        self.events.emit(Event::RateChanged {
            loan_id: self.id,
            old_rate,
            new_rate: rate,
            timestamp: Utc::now(),
        });
        Ok(())
    }

    /// change the number of periods; rejected values leave the loan untouched
    pub fn set_periods(&mut self, periods: u32) -> Result<()> {
        validate_periods(periods)?;
        let old_periods = self.periods;
        self.periods = periods;

        self.events.emit(Event::PeriodsChanged {
            loan_id: self.id,
            old_periods,
            new_periods: periods,
            timestamp: Utc::now(),
        });
        Ok(())
    }

    /// swap the repayment strategy at runtime
    pub fn set_strategy(&mut self, strategy: Box<dyn AmortizationStrategy>) {
        let old_strategy = self.strategy.name();
        let new_strategy = strategy.name();
        self.strategy = strategy;

        tracing::debug!(loan_id = %self.id, old_strategy, new_strategy, "strategy changed");
        self.events.emit(Event::StrategyChanged {
            loan_id: self.id,
            old_strategy: old_strategy.to_string(),
            new_strategy: new_strategy.to_string(),
            timestamp: Utc::now(),
        });
    }

    pub fn approval_multiplier(&self) -> Decimal {
        self.kind.approval_multiplier()
    }

    /// limit derived from the account's current balance
    pub fn max_principal_allowed(&self) -> Result<Money> {
        let balance = self.account.borrow().balance();
        balance
            .checked_mul(self.approval_multiplier())
            .ok_or_else(|| LoanError::CalculationError {
                message: format!(
                    "limit overflows for balance {} at multiplier {}",
                    balance,
                    self.approval_multiplier()
                ),
            })
    }

    /// size a request against the limit
    pub fn approve(&self, requested: Money) -> Result<Approval> {
        let max_allowed = self.max_principal_allowed()?;
        let approved = requested.min(max_allowed);

        if !approved.is_positive() {
            return Err(LoanError::NotFinanceable {
                requested,
                max_allowed,
            });
        }

        let outcome = if approved < requested {
            tracing::warn!(
                loan_id = %self.id,
                requested = %requested,
                approved = %approved,
                "principal clamped to account limit"
            );
            ApprovalOutcome::Partial
        } else {
            ApprovalOutcome::Full
        };

        Ok(Approval {
            requested,
            approved,
            max_allowed,
            outcome,
        })
    }

    /// schedule rows for the approved part of the request
    pub fn build_schedule(&self, requested: Money) -> Result<Vec<ScheduleRow>> {
        Ok(self.schedule(requested)?.rows)
    }

    /// full schedule with totals for the approved part of the request
    pub fn schedule(&self, requested: Money) -> Result<AmortizationSchedule> {
        let approval = self.approve(requested)?;
        self.schedule_for(&approval)
    }

    fn schedule_for(&self, approval: &Approval) -> Result<AmortizationSchedule> {
        let schedule = AmortizationSchedule::generate(
            self.strategy.as_ref(),
            approval.approved,
            self.rate,
            self.periods,
        )?;

        tracing::debug!(
            loan_id = %self.id,
            strategy = self.strategy.name(),
            principal = %approval.approved,
            periods = self.periods,
            "schedule built"
        );

        Ok(schedule)
    }

    /// aggregate view of the loan for a request; moves no money
    pub fn summary(&self, requested: Money) -> Result<LoanSummary> {
        let approval = self.approve(requested)?;
        let schedule = self.schedule_for(&approval)?;
        Ok(LoanSummary::new(self.kind, &approval, schedule))
    }
}

fn validate_rate(rate: Rate) -> Result<()> {
    if !rate.is_per_period() {
        return Err(LoanError::RateOutOfRange { rate });
    }
    Ok(())
}

fn validate_periods(periods: u32) -> Result<()> {
    if periods == 0 {
        return Err(LoanError::NonPositivePeriods { periods: 0 });
    }
    Ok(())
}
