//! serializable summary of a loan request
use serde::{Deserialize, Serialize};

use crate::amortization::{AmortizationSchedule, ScheduleRow};
use crate::decimal::{Money, Rate};
use crate::types::{Approval, ApprovalOutcome, LoanKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanSummary {
    #[serde(rename = "type")]
    pub loan_type: String,
    pub strategy: String,
    pub approved_principal: Money,
    pub approval: ApprovalOutcome,
    pub periods: u32,
    pub rate: Rate,
    pub total_paid: Money,
    pub total_interest: Money,
    pub schedule: Vec<ScheduleRow>,
}

impl LoanSummary {
    pub fn new(kind: LoanKind, approval: &Approval, schedule: AmortizationSchedule) -> Self {
        LoanSummary {
            loan_type: kind.type_name().to_string(),
            strategy: schedule.strategy,
            approved_principal: approval.approved,
            approval: approval.outcome,
            periods: schedule.periods,
            rate: schedule.rate,
            total_paid: schedule.total_paid,
            total_interest: schedule.total_interest,
            schedule: schedule.rows,
        }
    }

    /// first `n` rows, for console previews
    pub fn preview(&self, n: usize) -> &[ScheduleRow] {
        &self.schedule[..n.min(self.schedule.len())]
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
