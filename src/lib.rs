pub mod account;
pub mod amortization;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod events;
pub mod factory;
pub mod loan;
pub mod summary;
pub mod types;

// re-export key types
pub use account::{Account, SharedAccount, TransactionOutcome};
pub use amortization::{
    AmortizationSchedule, AmortizationStrategy, Annuity, ConstantAmortization, InterestOnly,
    ScheduleRow,
};
pub use config::{LoanConfig, QuoteConfig};
pub use decimal::{Money, Rate};
pub use errors::{LoanError, Result};
pub use events::{Event, EventStore};
pub use factory::{LoanBuilder, LoanFactory};
pub use loan::Loan;
pub use summary::LoanSummary;
pub use types::{Approval, ApprovalOutcome, LoanId, LoanKind};

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
