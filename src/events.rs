use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::types::LoanId;

/// all events that can be emitted by an account or a loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    // account events
    Deposited {
        owner: String,
        amount: Money,
        new_balance: Money,
        timestamp: DateTime<Utc>,
    },
    Withdrawn {
        owner: String,
        amount: Money,
        new_balance: Money,
        timestamp: DateTime<Utc>,
    },
    DepositRejected {
        owner: String,
        amount: Money,
        reason: String,
        timestamp: DateTime<Utc>,
    },
    WithdrawalRejected {
        owner: String,
        amount: Money,
        reason: String,
        timestamp: DateTime<Utc>,
    },
    BalanceSet {
        owner: String,
        old_balance: Money,
        new_balance: Money,
        timestamp: DateTime<Utc>,
    },

    // loan term events
    RateChanged {
        loan_id: LoanId,
        old_rate: Rate,
        new_rate: Rate,
        timestamp: DateTime<Utc>,
    },
    PeriodsChanged {
        loan_id: LoanId,
        old_periods: u32,
        new_periods: u32,
        timestamp: DateTime<Utc>,
    },
    StrategyChanged {
        loan_id: LoanId,
        old_strategy: String,
        new_strategy: String,
        timestamp: DateTime<Utc>,
    },
}

/// event store for collecting events during operations
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
        }
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_take_events_drains_store() {
        let mut store = EventStore::new();
        store.emit(Event::PeriodsChanged {
            loan_id: Uuid::new_v4(),
            old_periods: 12,
            new_periods: 24,
            timestamp: Utc::now(),
        });
        assert_eq!(store.len(), 1);

        let taken = store.take_events();
        assert_eq!(taken.len(), 1);
        assert!(store.is_empty());
    }

    #[test]
    fn test_event_serializes_with_variant_tag() {
        let event = Event::Deposited {
            owner: "mauricio".to_string(),
            amount: Money::from_major(500),
            new_balance: Money::from_major(1_500),
            timestamp: Utc::now(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"Deposited\""));
        assert!(json.contains("\"new_balance\":\"1500\""));
    }
}
