//! Shared in-memory bill state

use std::sync::Arc;

use chrono::NaiveDate;
use hearth_app::api::SummaryResponse;
use hearth_app::PaymentStatus;
use tokio::sync::RwLock;

use crate::bill::Bill;
use crate::config::HouseholdConfig;

/// Bills shared between the dashboard handlers
#[derive(Debug)]
pub struct SharedState {
    pub household: HouseholdConfig,
    pub bills: Vec<Bill>,
}

impl SharedState {
    pub fn new(household: HouseholdConfig, bills: Vec<Bill>) -> Self {
        Self { household, bills }
    }

    pub fn get_bill(&self, id: &str) -> Option<&Bill> {
        self.bills.iter().find(|b| b.id == id)
    }

    /// Mark a bill as paid, returning false if no bill has this id
    pub fn mark_paid(&mut self, id: &str) -> bool {
        if let Some(bill) = self.bills.iter_mut().find(|b| b.id == id) {
            bill.paid = true;
            true
        } else {
            false
        }
    }

    /// Per-status counts and the total still owed as of `today`
    pub fn summary(&self, today: NaiveDate) -> SummaryResponse {
        let mut summary = SummaryResponse {
            household: self.household.name.clone(),
            currency: self.household.currency.clone(),
            total_bills: self.bills.len(),
            ..SummaryResponse::default()
        };
        for bill in &self.bills {
            match bill.status(today) {
                PaymentStatus::Paid => summary.paid += 1,
                PaymentStatus::Overdue => summary.overdue += 1,
                PaymentStatus::UpcomingDue => summary.upcoming_due += 1,
            }
            if !bill.paid {
                summary.outstanding_cents =
                    summary.outstanding_cents.saturating_add(bill.amount_cents);
            }
        }
        summary
    }
}

/// Thread-safe shared state handle
pub type StateHandle = Arc<RwLock<SharedState>>;

pub fn new_state_handle(household: HouseholdConfig, bills: Vec<Bill>) -> StateHandle {
    Arc::new(RwLock::new(SharedState::new(household, bills)))
}
