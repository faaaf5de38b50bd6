//! Household bills and their payment status

use chrono::NaiveDate;
use hearth_app::api::BillResponse;
use hearth_app::PaymentStatus;
use serde::{Deserialize, Serialize};

use crate::config::BillConfig;

/// A bill tracked by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bill {
    pub id: String,
    pub name: String,
    pub payee: Option<String>,
    pub amount_cents: i64,
    pub due_date: NaiveDate,
    pub paid: bool,
}

impl From<BillConfig> for Bill {
    fn from(config: BillConfig) -> Self {
        Self {
            id: config.id,
            name: config.name,
            payee: config.payee,
            amount_cents: config.amount_cents,
            due_date: config.due_date,
            paid: config.paid,
        }
    }
}

impl Bill {
    /// Payment status of this bill as of `today`
    pub fn status(&self, today: NaiveDate) -> PaymentStatus {
        derive_status(self.paid, self.due_date, today)
    }

    pub fn to_response(&self, today: NaiveDate) -> BillResponse {
        BillResponse {
            id: self.id.clone(),
            name: self.name.clone(),
            payee: self.payee.clone(),
            amount_cents: self.amount_cents,
            due_date: self.due_date.format("%Y-%m-%d").to_string(),
            status: self.status(today).to_string(),
        }
    }
}

/// A paid bill is `Paid`; an unpaid bill is `Overdue` once its due date has
/// passed and `UpcomingDue` until then, including on the due date itself.
pub fn derive_status(paid: bool, due_date: NaiveDate, today: NaiveDate) -> PaymentStatus {
    if paid {
        PaymentStatus::Paid
    } else if due_date < today {
        PaymentStatus::Overdue
    } else {
        PaymentStatus::UpcomingDue
    }
}
