//! Payment status classification
//!
//! Maps the payment state of a bill onto the label and severity shown in
//! its status badge. The mapping is total: values outside the known set are
//! echoed back with a neutral severity instead of being rejected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Payment state of a single bill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    Paid,
    Overdue,
    UpcomingDue,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 3] = [
        PaymentStatus::Paid,
        PaymentStatus::Overdue,
        PaymentStatus::UpcomingDue,
    ];

    /// Name used on the wire and in the JSON API
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Overdue => "Overdue",
            PaymentStatus::UpcomingDue => "UpcomingDue",
        }
    }

    /// Human readable badge label
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Overdue => "Overdue",
            PaymentStatus::UpcomingDue => "Upcoming Due",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            PaymentStatus::Paid => Severity::Success,
            PaymentStatus::Overdue => Severity::Danger,
            PaymentStatus::UpcomingDue => Severity::Warning,
        }
    }

    pub fn presentation(&self) -> StatusPresentation {
        StatusPresentation {
            label: self.label().to_string(),
            severity: self.severity(),
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known payment status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown payment status: {}", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for PaymentStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Paid" => Ok(PaymentStatus::Paid),
            "Overdue" => Ok(PaymentStatus::Overdue),
            "UpcomingDue" => Ok(PaymentStatus::UpcomingDue),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Visual urgency of a badge, independent of any concrete styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Danger,
    Warning,
    Neutral,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Danger => "danger",
            Severity::Warning => "warning",
            Severity::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label and severity to render for a status value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPresentation {
    pub label: String,
    pub severity: Severity,
}

/// Classify a raw status value.
///
/// Unrecognized values keep their raw text as the label and get
/// [`Severity::Neutral`].
pub fn classify(status: &str) -> StatusPresentation {
    match status.parse::<PaymentStatus>() {
        Ok(known) => known.presentation(),
        Err(UnknownStatus(raw)) => StatusPresentation {
            label: raw,
            severity: Severity::Neutral,
        },
    }
}
