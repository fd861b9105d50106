//! Billing cycle definitions.
//!
//! The cadence governing how often an agreement is invoiced and renewed.

use serde::{Deserialize, Serialize};

/// Billing cadence of a service agreement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingCycle {
    /// Invoiced every calendar month.
    Monthly,

    /// Invoiced every three months.
    Quarterly,

    /// Invoiced every six months.
    Biannually,

    /// Invoiced every calendar year.
    Annually,

    /// Single non-recurring charge. No renewal, no next invoice.
    OneTime,
}

impl BillingCycle {
    /// Returns the number of calendar months in one billing period,
    /// or `None` for the degenerate one-time cycle.
    ///
    /// Returning `Option` here is what keeps one-time agreements out of
    /// the recurrence arithmetic entirely.
    pub fn months_per_period(&self) -> Option<u32> {
        match self {
            BillingCycle::Monthly => Some(1),
            BillingCycle::Quarterly => Some(3),
            BillingCycle::Biannually => Some(6),
            BillingCycle::Annually => Some(12),
            BillingCycle::OneTime => None,
        }
    }

    /// Returns true if this cycle produces recurring invoices.
    pub fn is_recurring(&self) -> bool {
        !matches!(self, BillingCycle::OneTime)
    }

    /// Returns the storage string for this cycle.
    pub fn as_str(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "monthly",
            BillingCycle::Quarterly => "quarterly",
            BillingCycle::Biannually => "biannually",
            BillingCycle::Annually => "annually",
            BillingCycle::OneTime => "one_time",
        }
    }

    /// Returns the display name for this cycle.
    pub fn display_name(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "Monthly",
            BillingCycle::Quarterly => "Quarterly",
            BillingCycle::Biannually => "Biannually",
            BillingCycle::Annually => "Annually",
            BillingCycle::OneTime => "One-time",
        }
    }
}

impl std::fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
