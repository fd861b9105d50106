//! Lifecycle engine - date-derived classification and projection.
//!
//! Pure functions of (agreement, today). The caller injects "today"; this
//! module never reads a clock, so every result is deterministic and safe to
//! recompute on every render.
//!
//! Derived flags are intentionally independent of the stored status: a
//! record can say `active` while its dates say expired, and screens display
//! both without reconciling them.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use super::{recurrence, BillingCycle, ServiceAgreement};

/// Days before the renewal date at which the UI starts warning.
pub const RENEWAL_WARNING_DAYS: u64 = 30;

/// Days before the next invoice date at which the UI starts warning.
pub const INVOICE_WARNING_DAYS: u64 = 14;

/// Display-only urgency of an upcoming renewal date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenewalAlert {
    /// No renewal date, or it is comfortably in the future.
    None,
    /// Renewal date is in the future but within 30 days.
    ComingSoon,
    /// Renewal date is strictly in the past.
    Overdue,
}

/// Display-only urgency of the next invoice date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceAlert {
    /// No next invoice, or it is comfortably in the future.
    None,
    /// Next invoice is due within 14 days.
    ComingSoon,
    /// Invoice date is strictly in the past.
    Overdue,
}

/// Date-derived view of an agreement at a given "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// An end date exists and lies strictly in the past.
    pub is_expired: bool,
    /// A renewal date exists and has arrived or passed.
    pub is_pending_renewal: bool,
    /// Stored status says active.
    pub is_active: bool,
    /// Stored status says canceled.
    pub is_canceled: bool,
    /// Next invoice occurrence, when the agreement is actually invoiceable.
    pub next_invoice_date: Option<NaiveDate>,
    /// UI urgency of the renewal date.
    pub renewal_alert: RenewalAlert,
    /// UI urgency of the next invoice date.
    pub invoice_alert: InvoiceAlert,
}

/// Projected dates for a period starting at a given date, used to prefill
/// the renewal form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Projection {
    /// End of the projected period (start itself for one-time).
    pub projected_end_date: Option<NaiveDate>,
    /// Suggested renewal review date (none for one-time).
    pub projected_renewal_date: Option<NaiveDate>,
}

/// Classifies an agreement against an injected "today" date.
pub fn classify(agreement: &ServiceAgreement, today: NaiveDate) -> Classification {
    let is_expired = agreement.end_date.is_some_and(|end| today > end);
    let is_pending_renewal = agreement
        .renewal_date
        .is_some_and(|renewal| today >= renewal);
    let is_active = agreement.status == super::AgreementStatus::Active;
    let is_canceled = agreement.status == super::AgreementStatus::Canceled;

    // Invoicing is gated on the effective state, not just the stored one:
    // an expired-by-dates agreement produces no next invoice even while
    // its stored status still says active.
    let next_invoice_date = if is_active && !is_expired && !is_canceled {
        recurrence::next_occurrence_on_or_after(
            agreement.start_date,
            agreement.billing_cycle,
            today,
        )
    } else {
        None
    };

    Classification {
        is_expired,
        is_pending_renewal,
        is_active,
        is_canceled,
        next_invoice_date,
        renewal_alert: renewal_alert(agreement.renewal_date, today),
        invoice_alert: invoice_alert(next_invoice_date, today),
    }
}

/// Projects end and renewal dates for a period starting at `start`.
pub fn project(start: NaiveDate, cycle: BillingCycle) -> Projection {
    Projection {
        projected_end_date: recurrence::projected_end_date(start, cycle),
        projected_renewal_date: recurrence::projected_renewal_date(start, cycle),
    }
}

fn renewal_alert(renewal_date: Option<NaiveDate>, today: NaiveDate) -> RenewalAlert {
    let Some(renewal) = renewal_date else {
        return RenewalAlert::None;
    };
    if renewal < today {
        RenewalAlert::Overdue
    } else if renewal > today && within_days(today, renewal, RENEWAL_WARNING_DAYS) {
        RenewalAlert::ComingSoon
    } else {
        RenewalAlert::None
    }
}

fn invoice_alert(next_invoice_date: Option<NaiveDate>, today: NaiveDate) -> InvoiceAlert {
    let Some(invoice) = next_invoice_date else {
        return InvoiceAlert::None;
    };
    if invoice < today {
        InvoiceAlert::Overdue
    } else if within_days(today, invoice, INVOICE_WARNING_DAYS) {
        InvoiceAlert::ComingSoon
    } else {
        InvoiceAlert::None
    }
}

fn within_days(today: NaiveDate, target: NaiveDate, days: u64) -> bool {
    match today.checked_add_days(Days::new(days)) {
        Some(horizon) => target <= horizon,
        None => false,
    }
}
