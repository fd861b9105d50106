//! ServiceAgreement aggregate entity.
//!
//! The sole entity owned by this crate. Everything else in the CRM
//! (businesses, contacts, users) is referenced by id only.
//!
//! # Design Decisions
//!
//! - **Money in cents**: price is i64 cents behind the `Money` type
//! - **Dates, not timestamps**: billing fields are calendar dates; only
//!   provenance fields carry time of day
//! - **Stored status**: `status` is what a user last saved, never
//!   auto-flipped from date arithmetic

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AgreementId, BusinessId, Money, Timestamp, UserId, ValidationError};

use super::{AgreementStatus, BillingCycle};

/// Service agreement aggregate.
///
/// # Invariants
///
/// - `price` is strictly positive (enforced by `Money`)
/// - `end_date >= start_date` when present
/// - `renewal_date >= start_date` when present
/// - one-time agreements carry no `renewal_date`, and their `end_date`
///   equals `start_date` when set at all
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceAgreement {
    /// Unique identifier, assigned on creation, immutable.
    pub id: AgreementId,

    /// Agreement title shown in listings.
    pub title: String,

    /// Optional free-text description.
    pub description: Option<String>,

    /// Business this agreement belongs to.
    pub business_id: BusinessId,

    /// Stored lifecycle status.
    pub status: AgreementStatus,

    /// User-managed type label. Informational only.
    pub agreement_type: Option<String>,

    /// Date the current period begins.
    pub start_date: NaiveDate,

    /// Date the current period ends. Absent means ongoing.
    pub end_date: Option<NaiveDate>,

    /// Date the agreement should be reviewed for renewal.
    /// Independent of `end_date`.
    pub renewal_date: Option<NaiveDate>,

    /// Price for the current period.
    pub price: Money,

    /// Billing cadence.
    pub billing_cycle: BillingCycle,

    /// User who created the agreement.
    pub created_by: UserId,

    /// When the agreement was created.
    pub created_at: Timestamp,

    /// When the agreement was last updated.
    pub updated_at: Timestamp,
}

impl ServiceAgreement {
    /// Checks the date invariants that `Money` cannot carry.
    ///
    /// Called on construction paths (row mapping, renewal) so an
    /// invariant-violating record never circulates in the domain.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(end) = self.end_date {
            if end < self.start_date {
                return Err(ValidationError::invalid_value(
                    "end_date",
                    "precedes start date",
                ));
            }
        }
        if let Some(renewal) = self.renewal_date {
            if renewal < self.start_date {
                return Err(ValidationError::invalid_value(
                    "renewal_date",
                    "precedes start date",
                ));
            }
        }
        if self.billing_cycle == BillingCycle::OneTime {
            if self.renewal_date.is_some() {
                return Err(ValidationError::invalid_value(
                    "renewal_date",
                    "one-time agreements do not renew",
                ));
            }
            if let Some(end) = self.end_date {
                if end != self.start_date {
                    return Err(ValidationError::invalid_value(
                        "end_date",
                        "one-time agreements end on their start date",
                    ));
                }
            }
        }
        Ok(())
    }
}
