//! Renewal transition.
//!
//! Rolls an agreement into a new period: status, period dates, and price
//! are replaced with validated inputs, everything else is preserved. The
//! CRUD screen suggests dates via `lifecycle::project`, but suggestions are
//! never trusted: this module is the sole authority that accepts or rejects
//! the final values.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Money, Timestamp, ValidationError};

use super::{AgreementStatus, BillingCycle, ServiceAgreement};

/// Status an agreement may renew into.
///
/// Renewal always reactivates or marks pending; renewing into canceled or
/// expired is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenewalStatus {
    Active,
    Pending,
}

impl From<RenewalStatus> for AgreementStatus {
    fn from(status: RenewalStatus) -> Self {
        match status {
            RenewalStatus::Active => AgreementStatus::Active,
            RenewalStatus::Pending => AgreementStatus::Pending,
        }
    }
}

/// Validated input for the renewal transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenewalInput {
    pub new_status: RenewalStatus,
    pub new_start_date: NaiveDate,
    pub new_end_date: Option<NaiveDate>,
    pub new_renewal_date: Option<NaiveDate>,
    /// Price for the new period. `None` keeps the current price.
    pub new_price: Option<Money>,
}

impl RenewalInput {
    /// Builds a RenewalInput from raw form values.
    ///
    /// Fails fast on the two edge conditions a typed input cannot express:
    /// a missing start date and a supplied non-positive price.
    pub fn from_raw(
        new_status: RenewalStatus,
        new_start_date: Option<NaiveDate>,
        new_end_date: Option<NaiveDate>,
        new_renewal_date: Option<NaiveDate>,
        new_price_cents: Option<i64>,
    ) -> Result<Self, ValidationError> {
        let new_start_date =
            new_start_date.ok_or_else(|| ValidationError::missing_field("start_date"))?;
        let new_price = new_price_cents.map(Money::from_cents).transpose()?;
        Ok(Self {
            new_status,
            new_start_date,
            new_end_date,
            new_renewal_date,
            new_price,
        })
    }
}

/// Applies the renewal transition, producing the new record.
///
/// Validation is fail-fast and touches no storage; the caller persists the
/// returned record as a single atomic update. Field preservation: `title`,
/// `description`, `business_id`, `agreement_type`, `billing_cycle`,
/// `created_by`, `created_at`, and `id` are carried over unchanged;
/// `updated_at` is set to `at`.
pub fn renew(
    agreement: &ServiceAgreement,
    input: &RenewalInput,
    at: Timestamp,
) -> Result<ServiceAgreement, ValidationError> {
    if let Some(end) = input.new_end_date {
        if end < input.new_start_date {
            return Err(ValidationError::invalid_value(
                "end_date",
                "precedes start date",
            ));
        }
    }
    if let Some(renewal) = input.new_renewal_date {
        if renewal < input.new_start_date {
            return Err(ValidationError::invalid_value(
                "renewal_date",
                "precedes start date",
            ));
        }
    }

    // One-time agreements never carry a renewal date into the new period.
    let new_renewal_date = if agreement.billing_cycle == BillingCycle::OneTime {
        None
    } else {
        input.new_renewal_date
    };

    let renewed = ServiceAgreement {
        status: input.new_status.into(),
        start_date: input.new_start_date,
        end_date: input.new_end_date,
        renewal_date: new_renewal_date,
        price: input.new_price.unwrap_or(agreement.price),
        updated_at: at,
        ..agreement.clone()
    };
    renewed.validate()?;
    Ok(renewed)
}
