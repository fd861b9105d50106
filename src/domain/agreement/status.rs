//! Agreement status definitions.
//!
//! The status is stored, not derived: screens persist whatever the user
//! picked, while the lifecycle engine computes expiry and renewal-due flags
//! from dates independently. The two can disagree, and the classification
//! surface reports both sides rather than reconciling them.

use serde::{Deserialize, Serialize};

/// Stored lifecycle status of a service agreement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgreementStatus {
    /// Agreement is in force.
    Active,

    /// Agreement is drafted or awaiting confirmation.
    Pending,

    /// Agreement period has ended (as recorded by a user, not auto-flipped).
    Expired,

    /// Agreement was terminated before its natural end.
    Canceled,

    /// Renewal is due and awaiting action.
    PendingRenewal,
}

impl AgreementStatus {
    /// Returns the storage string for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            AgreementStatus::Active => "active",
            AgreementStatus::Pending => "pending",
            AgreementStatus::Expired => "expired",
            AgreementStatus::Canceled => "canceled",
            AgreementStatus::PendingRenewal => "pending_renewal",
        }
    }

    /// Returns the display name for this status.
    pub fn display_name(&self) -> &'static str {
        match self {
            AgreementStatus::Active => "Active",
            AgreementStatus::Pending => "Pending",
            AgreementStatus::Expired => "Expired",
            AgreementStatus::Canceled => "Canceled",
            AgreementStatus::PendingRenewal => "Pending Renewal",
        }
    }
}

impl std::fmt::Display for AgreementStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
