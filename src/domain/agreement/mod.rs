//! Service agreement domain module.
//!
//! The one part of the CRM with real business logic: billing-cycle
//! recurrence arithmetic, date-derived lifecycle classification, and the
//! renewal transition.
//!
//! # Module Structure
//!
//! - `aggregate` - ServiceAgreement aggregate entity
//! - `status` - AgreementStatus stored states
//! - `billing_cycle` - BillingCycle cadence enum
//! - `recurrence` - Pure date arithmetic (the Recurrence Calculator)
//! - `lifecycle` - Classification and projection (the Lifecycle Engine)
//! - `renewal` - The renew transition and its validation
//! - `errors` - Agreement error taxonomy

mod aggregate;
mod billing_cycle;
mod errors;
pub mod lifecycle;
pub mod recurrence;
pub mod renewal;
mod status;

pub use aggregate::ServiceAgreement;
pub use billing_cycle::BillingCycle;
pub use errors::AgreementError;
pub use lifecycle::{Classification, InvoiceAlert, Projection, RenewalAlert};
pub use renewal::{RenewalInput, RenewalStatus};
pub use status::AgreementStatus;
