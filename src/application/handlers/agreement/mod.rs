//! Agreement handlers.
//!
//! ## Commands
//! - Renewing an agreement into a new period
//!
//! ## Queries
//! - Get the lifecycle overview of an agreement for display

mod get_agreement_overview;
mod renew_agreement;

// Commands
pub use renew_agreement::{RenewAgreementCommand, RenewAgreementHandler, RenewAgreementResult};

// Queries
pub use get_agreement_overview::{
    GetAgreementOverviewHandler, GetAgreementOverviewQuery, GetAgreementOverviewResult,
};
