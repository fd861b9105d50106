//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod agreement;

pub use agreement::{
    GetAgreementOverviewHandler, GetAgreementOverviewQuery, GetAgreementOverviewResult,
    RenewAgreementCommand, RenewAgreementHandler, RenewAgreementResult,
};
