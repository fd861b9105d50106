//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers mutate through the store; query handlers are read-only.

pub mod handlers;

pub use handlers::{
    GetAgreementOverviewHandler, GetAgreementOverviewQuery, GetAgreementOverviewResult,
    RenewAgreementCommand, RenewAgreementHandler, RenewAgreementResult,
};
