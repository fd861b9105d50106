//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form the
//! vocabulary of the agreement domain.

mod errors;
mod ids;
mod money;
mod timestamp;

pub use errors::ValidationError;
pub use ids::{AgreementId, BusinessId, UserId};
pub use money::Money;
pub use timestamp::Timestamp;
