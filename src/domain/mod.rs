//! Domain layer - Agreement entities and billing logic.
//!
//! - `foundation` - Shared value objects (ids, timestamps, money, errors)
//! - `agreement` - The ServiceAgreement aggregate and its lifecycle engine

pub mod agreement;
pub mod foundation;
