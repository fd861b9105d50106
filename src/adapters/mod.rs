//! Adapters - Implementations of port interfaces.
//!
//! - `postgres` - PostgreSQL-backed agreement store

pub mod postgres;
