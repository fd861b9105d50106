//! CRM Agreements - Service agreement billing and renewal engine.
//!
//! This crate implements the billing-cycle arithmetic, lifecycle
//! classification, and renewal transition for the CRM's service agreements.
//! The surrounding CRUD application supplies the current date and renders
//! the computed fields; this crate never reads a clock of its own.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
