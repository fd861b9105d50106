//! Agreement store port.
//!
//! Defines the contract for reading and writing persisted agreements.
//! Deliberately narrow: the surrounding CRUD layer owns create, delete,
//! and listing; the engine only ever re-reads one record and writes the
//! renewed version back.
//!
//! # Concurrency
//!
//! Last-write-wins. Two racing renewals of the same agreement are resolved
//! by whichever update lands last; there is no optimistic locking.

use async_trait::async_trait;

use crate::domain::agreement::{AgreementError, ServiceAgreement};
use crate::domain::foundation::AgreementId;

/// Port for agreement persistence.
#[async_trait]
pub trait AgreementStore: Send + Sync {
    /// Fetch an agreement by id.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no agreement has this id
    /// - `Persistence` on read failure
    async fn get(&self, id: &AgreementId) -> Result<ServiceAgreement, AgreementError>;

    /// Persist a modified agreement as a single atomic update.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the agreement no longer exists
    /// - `Persistence` on write failure
    async fn update(&self, agreement: &ServiceAgreement) -> Result<(), AgreementError>;
}
