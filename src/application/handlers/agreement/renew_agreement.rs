//! RenewAgreementHandler - Command handler for rolling an agreement into a
//! new period.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::agreement::{renewal, AgreementError, RenewalInput, ServiceAgreement};
use crate::domain::foundation::{AgreementId, Timestamp};
use crate::ports::AgreementStore;

/// Command to renew an agreement.
///
/// `today` and `at` are injected by the caller; the handler never reads a
/// clock. `today` exists for symmetry with the read side and for callers
/// that log or audit the business date of the renewal.
#[derive(Debug, Clone)]
pub struct RenewAgreementCommand {
    pub agreement_id: AgreementId,
    pub input: RenewalInput,
    /// Business date the renewal is performed on.
    pub today: NaiveDate,
    /// Wall-clock instant recorded as `updated_at`.
    pub at: Timestamp,
}

/// Result of a successful renewal.
#[derive(Debug, Clone)]
pub struct RenewAgreementResult {
    pub agreement: ServiceAgreement,
}

/// Handler for the renewal transition.
///
/// Re-reads the current record from the store, applies the domain
/// transition, and writes the result back as one atomic update. Validation
/// failures return before any store mutation is attempted.
pub struct RenewAgreementHandler {
    store: Arc<dyn AgreementStore>,
}

impl RenewAgreementHandler {
    pub fn new(store: Arc<dyn AgreementStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: RenewAgreementCommand,
    ) -> Result<RenewAgreementResult, AgreementError> {
        // 1. Re-read the current period fresh from the store. Re-invoking
        //    with the same input is then idempotent rather than additive.
        let current = self.store.get(&cmd.agreement_id).await?;

        // 2. Apply the transition (validation, no partial writes).
        let renewed = renewal::renew(&current, &cmd.input, cmd.at)?;

        // 3. Persist as a single update.
        self.store.update(&renewed).await?;

        debug!(
            agreement_id = %renewed.id,
            new_start = %renewed.start_date,
            today = %cmd.today,
            "agreement renewed"
        );

        Ok(RenewAgreementResult { agreement: renewed })
    }
}
