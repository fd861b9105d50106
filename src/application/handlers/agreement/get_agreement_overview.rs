//! GetAgreementOverviewHandler - Query handler for the agreement detail
//! screen.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::agreement::{
    lifecycle, AgreementError, Classification, Projection, ServiceAgreement,
};
use crate::domain::foundation::AgreementId;
use crate::ports::AgreementStore;

/// Query for an agreement's lifecycle overview.
#[derive(Debug, Clone)]
pub struct GetAgreementOverviewQuery {
    pub agreement_id: AgreementId,
    /// Business date the screen is rendered on, injected by the caller.
    pub today: NaiveDate,
}

/// Everything the detail screen needs in one read: the record, its
/// date-derived classification, and the projected dates prefilling the
/// renewal form.
#[derive(Debug, Clone)]
pub struct GetAgreementOverviewResult {
    pub agreement: ServiceAgreement,
    pub classification: Classification,
    pub projection: Projection,
}

/// Handler for the read-only overview query.
pub struct GetAgreementOverviewHandler {
    store: Arc<dyn AgreementStore>,
}

impl GetAgreementOverviewHandler {
    pub fn new(store: Arc<dyn AgreementStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: GetAgreementOverviewQuery,
    ) -> Result<GetAgreementOverviewResult, AgreementError> {
        let agreement = self.store.get(&query.agreement_id).await?;
        let classification = lifecycle::classify(&agreement, query.today);
        // Projection suggests the next period, starting where the current
        // one ends if an end date exists, else from today.
        let suggested_start = agreement.end_date.unwrap_or(query.today);
        let projection = lifecycle::project(suggested_start, agreement.billing_cycle);

        Ok(GetAgreementOverviewResult {
            agreement,
            classification,
            projection,
        })
    }
}
