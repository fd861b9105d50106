//! PostgreSQL implementation of AgreementStore.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

use crate::domain::agreement::{
    AgreementError, AgreementStatus, BillingCycle, ServiceAgreement,
};
use crate::domain::foundation::{AgreementId, BusinessId, Money, Timestamp, UserId};
use crate::ports::AgreementStore;

/// PostgreSQL implementation of the AgreementStore port.
///
/// Uses sqlx for type-safe database operations with connection pooling.
pub struct PostgresAgreementStore {
    pool: PgPool,
}

impl PostgresAgreementStore {
    /// Creates a new PostgresAgreementStore with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a service agreement.
#[derive(Debug, sqlx::FromRow)]
struct AgreementRow {
    id: Uuid,
    title: String,
    description: Option<String>,
    business_id: Uuid,
    status: String,
    agreement_type: Option<String>,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    renewal_date: Option<NaiveDate>,
    price_cents: i64,
    billing_cycle: String,
    created_by: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<AgreementRow> for ServiceAgreement {
    type Error = AgreementError;

    fn try_from(row: AgreementRow) -> Result<Self, Self::Error> {
        let status = parse_status(&row.status)?;
        let billing_cycle = parse_cycle(&row.billing_cycle)?;
        let price = Money::from_cents(row.price_cents).map_err(|e| {
            AgreementError::persistence(format!("Invalid stored price: {}", e))
        })?;

        Ok(ServiceAgreement {
            id: AgreementId::from_uuid(row.id),
            title: row.title,
            description: row.description,
            business_id: BusinessId::from_uuid(row.business_id),
            status,
            agreement_type: row.agreement_type,
            start_date: row.start_date,
            end_date: row.end_date,
            renewal_date: row.renewal_date,
            price,
            billing_cycle,
            created_by: UserId::from_uuid(row.created_by),
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        })
    }
}

fn parse_status(s: &str) -> Result<AgreementStatus, AgreementError> {
    match s {
        "active" => Ok(AgreementStatus::Active),
        "pending" => Ok(AgreementStatus::Pending),
        "expired" => Ok(AgreementStatus::Expired),
        "canceled" => Ok(AgreementStatus::Canceled),
        "pending_renewal" => Ok(AgreementStatus::PendingRenewal),
        _ => Err(AgreementError::persistence(format!(
            "Invalid status value: {}",
            s
        ))),
    }
}

fn parse_cycle(s: &str) -> Result<BillingCycle, AgreementError> {
    match s {
        "monthly" => Ok(BillingCycle::Monthly),
        "quarterly" => Ok(BillingCycle::Quarterly),
        "biannually" => Ok(BillingCycle::Biannually),
        "annually" => Ok(BillingCycle::Annually),
        "one_time" => Ok(BillingCycle::OneTime),
        _ => Err(AgreementError::persistence(format!(
            "Invalid billing cycle value: {}",
            s
        ))),
    }
}

#[async_trait]
impl AgreementStore for PostgresAgreementStore {
    async fn get(&self, id: &AgreementId) -> Result<ServiceAgreement, AgreementError> {
        let row: Option<AgreementRow> = sqlx::query_as(
            r#"
            SELECT id, title, description, business_id, status, agreement_type,
                   start_date, end_date, renewal_date, price_cents, billing_cycle,
                   created_by, created_at, updated_at
            FROM service_agreements
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            warn!(agreement_id = %id, error = %e, "agreement read failed");
            AgreementError::persistence(format!("Failed to read agreement: {}", e))
        })?;

        match row {
            Some(row) => row.try_into(),
            None => Err(AgreementError::not_found(*id)),
        }
    }

    async fn update(&self, agreement: &ServiceAgreement) -> Result<(), AgreementError> {
        let result = sqlx::query(
            r#"
            UPDATE service_agreements SET
                title = $2,
                description = $3,
                business_id = $4,
                status = $5,
                agreement_type = $6,
                start_date = $7,
                end_date = $8,
                renewal_date = $9,
                price_cents = $10,
                billing_cycle = $11,
                updated_at = $12
            WHERE id = $1
            "#,
        )
        .bind(agreement.id.as_uuid())
        .bind(&agreement.title)
        .bind(&agreement.description)
        .bind(agreement.business_id.as_uuid())
        .bind(agreement.status.as_str())
        .bind(&agreement.agreement_type)
        .bind(agreement.start_date)
        .bind(agreement.end_date)
        .bind(agreement.renewal_date)
        .bind(agreement.price.cents())
        .bind(agreement.billing_cycle.as_str())
        .bind(agreement.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            warn!(agreement_id = %agreement.id, error = %e, "agreement update failed");
            AgreementError::persistence(format!("Failed to update agreement: {}", e))
        })?;

        if result.rows_affected() == 0 {
            return Err(AgreementError::not_found(agreement.id));
        }

        Ok(())
    }
}
