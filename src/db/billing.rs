//! Database operations for billing records.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::entity::billing::{self, ActiveModel, Entity as Billing};
use crate::error::{AppError, AppResult};
use crate::models::billing::OUTSTANDING_STATUSES;
use crate::models::BillingCreate;

use super::DbPool;

impl DbPool {
    pub async fn insert_billing(&self, payload: BillingCreate) -> AppResult<billing::Model> {
        let now = Utc::now();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            job_id: Set(payload.job_id),
            quoted_amount: Set(payload.quoted_amount),
            final_billed_amount: Set(payload.final_billed_amount),
            payment_method: Set(payload.payment_method),
            payment_status: Set(payload.payment_status),
            gst_invoice_number: Set(payload.gst_invoice_number),
            discounts: Set(payload.discounts),
            refunds: Set(payload.refunds),
            notes: Set(payload.notes),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert billing record: {}", e)))?;

        Ok(result)
    }

    pub async fn list_billing(&self, job_id: Option<Uuid>) -> AppResult<Vec<billing::Model>> {
        let mut query = Billing::find();
        if let Some(job_id) = job_id {
            query = query.filter(billing::Column::JobId.eq(job_id));
        }

        let result = query
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list billing records: {}", e)))?;

        Ok(result)
    }

    pub async fn update_billing(
        &self,
        id: Uuid,
        payload: BillingCreate,
    ) -> AppResult<billing::Model> {
        let existing = Billing::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get billing record: {}", e)))?
            .ok_or_else(|| AppError::NotFound("Billing record".to_string()))?;

        let mut active: ActiveModel = existing.into();
        active.job_id = Set(payload.job_id);
        active.quoted_amount = Set(payload.quoted_amount);
        active.final_billed_amount = Set(payload.final_billed_amount);
        active.payment_method = Set(payload.payment_method);
        active.payment_status = Set(payload.payment_status);
        active.gst_invoice_number = Set(payload.gst_invoice_number);
        active.discounts = Set(payload.discounts);
        active.refunds = Set(payload.refunds);
        active.notes = Set(payload.notes);
        active.updated_at = Set(Utc::now());

        let result = active
            .update(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to update billing record: {}", e)))?;

        Ok(result)
    }

    pub async fn delete_billing_for_job(&self, job_id: Uuid) -> AppResult<u64> {
        let result = Billing::delete_many()
            .filter(billing::Column::JobId.eq(job_id))
            .exec(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete billing records: {}", e)))?;

        Ok(result.rows_affected)
    }

    /// Count records whose payment is still outstanding (pending or partial).
    pub async fn count_outstanding_payments(&self) -> AppResult<u64> {
        let count = Billing::find()
            .filter(billing::Column::PaymentStatus.is_in(OUTSTANDING_STATUSES.iter().copied()))
            .count(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to count payments: {}", e)))?;

        Ok(count)
    }
}
