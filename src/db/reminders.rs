//! Database operations for reminders.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entity::reminder::{self, ActiveModel, Entity as Reminder};
use crate::error::{AppError, AppResult};
use crate::models::ReminderCreate;

use super::DbPool;

impl DbPool {
    /// Insert a new reminder. Status always starts as pending.
    pub async fn insert_reminder(&self, payload: ReminderCreate) -> AppResult<reminder::Model> {
        let now = Utc::now();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            vehicle_id: Set(payload.vehicle_id),
            customer_id: Set(payload.customer_id),
            job_id: Set(payload.job_id),
            reminder_type: Set(payload.reminder_type),
            reminder_date: Set(payload.reminder_date),
            message: Set(payload.message),
            status: Set("pending".to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert reminder: {}", e)))?;

        Ok(result)
    }

    /// List reminders by due date, soonest first, optionally filtered by status.
    pub async fn list_reminders(&self, status: Option<&str>) -> AppResult<Vec<reminder::Model>> {
        let mut query = Reminder::find().order_by_asc(reminder::Column::ReminderDate);
        if let Some(status) = status {
            query = query.filter(reminder::Column::Status.eq(status));
        }

        let result = query
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list reminders: {}", e)))?;

        Ok(result)
    }

    pub async fn update_reminder_status(
        &self,
        id: Uuid,
        status: &str,
    ) -> AppResult<reminder::Model> {
        let existing = Reminder::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get reminder: {}", e)))?
            .ok_or_else(|| AppError::NotFound("Reminder".to_string()))?;

        let mut active: ActiveModel = existing.into();
        active.status = Set(status.to_string());
        active.updated_at = Set(Utc::now());

        let result = active
            .update(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to update reminder: {}", e)))?;

        Ok(result)
    }

    pub async fn delete_reminders_for_vehicle(&self, vehicle_id: Uuid) -> AppResult<u64> {
        let result = Reminder::delete_many()
            .filter(reminder::Column::VehicleId.eq(vehicle_id))
            .exec(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete reminders: {}", e)))?;

        Ok(result.rows_affected)
    }

    /// Pending reminders due on or after the cutoff date.
    pub async fn count_upcoming_reminders(&self, cutoff: &str) -> AppResult<u64> {
        let count = Reminder::find()
            .filter(reminder::Column::Status.eq("pending"))
            .filter(reminder::Column::ReminderDate.gte(cutoff))
            .count(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to count reminders: {}", e)))?;

        Ok(count)
    }
}
