//! Database operations for appointments.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use crate::entity::appointment::{self, ActiveModel, Entity as Appointment};
use crate::error::{AppError, AppResult};
use crate::models::AppointmentCreate;

use super::DbPool;

impl DbPool {
    pub async fn insert_appointment(
        &self,
        payload: AppointmentCreate,
    ) -> AppResult<appointment::Model> {
        let now = Utc::now();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            customer_id: Set(payload.customer_id),
            vehicle_id: Set(payload.vehicle_id),
            appointment_date: Set(payload.appointment_date),
            appointment_time: Set(payload.appointment_time),
            service_type: Set(payload.service_type),
            notes: Set(payload.notes),
            status: Set(payload.status),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert appointment: {}", e)))?;

        Ok(result)
    }

    /// List appointments by date, soonest first.
    pub async fn list_appointments(&self) -> AppResult<Vec<appointment::Model>> {
        let result = Appointment::find()
            .order_by_asc(appointment::Column::AppointmentDate)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list appointments: {}", e)))?;

        Ok(result)
    }

    pub async fn update_appointment_status(
        &self,
        id: Uuid,
        status: &str,
    ) -> AppResult<appointment::Model> {
        let existing = Appointment::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get appointment: {}", e)))?
            .ok_or_else(|| AppError::NotFound("Appointment".to_string()))?;

        let mut active: ActiveModel = existing.into();
        active.status = Set(status.to_string());
        active.updated_at = Set(Utc::now());

        let result = active
            .update(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to update appointment: {}", e)))?;

        Ok(result)
    }

    pub async fn delete_appointment(&self, id: Uuid) -> AppResult<()> {
        let result = Appointment::delete_by_id(id)
            .exec(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete appointment: {}", e)))?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Appointment".to_string()));
        }

        Ok(())
    }

    pub async fn delete_appointments_for_vehicle(&self, vehicle_id: Uuid) -> AppResult<u64> {
        let result = Appointment::delete_many()
            .filter(appointment::Column::VehicleId.eq(vehicle_id))
            .exec(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete appointments: {}", e)))?;

        Ok(result.rows_affected)
    }
}
