//! Database operations for service jobs.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

use crate::entity::job::{self, ActiveModel, Entity as Job};
use crate::error::{AppError, AppResult};
use crate::models::JobCreate;

use super::DbPool;

impl DbPool {
    pub async fn insert_job(&self, payload: JobCreate) -> AppResult<job::Model> {
        let now = Utc::now();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            vehicle_id: Set(payload.vehicle_id),
            customer_id: Set(payload.customer_id),
            date: Set(payload.date),
            technician_name: Set(payload.technician_name),
            work_performed: Set(payload.work_performed),
            tune_stage: Set(payload.tune_stage),
            mods_installed: Set(payload.mods_installed),
            dyno_results: Set(payload.dyno_results),
            before_ecu_map_version: Set(payload.before_ecu_map_version),
            after_ecu_map_version: Set(payload.after_ecu_map_version),
            files_uploaded: Set(None),
            afr_graph_screenshots: Set(None),
            calibration_notes: Set(payload.calibration_notes),
            road_test_notes: Set(payload.road_test_notes),
            next_recommendations: Set(payload.next_recommendations),
            warranty_or_retune_status: Set(payload.warranty_or_retune_status),
            odometer_at_visit: Set(payload.odometer_at_visit),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert job: {}", e)))?;

        Ok(result)
    }

    /// List jobs newest service date first, optionally filtered by vehicle
    /// and/or customer.
    pub async fn list_jobs(
        &self,
        vehicle_id: Option<Uuid>,
        customer_id: Option<Uuid>,
    ) -> AppResult<Vec<job::Model>> {
        let mut query = Job::find().order_by_desc(job::Column::Date);
        if let Some(vehicle_id) = vehicle_id {
            query = query.filter(job::Column::VehicleId.eq(vehicle_id));
        }
        if let Some(customer_id) = customer_id {
            query = query.filter(job::Column::CustomerId.eq(customer_id));
        }

        let result = query
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list jobs: {}", e)))?;

        Ok(result)
    }

    pub async fn get_job(&self, id: Uuid) -> AppResult<Option<job::Model>> {
        let result = Job::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get job: {}", e)))?;

        Ok(result)
    }

    /// Full update from the creation payload; `updated_at` is refreshed and
    /// the stored file lists are kept as-is.
    pub async fn update_job(&self, id: Uuid, payload: JobCreate) -> AppResult<job::Model> {
        let existing = self
            .get_job(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Job".to_string()))?;

        let mut active: ActiveModel = existing.into();
        active.vehicle_id = Set(payload.vehicle_id);
        active.customer_id = Set(payload.customer_id);
        active.date = Set(payload.date);
        active.technician_name = Set(payload.technician_name);
        active.work_performed = Set(payload.work_performed);
        active.tune_stage = Set(payload.tune_stage);
        active.mods_installed = Set(payload.mods_installed);
        active.dyno_results = Set(payload.dyno_results);
        active.before_ecu_map_version = Set(payload.before_ecu_map_version);
        active.after_ecu_map_version = Set(payload.after_ecu_map_version);
        active.calibration_notes = Set(payload.calibration_notes);
        active.road_test_notes = Set(payload.road_test_notes);
        active.next_recommendations = Set(payload.next_recommendations);
        active.warranty_or_retune_status = Set(payload.warranty_or_retune_status);
        active.odometer_at_visit = Set(payload.odometer_at_visit);
        active.updated_at = Set(Utc::now());

        let result = active
            .update(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to update job: {}", e)))?;

        Ok(result)
    }

    pub async fn delete_job(&self, id: Uuid) -> AppResult<()> {
        let result = Job::delete_by_id(id)
            .exec(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete job: {}", e)))?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Job".to_string()));
        }

        Ok(())
    }

    /// Jobs whose service date is on or after the cutoff. Dates are ISO-8601
    /// strings, so string comparison matches chronological order.
    pub async fn count_jobs_since(&self, cutoff: &str) -> AppResult<u64> {
        let count = Job::find()
            .filter(job::Column::Date.gte(cutoff))
            .count(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to count jobs: {}", e)))?;

        Ok(count)
    }

    /// Most recent jobs by service date.
    pub async fn recent_jobs(&self, limit: u64) -> AppResult<Vec<job::Model>> {
        let result = Job::find()
            .order_by_desc(job::Column::Date)
            .limit(limit)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list recent jobs: {}", e)))?;

        Ok(result)
    }
}
