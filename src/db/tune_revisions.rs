//! Database operations for tune revisions.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use crate::entity::tune_revision::{self, ActiveModel, Entity as TuneRevision};
use crate::error::{AppError, AppResult};
use crate::models::{TuneRevisionCreate, TuneRevisionUpdate};

use super::DbPool;

impl DbPool {
    pub async fn insert_tune_revision(
        &self,
        payload: TuneRevisionCreate,
    ) -> AppResult<tune_revision::Model> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            job_id: Set(payload.job_id),
            vehicle_id: Set(payload.vehicle_id),
            revision_label: Set(payload.revision_label),
            description: Set(payload.description),
            base_file_reference: Set(None),
            diff_notes: Set(payload.diff_notes),
            created_at: Set(Utc::now()),
        };

        let result = model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert tune revision: {}", e)))?;

        Ok(result)
    }

    /// List revisions oldest first, optionally filtered by job and/or vehicle.
    pub async fn list_tune_revisions(
        &self,
        job_id: Option<Uuid>,
        vehicle_id: Option<Uuid>,
    ) -> AppResult<Vec<tune_revision::Model>> {
        let mut query = TuneRevision::find().order_by_asc(tune_revision::Column::CreatedAt);
        if let Some(job_id) = job_id {
            query = query.filter(tune_revision::Column::JobId.eq(job_id));
        }
        if let Some(vehicle_id) = vehicle_id {
            query = query.filter(tune_revision::Column::VehicleId.eq(vehicle_id));
        }

        let result = query
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list tune revisions: {}", e)))?;

        Ok(result)
    }

    pub async fn update_tune_revision(
        &self,
        id: Uuid,
        payload: TuneRevisionUpdate,
    ) -> AppResult<tune_revision::Model> {
        let existing = TuneRevision::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get tune revision: {}", e)))?
            .ok_or_else(|| AppError::NotFound("Tune revision".to_string()))?;

        let mut active: ActiveModel = existing.into();
        active.revision_label = Set(payload.revision_label);
        active.description = Set(payload.description);
        active.diff_notes = Set(payload.diff_notes);

        let result = active
            .update(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to update tune revision: {}", e)))?;

        Ok(result)
    }

    pub async fn delete_tune_revisions_for_job(&self, job_id: Uuid) -> AppResult<u64> {
        let result = TuneRevision::delete_many()
            .filter(tune_revision::Column::JobId.eq(job_id))
            .exec(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete tune revisions: {}", e)))?;

        Ok(result.rows_affected)
    }

    pub async fn delete_tune_revisions_for_vehicle(&self, vehicle_id: Uuid) -> AppResult<u64> {
        let result = TuneRevision::delete_many()
            .filter(tune_revision::Column::VehicleId.eq(vehicle_id))
            .exec(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete tune revisions: {}", e)))?;

        Ok(result.rows_affected)
    }
}
