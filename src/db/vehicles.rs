//! Database operations for vehicles.

use chrono::Utc;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::{Condition, Expr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

use crate::entity::job::{self, Entity as Job};
use crate::entity::vehicle::{self, ActiveModel, Entity as Vehicle};
use crate::error::{AppError, AppResult};
use crate::models::VehicleCreate;

use super::{escape_like, DbPool};

impl DbPool {
    /// Insert a vehicle with its pre-generated QR data URI.
    pub async fn insert_vehicle(
        &self,
        id: Uuid,
        payload: VehicleCreate,
        qr_code: String,
    ) -> AppResult<vehicle::Model> {
        let now = Utc::now();

        let model = ActiveModel {
            id: Set(id),
            customer_id: Set(payload.customer_id),
            make: Set(payload.make),
            model: Set(payload.model),
            variant: Set(payload.variant),
            engine_code: Set(payload.engine_code),
            ecu_type: Set(payload.ecu_type),
            vin: Set(payload.vin),
            registration_number: Set(payload.registration_number),
            year: Set(payload.year),
            fuel_type: Set(payload.fuel_type),
            gearbox: Set(payload.gearbox),
            odometer_at_last_visit: Set(payload.odometer_at_last_visit),
            notes: Set(payload.notes),
            qr_code: Set(Some(qr_code)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert vehicle: {}", e)))?;

        Ok(result)
    }

    /// List vehicles, optionally restricted to one customer.
    pub async fn list_vehicles(
        &self,
        customer_id: Option<Uuid>,
    ) -> AppResult<Vec<vehicle::Model>> {
        let mut query = Vehicle::find().order_by_desc(vehicle::Column::CreatedAt);
        if let Some(customer_id) = customer_id {
            query = query.filter(vehicle::Column::CustomerId.eq(customer_id));
        }

        let result = query
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list vehicles: {}", e)))?;

        Ok(result)
    }

    pub async fn get_vehicle(&self, id: Uuid) -> AppResult<Option<vehicle::Model>> {
        let result = Vehicle::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get vehicle: {}", e)))?;

        Ok(result)
    }

    /// Full update from the creation payload. The stored QR code is kept.
    pub async fn update_vehicle(
        &self,
        id: Uuid,
        payload: VehicleCreate,
    ) -> AppResult<vehicle::Model> {
        let existing = self
            .get_vehicle(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle".to_string()))?;

        let mut active: ActiveModel = existing.into();
        active.customer_id = Set(payload.customer_id);
        active.make = Set(payload.make);
        active.model = Set(payload.model);
        active.variant = Set(payload.variant);
        active.engine_code = Set(payload.engine_code);
        active.ecu_type = Set(payload.ecu_type);
        active.vin = Set(payload.vin);
        active.registration_number = Set(payload.registration_number);
        active.year = Set(payload.year);
        active.fuel_type = Set(payload.fuel_type);
        active.gearbox = Set(payload.gearbox);
        active.odometer_at_last_visit = Set(payload.odometer_at_last_visit);
        active.notes = Set(payload.notes);
        active.updated_at = Set(Utc::now());

        let result = active
            .update(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to update vehicle: {}", e)))?;

        Ok(result)
    }

    pub async fn delete_vehicle(&self, id: Uuid) -> AppResult<()> {
        let result = Vehicle::delete_by_id(id)
            .exec(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete vehicle: {}", e)))?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Vehicle".to_string()));
        }

        Ok(())
    }

    /// Record the odometer reading captured during a job visit. A missing
    /// vehicle is a no-op; job writes carry stale vehicle ids at times.
    pub async fn set_vehicle_odometer(&self, id: Uuid, odometer: i32) -> AppResult<()> {
        let existing = match self.get_vehicle(id).await? {
            Some(vehicle) => vehicle,
            None => return Ok(()),
        };

        let mut active: ActiveModel = existing.into();
        active.odometer_at_last_visit = Set(Some(odometer));
        active.updated_at = Set(Utc::now());

        active
            .update(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to update odometer: {}", e)))?;

        Ok(())
    }

    /// Number of jobs still attached to a vehicle. Deletion is blocked while
    /// this is non-zero.
    pub async fn count_jobs_for_vehicle(&self, vehicle_id: Uuid) -> AppResult<u64> {
        let count = Job::find()
            .filter(job::Column::VehicleId.eq(vehicle_id))
            .count(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to count jobs: {}", e)))?;

        Ok(count)
    }

    /// Case-insensitive substring search over registration, VIN, make, model.
    pub async fn search_vehicles(&self, term: &str, limit: u64) -> AppResult<Vec<vehicle::Model>> {
        let pattern = format!("%{}%", escape_like(term));

        let result = Vehicle::find()
            .filter(
                Condition::any()
                    .add(Expr::col(vehicle::Column::RegistrationNumber).ilike(pattern.clone()))
                    .add(Expr::col(vehicle::Column::Vin).ilike(pattern.clone()))
                    .add(Expr::col(vehicle::Column::Make).ilike(pattern.clone()))
                    .add(Expr::col(vehicle::Column::Model).ilike(pattern)),
            )
            .limit(limit)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to search vehicles: {}", e)))?;

        Ok(result)
    }
}
