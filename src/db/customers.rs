//! Database operations for customers.

use chrono::Utc;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::{Condition, Expr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

use crate::entity::customer::{self, ActiveModel, Entity as Customer};
use crate::entity::vehicle::{self, Entity as Vehicle};
use crate::error::{AppError, AppResult};
use crate::models::CustomerCreate;

use super::{escape_like, DbPool};

impl DbPool {
    pub async fn insert_customer(&self, payload: CustomerCreate) -> AppResult<customer::Model> {
        let now = Utc::now();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            full_name: Set(payload.full_name),
            phone_number: Set(payload.phone_number),
            whatsapp_number: Set(payload.whatsapp_number),
            email: Set(payload.email),
            instagram_handle: Set(payload.instagram_handle),
            address: Set(payload.address),
            gst_number: Set(payload.gst_number),
            id_proof_reference: Set(payload.id_proof_reference),
            consent_docs_reference: Set(payload.consent_docs_reference),
            notes: Set(payload.notes),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert customer: {}", e)))?;

        Ok(result)
    }

    pub async fn list_customers(&self) -> AppResult<Vec<customer::Model>> {
        let result = Customer::find()
            .order_by_desc(customer::Column::CreatedAt)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list customers: {}", e)))?;

        Ok(result)
    }

    pub async fn get_customer(&self, id: Uuid) -> AppResult<Option<customer::Model>> {
        let result = Customer::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get customer: {}", e)))?;

        Ok(result)
    }

    /// Full update from the creation payload; `updated_at` is refreshed.
    pub async fn update_customer(
        &self,
        id: Uuid,
        payload: CustomerCreate,
    ) -> AppResult<customer::Model> {
        let existing = self
            .get_customer(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Customer".to_string()))?;

        let mut active: ActiveModel = existing.into();
        active.full_name = Set(payload.full_name);
        active.phone_number = Set(payload.phone_number);
        active.whatsapp_number = Set(payload.whatsapp_number);
        active.email = Set(payload.email);
        active.instagram_handle = Set(payload.instagram_handle);
        active.address = Set(payload.address);
        active.gst_number = Set(payload.gst_number);
        active.id_proof_reference = Set(payload.id_proof_reference);
        active.consent_docs_reference = Set(payload.consent_docs_reference);
        active.notes = Set(payload.notes);
        active.updated_at = Set(Utc::now());

        let result = active
            .update(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to update customer: {}", e)))?;

        Ok(result)
    }

    pub async fn delete_customer(&self, id: Uuid) -> AppResult<()> {
        let result = Customer::delete_by_id(id)
            .exec(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete customer: {}", e)))?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Customer".to_string()));
        }

        Ok(())
    }

    /// Number of vehicles still attached to a customer. Deletion is blocked
    /// while this is non-zero.
    pub async fn count_vehicles_for_customer(&self, customer_id: Uuid) -> AppResult<u64> {
        let count = Vehicle::find()
            .filter(vehicle::Column::CustomerId.eq(customer_id))
            .count(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to count vehicles: {}", e)))?;

        Ok(count)
    }

    /// Case-insensitive substring search over name, phone and email.
    pub async fn search_customers(
        &self,
        term: &str,
        limit: u64,
    ) -> AppResult<Vec<customer::Model>> {
        let pattern = format!("%{}%", escape_like(term));

        let result = Customer::find()
            .filter(
                Condition::any()
                    .add(Expr::col(customer::Column::FullName).ilike(pattern.clone()))
                    .add(Expr::col(customer::Column::PhoneNumber).ilike(pattern.clone()))
                    .add(Expr::col(customer::Column::Email).ilike(pattern)),
            )
            .limit(limit)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to search customers: {}", e)))?;

        Ok(result)
    }

    /// Narrower variant used by global search: name and phone only.
    pub async fn search_customers_basic(
        &self,
        term: &str,
        limit: u64,
    ) -> AppResult<Vec<customer::Model>> {
        let pattern = format!("%{}%", escape_like(term));

        let result = Customer::find()
            .filter(
                Condition::any()
                    .add(Expr::col(customer::Column::FullName).ilike(pattern.clone()))
                    .add(Expr::col(customer::Column::PhoneNumber).ilike(pattern)),
            )
            .limit(limit)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to search customers: {}", e)))?;

        Ok(result)
    }
}
