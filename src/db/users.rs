//! Database operations for user accounts.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use crate::auth;
use crate::entity::user::{self, ActiveModel, Entity as User};
use crate::error::{AppError, AppResult};
use crate::models::user::DEFAULT_ADMIN_USERNAME;

use super::DbPool;

impl DbPool {
    /// Look up a user by exact username.
    pub async fn find_user_by_username(&self, username: &str) -> AppResult<Option<user::Model>> {
        let result = User::find()
            .filter(user::Column::Username.eq(username))
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to find user: {}", e)))?;

        Ok(result)
    }

    pub async fn find_user_by_id(&self, id: Uuid) -> AppResult<Option<user::Model>> {
        let result = User::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to find user: {}", e)))?;

        Ok(result)
    }

    /// List all users, oldest first.
    pub async fn list_users(&self) -> AppResult<Vec<user::Model>> {
        let result = User::find()
            .order_by_asc(user::Column::CreatedAt)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list users: {}", e)))?;

        Ok(result)
    }

    /// Insert a new user with an already-hashed password.
    pub async fn insert_user(
        &self,
        username: &str,
        hashed_password: &str,
        role: &str,
    ) -> AppResult<user::Model> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(username.to_string()),
            hashed_password: Set(hashed_password.to_string()),
            role: Set(role.to_string()),
            created_at: Set(Utc::now()),
        };

        let result = model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert user: {}", e)))?;

        Ok(result)
    }

    pub async fn update_user_role(&self, id: Uuid, role: &str) -> AppResult<user::Model> {
        let existing = self
            .find_user_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User".to_string()))?;

        let mut active: ActiveModel = existing.into();
        active.role = Set(role.to_string());

        let result = active
            .update(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to update user role: {}", e)))?;

        Ok(result)
    }

    pub async fn delete_user(&self, id: Uuid) -> AppResult<()> {
        let result = User::delete_by_id(id)
            .exec(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete user: {}", e)))?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("User".to_string()));
        }

        Ok(())
    }

    /// Seed the built-in admin account on first startup.
    pub async fn ensure_default_admin(&self) -> AppResult<()> {
        if self
            .find_user_by_username(DEFAULT_ADMIN_USERNAME)
            .await?
            .is_some()
        {
            return Ok(());
        }

        let hashed = auth::hash_password("IgnLabDyN@2025")?;
        self.insert_user(DEFAULT_ADMIN_USERNAME, &hashed, crate::models::user::ADMIN_ROLE)
            .await?;
        tracing::info!("Default admin user created");

        Ok(())
    }
}
