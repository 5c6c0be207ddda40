//! Admin-only user management endpoints.

use actix_web::{web, HttpResponse};
use tracing::info;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::user::DEFAULT_ADMIN_USERNAME;
use crate::models::{RoleUpdate, UserCreate, UserResponse};

/// List all accounts. Password hashes are never included.
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "All user accounts", body = [UserResponse]),
        (status = 403, description = "Caller is not an admin")
    )
)]
pub async fn list_users(pool: web::Data<DbPool>, auth: AuthUser) -> AppResult<HttpResponse> {
    auth.require_admin()?;

    let users: Vec<UserResponse> = pool
        .list_users()
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(users))
}

/// Create an account with an explicit role.
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = UserCreate,
    responses(
        (status = 200, description = "Account created", body = UserResponse),
        (status = 400, description = "Username already exists"),
        (status = 403, description = "Caller is not an admin")
    )
)]
pub async fn create_user(
    pool: web::Data<DbPool>,
    auth: AuthUser,
    body: web::Json<UserCreate>,
) -> AppResult<HttpResponse> {
    auth.require_admin()?;
    let body = body.into_inner();

    if pool.find_user_by_username(&body.username).await?.is_some() {
        return Err(AppError::Conflict("Username already exists".to_string()));
    }

    let hashed = crate::auth::hash_password(&body.password)?;
    let user = pool
        .insert_user(&body.username, &hashed, &body.role)
        .await?;

    info!(username = %user.username, role = %user.role, "User created by admin");

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// Change an account's role.
#[utoipa::path(
    put,
    path = "/api/users/{user_id}/role",
    tag = "Users",
    params(("user_id" = Uuid, Path, description = "User UUID")),
    request_body = RoleUpdate,
    responses(
        (status = 200, description = "Role updated"),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_role(
    pool: web::Data<DbPool>,
    auth: AuthUser,
    path: web::Path<Uuid>,
    body: web::Json<RoleUpdate>,
) -> AppResult<HttpResponse> {
    auth.require_admin()?;

    let user = pool
        .update_user_role(path.into_inner(), &body.role)
        .await?;

    info!(username = %user.username, role = %user.role, "User role updated");

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "User role updated successfully"
    })))
}

/// Delete an account. The built-in admin cannot be removed.
#[utoipa::path(
    delete,
    path = "/api/users/{user_id}",
    tag = "Users",
    params(("user_id" = Uuid, Path, description = "User UUID")),
    responses(
        (status = 200, description = "Account deleted"),
        (status = 400, description = "Cannot delete default admin user"),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    pool: web::Data<DbPool>,
    auth: AuthUser,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    auth.require_admin()?;
    let user_id = path.into_inner();

    if let Some(user) = pool.find_user_by_id(user_id).await? {
        if user.username == DEFAULT_ADMIN_USERNAME {
            return Err(AppError::InvalidInput(
                "Cannot delete default admin user".to_string(),
            ));
        }
    }

    pool.delete_user(user_id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "User deleted successfully"
    })))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/users")
            .route(web::get().to(list_users))
            .route(web::post().to(create_user)),
    )
    .service(web::resource("/users/{user_id}/role").route(web::put().to(update_role)))
    .service(web::resource("/users/{user_id}").route(web::delete().to(delete_user)));
}
