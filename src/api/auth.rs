//! Authentication endpoints: login, register, current user.

use actix_web::{web, HttpResponse};
use tracing::info;

use crate::auth::AuthUser;
use crate::config::Config;
use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::user::TECHNICIAN_ROLE;
use crate::models::{Token, UserLogin};

/// Log in with username and password.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Auth",
    request_body = UserLogin,
    responses(
        (status = 200, description = "Access token issued", body = Token),
        (status = 401, description = "Incorrect username or password")
    )
)]
pub async fn login(
    pool: web::Data<DbPool>,
    config: web::Data<Config>,
    body: web::Json<UserLogin>,
) -> AppResult<HttpResponse> {
    let body = body.into_inner();

    let user = pool.find_user_by_username(&body.username).await?;

    // One failure path for both unknown user and bad password.
    let user = match user {
        Some(u) if crate::auth::verify_password(&body.password, &u.hashed_password) => u,
        _ => {
            return Err(AppError::Unauthorized(
                "Incorrect username or password".to_string(),
            ))
        }
    };

    let access_token = crate::auth::create_access_token(&user.username, &config.jwt_secret)?;

    info!(username = %user.username, "User logged in");

    Ok(HttpResponse::Ok().json(Token {
        access_token,
        token_type: "bearer".to_string(),
        username: user.username,
        role: user.role,
    }))
}

/// Identify the calling user from their bearer token.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "Auth",
    responses(
        (status = 200, description = "Current username and role"),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn me(auth: AuthUser) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "username": auth.user.username,
        "role": auth.user.role,
    })))
}

/// Self-service registration. New accounts always get the technician role.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "Auth",
    request_body = UserLogin,
    responses(
        (status = 200, description = "Account created"),
        (status = 400, description = "Username already exists")
    )
)]
pub async fn register(
    pool: web::Data<DbPool>,
    body: web::Json<UserLogin>,
) -> AppResult<HttpResponse> {
    let body = body.into_inner();

    if pool.find_user_by_username(&body.username).await?.is_some() {
        return Err(AppError::Conflict("Username already exists".to_string()));
    }

    let hashed = crate::auth::hash_password(&body.password)?;
    let user = pool
        .insert_user(&body.username, &hashed, TECHNICIAN_ROLE)
        .await?;

    info!(username = %user.username, "User registered");

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "User created successfully",
        "username": user.username,
    })))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/auth/login").route(web::post().to(login)))
        .service(web::resource("/auth/me").route(web::get().to(me)))
        .service(web::resource("/auth/register").route(web::post().to(register)));
}
