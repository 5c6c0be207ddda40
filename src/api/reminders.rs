//! Reminder endpoints.

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{Reminder, ReminderCreate};

#[derive(Debug, Deserialize)]
pub struct ReminderListQuery {
    status: Option<String>,
}

/// The status update travels as a query parameter, not a body.
#[derive(Debug, Deserialize)]
pub struct ReminderStatusQuery {
    status: String,
}

#[utoipa::path(
    post,
    path = "/api/reminders",
    tag = "Reminders",
    request_body = ReminderCreate,
    responses((status = 200, description = "Reminder created", body = Reminder))
)]
pub async fn create_reminder(
    pool: web::Data<DbPool>,
    _auth: AuthUser,
    body: web::Json<ReminderCreate>,
) -> AppResult<HttpResponse> {
    let reminder = pool.insert_reminder(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(Reminder::from(reminder)))
}

/// List reminders by due date, soonest first.
#[utoipa::path(
    get,
    path = "/api/reminders",
    tag = "Reminders",
    params(("status" = Option<String>, Query, description = "Filter by status")),
    responses((status = 200, description = "Reminders", body = [Reminder]))
)]
pub async fn list_reminders(
    pool: web::Data<DbPool>,
    _auth: AuthUser,
    query: web::Query<ReminderListQuery>,
) -> AppResult<HttpResponse> {
    let reminders: Vec<Reminder> = pool
        .list_reminders(query.status.as_deref())
        .await?
        .into_iter()
        .map(Reminder::from)
        .collect();

    Ok(HttpResponse::Ok().json(reminders))
}

/// Update a reminder's status via the `status` query parameter.
#[utoipa::path(
    put,
    path = "/api/reminders/{reminder_id}",
    tag = "Reminders",
    params(
        ("reminder_id" = Uuid, Path, description = "Reminder UUID"),
        ("status" = String, Query, description = "New status")
    ),
    responses(
        (status = 200, description = "Reminder updated", body = Reminder),
        (status = 404, description = "Reminder not found")
    )
)]
pub async fn update_reminder_status(
    pool: web::Data<DbPool>,
    _auth: AuthUser,
    path: web::Path<Uuid>,
    query: web::Query<ReminderStatusQuery>,
) -> AppResult<HttpResponse> {
    let reminder = pool
        .update_reminder_status(path.into_inner(), &query.status)
        .await?;

    Ok(HttpResponse::Ok().json(Reminder::from(reminder)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/reminders")
            .route(web::get().to(list_reminders))
            .route(web::post().to(create_reminder)),
    )
    .service(
        web::resource("/reminders/{reminder_id}").route(web::put().to(update_reminder_status)),
    );
}
