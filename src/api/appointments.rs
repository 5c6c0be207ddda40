//! Appointment endpoints.

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{Appointment, AppointmentCreate, StatusUpdate};

#[utoipa::path(
    post,
    path = "/api/appointments",
    tag = "Appointments",
    request_body = AppointmentCreate,
    responses((status = 200, description = "Appointment booked", body = Appointment))
)]
pub async fn create_appointment(
    pool: web::Data<DbPool>,
    _auth: AuthUser,
    body: web::Json<AppointmentCreate>,
) -> AppResult<HttpResponse> {
    let appointment = pool.insert_appointment(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(Appointment::from(appointment)))
}

/// List appointments by date, soonest first.
#[utoipa::path(
    get,
    path = "/api/appointments",
    tag = "Appointments",
    responses((status = 200, description = "Appointments", body = [Appointment]))
)]
pub async fn list_appointments(
    pool: web::Data<DbPool>,
    _auth: AuthUser,
) -> AppResult<HttpResponse> {
    let appointments: Vec<Appointment> = pool
        .list_appointments()
        .await?
        .into_iter()
        .map(Appointment::from)
        .collect();

    Ok(HttpResponse::Ok().json(appointments))
}

#[utoipa::path(
    put,
    path = "/api/appointments/{appointment_id}/status",
    tag = "Appointments",
    params(("appointment_id" = Uuid, Path, description = "Appointment UUID")),
    request_body = StatusUpdate,
    responses(
        (status = 200, description = "Status updated"),
        (status = 404, description = "Appointment not found")
    )
)]
pub async fn update_appointment_status(
    pool: web::Data<DbPool>,
    _auth: AuthUser,
    path: web::Path<Uuid>,
    body: web::Json<StatusUpdate>,
) -> AppResult<HttpResponse> {
    pool.update_appointment_status(path.into_inner(), &body.status)
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Appointment status updated successfully"
    })))
}

#[utoipa::path(
    delete,
    path = "/api/appointments/{appointment_id}",
    tag = "Appointments",
    params(("appointment_id" = Uuid, Path, description = "Appointment UUID")),
    responses(
        (status = 200, description = "Appointment deleted"),
        (status = 404, description = "Appointment not found")
    )
)]
pub async fn delete_appointment(
    pool: web::Data<DbPool>,
    _auth: AuthUser,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    pool.delete_appointment(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Appointment deleted successfully"
    })))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/appointments")
            .route(web::get().to(list_appointments))
            .route(web::post().to(create_appointment)),
    )
    .service(
        web::resource("/appointments/{appointment_id}/status")
            .route(web::put().to(update_appointment_status)),
    )
    .service(
        web::resource("/appointments/{appointment_id}")
            .route(web::delete().to(delete_appointment)),
    );
}
