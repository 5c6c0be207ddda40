//! Vehicle endpoints.

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::config::Config;
use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::{Vehicle, VehicleCreate};
use crate::services::qr;

/// Per-entity search result cap.
const SEARCH_LIMIT: u64 = 100;

#[derive(Debug, Deserialize)]
pub struct VehicleListQuery {
    customer_id: Option<Uuid>,
}

/// Register a vehicle. A QR code linking to the vehicle's detail page is
/// generated once here and stored with the record.
#[utoipa::path(
    post,
    path = "/api/vehicles",
    tag = "Vehicles",
    request_body = VehicleCreate,
    responses((status = 200, description = "Vehicle created", body = Vehicle))
)]
pub async fn create_vehicle(
    pool: web::Data<DbPool>,
    config: web::Data<Config>,
    _auth: AuthUser,
    body: web::Json<VehicleCreate>,
) -> AppResult<HttpResponse> {
    let id = Uuid::new_v4();
    let qr_code = qr::vehicle_qr_data_uri(&config.frontend_url, id)?;

    let vehicle = pool.insert_vehicle(id, body.into_inner(), qr_code).await?;

    Ok(HttpResponse::Ok().json(Vehicle::from(vehicle)))
}

#[utoipa::path(
    get,
    path = "/api/vehicles",
    tag = "Vehicles",
    params(("customer_id" = Option<Uuid>, Query, description = "Filter by owner")),
    responses((status = 200, description = "Vehicles", body = [Vehicle]))
)]
pub async fn list_vehicles(
    pool: web::Data<DbPool>,
    _auth: AuthUser,
    query: web::Query<VehicleListQuery>,
) -> AppResult<HttpResponse> {
    let vehicles: Vec<Vehicle> = pool
        .list_vehicles(query.customer_id)
        .await?
        .into_iter()
        .map(Vehicle::from)
        .collect();

    Ok(HttpResponse::Ok().json(vehicles))
}

#[utoipa::path(
    get,
    path = "/api/vehicles/{vehicle_id}",
    tag = "Vehicles",
    params(("vehicle_id" = Uuid, Path, description = "Vehicle UUID")),
    responses(
        (status = 200, description = "Vehicle detail", body = Vehicle),
        (status = 404, description = "Vehicle not found")
    )
)]
pub async fn get_vehicle(
    pool: web::Data<DbPool>,
    _auth: AuthUser,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let vehicle = pool
        .get_vehicle(path.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound("Vehicle".to_string()))?;

    Ok(HttpResponse::Ok().json(Vehicle::from(vehicle)))
}

/// Full update. The stored QR code survives updates.
#[utoipa::path(
    put,
    path = "/api/vehicles/{vehicle_id}",
    tag = "Vehicles",
    params(("vehicle_id" = Uuid, Path, description = "Vehicle UUID")),
    request_body = VehicleCreate,
    responses(
        (status = 200, description = "Vehicle updated", body = Vehicle),
        (status = 404, description = "Vehicle not found")
    )
)]
pub async fn update_vehicle(
    pool: web::Data<DbPool>,
    _auth: AuthUser,
    path: web::Path<Uuid>,
    body: web::Json<VehicleCreate>,
) -> AppResult<HttpResponse> {
    let vehicle = pool
        .update_vehicle(path.into_inner(), body.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(Vehicle::from(vehicle)))
}

/// Case-insensitive substring search over registration, VIN, make and model.
#[utoipa::path(
    get,
    path = "/api/vehicles/search/{query}",
    tag = "Vehicles",
    params(("query" = String, Path, description = "Search term")),
    responses((status = 200, description = "Matching vehicles", body = [Vehicle]))
)]
pub async fn search_vehicles(
    pool: web::Data<DbPool>,
    _auth: AuthUser,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let vehicles: Vec<Vehicle> = pool
        .search_vehicles(&path.into_inner(), SEARCH_LIMIT)
        .await?
        .into_iter()
        .map(Vehicle::from)
        .collect();

    Ok(HttpResponse::Ok().json(vehicles))
}

/// Delete a vehicle. Blocked while any jobs reference it; tune revisions,
/// reminders and appointments attached to the vehicle are removed with it.
#[utoipa::path(
    delete,
    path = "/api/vehicles/{vehicle_id}",
    tag = "Vehicles",
    params(("vehicle_id" = Uuid, Path, description = "Vehicle UUID")),
    responses(
        (status = 200, description = "Vehicle deleted"),
        (status = 400, description = "Vehicle still has jobs"),
        (status = 404, description = "Vehicle not found")
    )
)]
pub async fn delete_vehicle(
    pool: web::Data<DbPool>,
    _auth: AuthUser,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let vehicle_id = path.into_inner();

    let job_count = pool.count_jobs_for_vehicle(vehicle_id).await?;
    if job_count > 0 {
        return Err(AppError::Conflict(format!(
            "Cannot delete vehicle. Please delete {} associated job(s) first.",
            job_count
        )));
    }

    pool.delete_tune_revisions_for_vehicle(vehicle_id).await?;
    pool.delete_reminders_for_vehicle(vehicle_id).await?;
    pool.delete_appointments_for_vehicle(vehicle_id).await?;

    pool.delete_vehicle(vehicle_id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Vehicle deleted successfully"
    })))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/vehicles")
            .route(web::get().to(list_vehicles))
            .route(web::post().to(create_vehicle)),
    )
    .service(web::resource("/vehicles/search/{query}").route(web::get().to(search_vehicles)))
    .service(
        web::resource("/vehicles/{vehicle_id}")
            .route(web::get().to(get_vehicle))
            .route(web::put().to(update_vehicle))
            .route(web::delete().to(delete_vehicle)),
    );
}
