//! Service job endpoints.

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::{Job, JobCreate};

#[derive(Debug, Deserialize)]
pub struct JobListQuery {
    vehicle_id: Option<Uuid>,
    customer_id: Option<Uuid>,
}

/// Record a job. A non-zero odometer reading is propagated to the vehicle's
/// `odometer_at_last_visit`.
#[utoipa::path(
    post,
    path = "/api/jobs",
    tag = "Jobs",
    request_body = JobCreate,
    responses((status = 200, description = "Job created", body = Job))
)]
pub async fn create_job(
    pool: web::Data<DbPool>,
    _auth: AuthUser,
    body: web::Json<JobCreate>,
) -> AppResult<HttpResponse> {
    let body = body.into_inner();

    if let Some(odometer) = body.odometer_at_visit.filter(|&o| o != 0) {
        pool.set_vehicle_odometer(body.vehicle_id, odometer).await?;
    }

    let job = pool.insert_job(body).await?;

    Ok(HttpResponse::Ok().json(Job::from(job)))
}

/// List jobs newest service date first.
#[utoipa::path(
    get,
    path = "/api/jobs",
    tag = "Jobs",
    params(
        ("vehicle_id" = Option<Uuid>, Query, description = "Filter by vehicle"),
        ("customer_id" = Option<Uuid>, Query, description = "Filter by customer")
    ),
    responses((status = 200, description = "Jobs", body = [Job]))
)]
pub async fn list_jobs(
    pool: web::Data<DbPool>,
    _auth: AuthUser,
    query: web::Query<JobListQuery>,
) -> AppResult<HttpResponse> {
    let jobs: Vec<Job> = pool
        .list_jobs(query.vehicle_id, query.customer_id)
        .await?
        .into_iter()
        .map(Job::from)
        .collect();

    Ok(HttpResponse::Ok().json(jobs))
}

#[utoipa::path(
    get,
    path = "/api/jobs/{job_id}",
    tag = "Jobs",
    params(("job_id" = Uuid, Path, description = "Job UUID")),
    responses(
        (status = 200, description = "Job detail", body = Job),
        (status = 404, description = "Job not found")
    )
)]
pub async fn get_job(
    pool: web::Data<DbPool>,
    _auth: AuthUser,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let job = pool
        .get_job(path.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound("Job".to_string()))?;

    Ok(HttpResponse::Ok().json(Job::from(job)))
}

/// Full update. Non-zero odometer readings propagate to the vehicle here too.
#[utoipa::path(
    put,
    path = "/api/jobs/{job_id}",
    tag = "Jobs",
    params(("job_id" = Uuid, Path, description = "Job UUID")),
    request_body = JobCreate,
    responses(
        (status = 200, description = "Job updated", body = Job),
        (status = 404, description = "Job not found")
    )
)]
pub async fn update_job(
    pool: web::Data<DbPool>,
    _auth: AuthUser,
    path: web::Path<Uuid>,
    body: web::Json<JobCreate>,
) -> AppResult<HttpResponse> {
    let body = body.into_inner();

    if let Some(odometer) = body.odometer_at_visit.filter(|&o| o != 0) {
        pool.set_vehicle_odometer(body.vehicle_id, odometer).await?;
    }

    let job = pool.update_job(path.into_inner(), body).await?;

    Ok(HttpResponse::Ok().json(Job::from(job)))
}

/// Delete a job along with its tune revisions and billing records.
#[utoipa::path(
    delete,
    path = "/api/jobs/{job_id}",
    tag = "Jobs",
    params(("job_id" = Uuid, Path, description = "Job UUID")),
    responses(
        (status = 200, description = "Job deleted"),
        (status = 404, description = "Job not found")
    )
)]
pub async fn delete_job(
    pool: web::Data<DbPool>,
    _auth: AuthUser,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let job_id = path.into_inner();

    pool.delete_tune_revisions_for_job(job_id).await?;
    pool.delete_billing_for_job(job_id).await?;

    pool.delete_job(job_id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Job deleted successfully"
    })))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/jobs")
            .route(web::get().to(list_jobs))
            .route(web::post().to(create_job)),
    )
    .service(
        web::resource("/jobs/{job_id}")
            .route(web::get().to(get_job))
            .route(web::put().to(update_job))
            .route(web::delete().to(delete_job)),
    );
}
