//! Billing endpoints.

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{Billing, BillingCreate};

#[derive(Debug, Deserialize)]
pub struct BillingListQuery {
    job_id: Option<Uuid>,
}

#[utoipa::path(
    post,
    path = "/api/billing",
    tag = "Billing",
    request_body = BillingCreate,
    responses((status = 200, description = "Billing record created", body = Billing))
)]
pub async fn create_billing(
    pool: web::Data<DbPool>,
    _auth: AuthUser,
    body: web::Json<BillingCreate>,
) -> AppResult<HttpResponse> {
    let record = pool.insert_billing(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(Billing::from(record)))
}

#[utoipa::path(
    get,
    path = "/api/billing",
    tag = "Billing",
    params(("job_id" = Option<Uuid>, Query, description = "Filter by job")),
    responses((status = 200, description = "Billing records", body = [Billing]))
)]
pub async fn list_billing(
    pool: web::Data<DbPool>,
    _auth: AuthUser,
    query: web::Query<BillingListQuery>,
) -> AppResult<HttpResponse> {
    let records: Vec<Billing> = pool
        .list_billing(query.job_id)
        .await?
        .into_iter()
        .map(Billing::from)
        .collect();

    Ok(HttpResponse::Ok().json(records))
}

#[utoipa::path(
    put,
    path = "/api/billing/{billing_id}",
    tag = "Billing",
    params(("billing_id" = Uuid, Path, description = "Billing record UUID")),
    request_body = BillingCreate,
    responses(
        (status = 200, description = "Billing record updated", body = Billing),
        (status = 404, description = "Billing record not found")
    )
)]
pub async fn update_billing(
    pool: web::Data<DbPool>,
    _auth: AuthUser,
    path: web::Path<Uuid>,
    body: web::Json<BillingCreate>,
) -> AppResult<HttpResponse> {
    let record = pool
        .update_billing(path.into_inner(), body.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(Billing::from(record)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/billing")
            .route(web::get().to(list_billing))
            .route(web::post().to(create_billing)),
    )
    .service(web::resource("/billing/{billing_id}").route(web::put().to(update_billing)));
}
