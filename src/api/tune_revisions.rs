//! Tune revision endpoints.

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{TuneRevision, TuneRevisionCreate, TuneRevisionUpdate};

#[derive(Debug, Deserialize)]
pub struct TuneRevisionListQuery {
    job_id: Option<Uuid>,
    vehicle_id: Option<Uuid>,
}

#[utoipa::path(
    post,
    path = "/api/tune-revisions",
    tag = "Tune Revisions",
    request_body = TuneRevisionCreate,
    responses((status = 200, description = "Revision recorded", body = TuneRevision))
)]
pub async fn create_revision(
    pool: web::Data<DbPool>,
    _auth: AuthUser,
    body: web::Json<TuneRevisionCreate>,
) -> AppResult<HttpResponse> {
    let revision = pool.insert_tune_revision(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(TuneRevision::from(revision)))
}

/// List revisions oldest first, so the tune history reads top-down.
#[utoipa::path(
    get,
    path = "/api/tune-revisions",
    tag = "Tune Revisions",
    params(
        ("job_id" = Option<Uuid>, Query, description = "Filter by job"),
        ("vehicle_id" = Option<Uuid>, Query, description = "Filter by vehicle")
    ),
    responses((status = 200, description = "Revisions", body = [TuneRevision]))
)]
pub async fn list_revisions(
    pool: web::Data<DbPool>,
    _auth: AuthUser,
    query: web::Query<TuneRevisionListQuery>,
) -> AppResult<HttpResponse> {
    let revisions: Vec<TuneRevision> = pool
        .list_tune_revisions(query.job_id, query.vehicle_id)
        .await?
        .into_iter()
        .map(TuneRevision::from)
        .collect();

    Ok(HttpResponse::Ok().json(revisions))
}

#[utoipa::path(
    put,
    path = "/api/tune-revisions/{revision_id}",
    tag = "Tune Revisions",
    params(("revision_id" = Uuid, Path, description = "Revision UUID")),
    request_body = TuneRevisionUpdate,
    responses(
        (status = 200, description = "Revision updated", body = TuneRevision),
        (status = 404, description = "Tune revision not found")
    )
)]
pub async fn update_revision(
    pool: web::Data<DbPool>,
    _auth: AuthUser,
    path: web::Path<Uuid>,
    body: web::Json<TuneRevisionUpdate>,
) -> AppResult<HttpResponse> {
    let revision = pool
        .update_tune_revision(path.into_inner(), body.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(TuneRevision::from(revision)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/tune-revisions")
            .route(web::get().to(list_revisions))
            .route(web::post().to(create_revision)),
    )
    .service(
        web::resource("/tune-revisions/{revision_id}").route(web::put().to(update_revision)),
    );
}
