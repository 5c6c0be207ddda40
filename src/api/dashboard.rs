//! Dashboard summary endpoint.

use actix_web::{web, HttpResponse};

use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::DashboardStats;

#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    tag = "Dashboard",
    responses((status = 200, description = "Workshop summary", body = DashboardStats))
)]
pub async fn stats(pool: web::Data<DbPool>, _auth: AuthUser) -> AppResult<HttpResponse> {
    let stats = pool.dashboard_stats().await?;
    Ok(HttpResponse::Ok().json(stats))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/dashboard/stats").route(web::get().to(stats)));
}
