//! Cross-entity search endpoint.

use actix_web::{web, HttpResponse};

use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{Customer, SearchResults, Vehicle};

/// Global search cap, per entity.
const GLOBAL_SEARCH_LIMIT: u64 = 5;

/// Search customers and vehicles in one shot, capped at five of each.
///
/// Customer matching here covers name and phone only; the customer-specific
/// search endpoint also matches email.
#[utoipa::path(
    get,
    path = "/api/search/{query}",
    tag = "Search",
    params(("query" = String, Path, description = "Search term")),
    responses((status = 200, description = "Matches", body = SearchResults))
)]
pub async fn global_search(
    pool: web::Data<DbPool>,
    _auth: AuthUser,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let term = path.into_inner();

    let customers: Vec<Customer> = pool
        .search_customers_basic(&term, GLOBAL_SEARCH_LIMIT)
        .await?
        .into_iter()
        .map(Customer::from)
        .collect();

    let vehicles: Vec<Vehicle> = pool
        .search_vehicles(&term, GLOBAL_SEARCH_LIMIT)
        .await?
        .into_iter()
        .map(Vehicle::from)
        .collect();

    Ok(HttpResponse::Ok().json(SearchResults {
        customers,
        vehicles,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/search/{query}").route(web::get().to(global_search)));
}
