//! Customer endpoints.

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::{Customer, CustomerCreate};

/// Per-entity search result cap.
const SEARCH_LIMIT: u64 = 100;

#[utoipa::path(
    post,
    path = "/api/customers",
    tag = "Customers",
    request_body = CustomerCreate,
    responses((status = 200, description = "Customer created", body = Customer))
)]
pub async fn create_customer(
    pool: web::Data<DbPool>,
    _auth: AuthUser,
    body: web::Json<CustomerCreate>,
) -> AppResult<HttpResponse> {
    let customer = pool.insert_customer(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(Customer::from(customer)))
}

#[utoipa::path(
    get,
    path = "/api/customers",
    tag = "Customers",
    responses((status = 200, description = "All customers", body = [Customer]))
)]
pub async fn list_customers(pool: web::Data<DbPool>, _auth: AuthUser) -> AppResult<HttpResponse> {
    let customers: Vec<Customer> = pool
        .list_customers()
        .await?
        .into_iter()
        .map(Customer::from)
        .collect();

    Ok(HttpResponse::Ok().json(customers))
}

#[utoipa::path(
    get,
    path = "/api/customers/{customer_id}",
    tag = "Customers",
    params(("customer_id" = Uuid, Path, description = "Customer UUID")),
    responses(
        (status = 200, description = "Customer detail", body = Customer),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn get_customer(
    pool: web::Data<DbPool>,
    _auth: AuthUser,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let customer = pool
        .get_customer(path.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound("Customer".to_string()))?;

    Ok(HttpResponse::Ok().json(Customer::from(customer)))
}

#[utoipa::path(
    put,
    path = "/api/customers/{customer_id}",
    tag = "Customers",
    params(("customer_id" = Uuid, Path, description = "Customer UUID")),
    request_body = CustomerCreate,
    responses(
        (status = 200, description = "Customer updated", body = Customer),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn update_customer(
    pool: web::Data<DbPool>,
    _auth: AuthUser,
    path: web::Path<Uuid>,
    body: web::Json<CustomerCreate>,
) -> AppResult<HttpResponse> {
    let customer = pool
        .update_customer(path.into_inner(), body.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(Customer::from(customer)))
}

/// Case-insensitive substring search over name, phone and email.
#[utoipa::path(
    get,
    path = "/api/customers/search/{query}",
    tag = "Customers",
    params(("query" = String, Path, description = "Search term")),
    responses((status = 200, description = "Matching customers", body = [Customer]))
)]
pub async fn search_customers(
    pool: web::Data<DbPool>,
    _auth: AuthUser,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let customers: Vec<Customer> = pool
        .search_customers(&path.into_inner(), SEARCH_LIMIT)
        .await?
        .into_iter()
        .map(Customer::from)
        .collect();

    Ok(HttpResponse::Ok().json(customers))
}

/// Delete a customer. Blocked while any vehicles reference them.
#[utoipa::path(
    delete,
    path = "/api/customers/{customer_id}",
    tag = "Customers",
    params(("customer_id" = Uuid, Path, description = "Customer UUID")),
    responses(
        (status = 200, description = "Customer deleted"),
        (status = 400, description = "Customer still has vehicles"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn delete_customer(
    pool: web::Data<DbPool>,
    _auth: AuthUser,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let customer_id = path.into_inner();

    let vehicle_count = pool.count_vehicles_for_customer(customer_id).await?;
    if vehicle_count > 0 {
        return Err(AppError::Conflict(format!(
            "Cannot delete customer. Please delete {} associated vehicle(s) first.",
            vehicle_count
        )));
    }

    pool.delete_customer(customer_id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Customer deleted successfully"
    })))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/customers")
            .route(web::get().to(list_customers))
            .route(web::post().to(create_customer)),
    )
    .service(web::resource("/customers/search/{query}").route(web::get().to(search_customers)))
    .service(
        web::resource("/customers/{customer_id}")
            .route(web::get().to(get_customer))
            .route(web::put().to(update_customer))
            .route(web::delete().to(delete_customer)),
    );
}
