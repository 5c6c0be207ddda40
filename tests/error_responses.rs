//! HTTP error contract tests.
//!
//! Every error leaving the API must map to the documented status code and
//! carry a JSON body with `error` and `detail` fields.

use actix_web::{test, web, App, HttpResponse};

use ignitionlab_lib::error::{AppError, AppResult, ErrorResponse};

async fn not_found() -> AppResult<HttpResponse> {
    Err(AppError::NotFound("Vehicle".to_string()))
}

async fn blocked_delete() -> AppResult<HttpResponse> {
    Err(AppError::Conflict(
        "Cannot delete customer. Please delete 2 associated vehicle(s) first.".to_string(),
    ))
}

async fn unauthorized() -> AppResult<HttpResponse> {
    Err(AppError::Unauthorized(
        "Could not validate credentials".to_string(),
    ))
}

async fn forbidden() -> AppResult<HttpResponse> {
    Err(AppError::Forbidden("Not authorized".to_string()))
}

async fn database_error() -> AppResult<HttpResponse> {
    Err(AppError::Database("connection reset".to_string()))
}

fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/not-found", web::get().to(not_found))
        .route("/blocked", web::delete().to(blocked_delete))
        .route("/unauthorized", web::get().to(unauthorized))
        .route("/forbidden", web::get().to(forbidden))
        .route("/db", web::get().to(database_error));
}

#[actix_web::test]
async fn test_not_found_body() {
    let app = test::init_service(App::new().configure(routes)).await;

    let req = test::TestRequest::get().uri("/not-found").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status().as_u16(), 404);

    let body: ErrorResponse = test::read_body_json(res).await;
    assert_eq!(body.error, "NOT_FOUND");
    assert_eq!(body.detail, "Vehicle not found");
}

#[actix_web::test]
async fn test_blocked_delete_is_400_with_count() {
    let app = test::init_service(App::new().configure(routes)).await;

    let req = test::TestRequest::delete().uri("/blocked").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status().as_u16(), 400);

    let body: ErrorResponse = test::read_body_json(res).await;
    assert_eq!(body.error, "CONFLICT");
    assert!(body.detail.contains("2 associated vehicle(s)"));
}

#[actix_web::test]
async fn test_auth_errors_distinguish_401_from_403() {
    let app = test::init_service(App::new().configure(routes)).await;

    let req = test::TestRequest::get().uri("/unauthorized").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status().as_u16(), 401);

    let req = test::TestRequest::get().uri("/forbidden").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status().as_u16(), 403);
}

#[actix_web::test]
async fn test_database_errors_hide_internals() {
    let app = test::init_service(App::new().configure(routes)).await;

    let req = test::TestRequest::get().uri("/db").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status().as_u16(), 500);

    // The raw driver message must never reach the client.
    let body: ErrorResponse = test::read_body_json(res).await;
    assert_eq!(body.error, "DATABASE_ERROR");
    assert!(!body.detail.contains("connection reset"));
}
