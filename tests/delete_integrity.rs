//! Referential-integrity tests for the delete handlers, backed by a mock
//! database so the check-then-delete and cascade flows run end to end.

use std::collections::BTreeMap;

use actix_web::{http::StatusCode, web};
use chrono::Utc;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};
use uuid::Uuid;

use ignitionlab_lib::api::{customers, jobs, vehicles};
use ignitionlab_lib::auth::AuthUser;
use ignitionlab_lib::db::DbPool;
use ignitionlab_lib::entity::{job, vehicle};
use ignitionlab_lib::error::AppError;
use ignitionlab_lib::models::{CurrentUser, JobCreate};

fn caller() -> AuthUser {
    AuthUser {
        user: CurrentUser {
            id: Uuid::new_v4(),
            username: "arjun".to_string(),
            role: "technician".to_string(),
        },
    }
}

/// Row shape produced by SeaORM's paginator `count()`.
fn count_row(n: i64) -> BTreeMap<&'static str, Value> {
    let mut row = BTreeMap::new();
    row.insert("num_items", Value::BigInt(Some(n)));
    row
}

fn exec_ok(rows_affected: u64) -> MockExecResult {
    MockExecResult {
        last_insert_id: 0,
        rows_affected,
    }
}

fn job_row(vehicle_id: Uuid, customer_id: Uuid, odometer: Option<i32>) -> job::Model {
    let now = Utc::now();
    job::Model {
        id: Uuid::new_v4(),
        vehicle_id,
        customer_id,
        date: "2025-03-01T10:00:00+00:00".to_string(),
        technician_name: "Arjun".to_string(),
        work_performed: Some("Stage 1 remap".to_string()),
        tune_stage: None,
        mods_installed: None,
        dyno_results: None,
        before_ecu_map_version: None,
        after_ecu_map_version: None,
        files_uploaded: None,
        afr_graph_screenshots: None,
        calibration_notes: None,
        road_test_notes: None,
        next_recommendations: None,
        warranty_or_retune_status: None,
        odometer_at_visit: odometer,
        created_at: now,
        updated_at: now,
    }
}

fn job_payload(vehicle_id: Uuid, customer_id: Uuid, odometer: Option<i32>) -> JobCreate {
    JobCreate {
        vehicle_id,
        customer_id,
        date: "2025-03-01T10:00:00+00:00".to_string(),
        technician_name: "Arjun".to_string(),
        work_performed: Some("Stage 1 remap".to_string()),
        tune_stage: None,
        mods_installed: None,
        dyno_results: None,
        before_ecu_map_version: None,
        after_ecu_map_version: None,
        calibration_notes: None,
        road_test_notes: None,
        next_recommendations: None,
        warranty_or_retune_status: None,
        odometer_at_visit: odometer,
    }
}

#[actix_web::test]
async fn test_customer_delete_blocked_while_vehicles_remain() {
    let conn = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![count_row(3)]])
        .into_connection();
    let pool = web::Data::new(DbPool::new(conn));

    let err = customers::delete_customer(pool, caller(), web::Path::from(Uuid::new_v4()))
        .await
        .unwrap_err();

    match err {
        AppError::Conflict(detail) => assert!(detail.contains("3 associated vehicle(s)")),
        other => panic!("expected Conflict, got {:?}", other),
    }
}

#[actix_web::test]
async fn test_customer_delete_succeeds_when_unreferenced() {
    let conn = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![count_row(0)]])
        .append_exec_results([exec_ok(1)])
        .into_connection();
    let pool = web::Data::new(DbPool::new(conn));

    let res = customers::delete_customer(pool, caller(), web::Path::from(Uuid::new_v4()))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_vehicle_delete_blocked_while_jobs_remain() {
    let conn = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![count_row(2)]])
        .into_connection();
    let pool = web::Data::new(DbPool::new(conn));

    let err = vehicles::delete_vehicle(pool, caller(), web::Path::from(Uuid::new_v4()))
        .await
        .unwrap_err();

    match err {
        AppError::Conflict(detail) => assert!(detail.contains("2 associated job(s)")),
        other => panic!("expected Conflict, got {:?}", other),
    }
}

#[actix_web::test]
async fn test_vehicle_delete_cascades_dependents() {
    // Tune revisions, reminders and appointments are swept, then the
    // vehicle row itself goes.
    let conn = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![count_row(0)]])
        .append_exec_results([exec_ok(4), exec_ok(1), exec_ok(2), exec_ok(1)])
        .into_connection();
    let pool = web::Data::new(DbPool::new(conn));

    let res = vehicles::delete_vehicle(pool, caller(), web::Path::from(Uuid::new_v4()))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_job_delete_cascades_revisions_and_billing() {
    let conn = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([exec_ok(2), exec_ok(1), exec_ok(1)])
        .into_connection();
    let pool = web::Data::new(DbPool::new(conn));

    let res = jobs::delete_job(pool, caller(), web::Path::from(Uuid::new_v4()))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_job_delete_missing_job_is_404() {
    let conn = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([exec_ok(0), exec_ok(0), exec_ok(0)])
        .into_connection();
    let pool = web::Data::new(DbPool::new(conn));

    let err = jobs::delete_job(pool, caller(), web::Path::from(Uuid::new_v4()))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
}

#[actix_web::test]
async fn test_job_create_survives_stale_vehicle_id() {
    let vehicle_id = Uuid::new_v4();
    let customer_id = Uuid::new_v4();

    // Vehicle lookup for the odometer comes back empty; the job insert
    // must still go through.
    let conn = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<vehicle::Model>::new()])
        .append_query_results([vec![job_row(vehicle_id, customer_id, Some(15500))]])
        .into_connection();
    let pool = web::Data::new(DbPool::new(conn));

    let res = jobs::create_job(
        pool,
        caller(),
        web::Json(job_payload(vehicle_id, customer_id, Some(15500))),
    )
    .await
    .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_job_create_skips_zero_odometer() {
    let vehicle_id = Uuid::new_v4();
    let customer_id = Uuid::new_v4();

    // Only the job insert is queued; a zero reading must not touch the
    // vehicle at all.
    let conn = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![job_row(vehicle_id, customer_id, Some(0))]])
        .into_connection();
    let pool = web::Data::new(DbPool::new(conn));

    let res = jobs::create_job(
        pool,
        caller(),
        web::Json(job_payload(vehicle_id, customer_id, Some(0))),
    )
    .await
    .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
}
