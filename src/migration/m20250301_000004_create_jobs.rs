//! Migration: Create jobs table.
//!
//! `date` holds a client-supplied ISO-8601 string; ordering and the
//! dashboard's week window rely on lexicographic comparison.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TABLE jobs (
                    id UUID PRIMARY KEY,
                    vehicle_id UUID NOT NULL,
                    customer_id UUID NOT NULL,
                    date VARCHAR(50) NOT NULL,
                    technician_name VARCHAR(255) NOT NULL,
                    work_performed TEXT,
                    tune_stage VARCHAR(100),
                    mods_installed TEXT,
                    dyno_results TEXT,
                    before_ecu_map_version VARCHAR(255),
                    after_ecu_map_version VARCHAR(255),
                    files_uploaded TEXT,
                    afr_graph_screenshots TEXT,
                    calibration_notes TEXT,
                    road_test_notes TEXT,
                    next_recommendations TEXT,
                    warranty_or_retune_status VARCHAR(255),
                    odometer_at_visit INTEGER,
                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                CREATE INDEX idx_jobs_vehicle_id ON jobs(vehicle_id);
                CREATE INDEX idx_jobs_customer_id ON jobs(customer_id);
                CREATE INDEX idx_jobs_date ON jobs(date);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS jobs CASCADE;")
            .await?;

        Ok(())
    }
}
