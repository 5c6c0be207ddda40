//! Migration: Create tune_revisions table.

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
                CREATE TABLE tune_revisions (
                    id UUID PRIMARY KEY,
                    job_id UUID NOT NULL,
                    vehicle_id UUID NOT NULL,
                    revision_label VARCHAR(255) NOT NULL,
                    description TEXT,
                    base_file_reference VARCHAR(255),
                    diff_notes TEXT,
                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                CREATE INDEX idx_tune_revisions_job_id ON tune_revisions(job_id);
                CREATE INDEX idx_tune_revisions_vehicle_id ON tune_revisions(vehicle_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS tune_revisions CASCADE;")
            .await?;

        Ok(())
    }
}
