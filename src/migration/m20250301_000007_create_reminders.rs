//! Migration: Create reminders table.

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
                CREATE TABLE reminders (
                    id UUID PRIMARY KEY,
                    vehicle_id UUID NOT NULL,
                    customer_id UUID NOT NULL,
                    job_id UUID,
                    reminder_type VARCHAR(50) NOT NULL,
                    reminder_date VARCHAR(50) NOT NULL,
                    message TEXT NOT NULL,
                    status VARCHAR(20) NOT NULL DEFAULT 'pending'
                        CHECK (status IN ('pending', 'completed', 'cancelled')),
                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                CREATE INDEX idx_reminders_vehicle_id ON reminders(vehicle_id);
                CREATE INDEX idx_reminders_status ON reminders(status);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS reminders CASCADE;")
            .await?;

        Ok(())
    }
}
