//! Migration: Create appointments table.

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
                CREATE TABLE appointments (
                    id UUID PRIMARY KEY,
                    customer_id UUID NOT NULL,
                    vehicle_id UUID NOT NULL,
                    appointment_date VARCHAR(50) NOT NULL,
                    appointment_time VARCHAR(20) NOT NULL,
                    service_type VARCHAR(100) NOT NULL,
                    notes TEXT,
                    status VARCHAR(20) NOT NULL DEFAULT 'scheduled'
                        CHECK (status IN ('scheduled', 'confirmed', 'completed', 'cancelled')),
                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                CREATE INDEX idx_appointments_vehicle_id ON appointments(vehicle_id);
                CREATE INDEX idx_appointments_date ON appointments(appointment_date);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS appointments CASCADE;")
            .await?;

        Ok(())
    }
}
