//! Migration: Create vehicles table.

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
                CREATE TABLE vehicles (
                    id UUID PRIMARY KEY,
                    customer_id UUID NOT NULL,
                    make VARCHAR(100) NOT NULL,
                    model VARCHAR(100) NOT NULL,
                    variant VARCHAR(100) NOT NULL,
                    engine_code VARCHAR(100) NOT NULL,
                    ecu_type VARCHAR(100) NOT NULL,
                    vin VARCHAR(50) NOT NULL,
                    registration_number VARCHAR(50) NOT NULL,
                    year INTEGER NOT NULL,
                    fuel_type VARCHAR(50) NOT NULL,
                    gearbox VARCHAR(50) NOT NULL,
                    odometer_at_last_visit INTEGER,
                    notes TEXT,
                    qr_code TEXT,
                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                CREATE INDEX idx_vehicles_customer_id ON vehicles(customer_id);
                CREATE INDEX idx_vehicles_registration ON vehicles(registration_number);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS vehicles CASCADE;")
            .await?;

        Ok(())
    }
}
