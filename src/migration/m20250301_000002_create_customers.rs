//! Migration: Create customers table.

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
                CREATE TABLE customers (
                    id UUID PRIMARY KEY,
                    full_name VARCHAR(255) NOT NULL,
                    phone_number VARCHAR(50) NOT NULL,
                    whatsapp_number VARCHAR(50),
                    email VARCHAR(255),
                    instagram_handle VARCHAR(100),
                    address TEXT,
                    gst_number VARCHAR(50),
                    id_proof_reference VARCHAR(255),
                    consent_docs_reference VARCHAR(255),
                    notes TEXT,
                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                CREATE INDEX idx_customers_full_name ON customers(full_name);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS customers CASCADE;")
            .await?;

        Ok(())
    }
}
