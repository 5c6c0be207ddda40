//! Migration: Create billing table.

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
                CREATE TABLE billing (
                    id UUID PRIMARY KEY,
                    job_id UUID NOT NULL,
                    quoted_amount DOUBLE PRECISION NOT NULL,
                    final_billed_amount DOUBLE PRECISION NOT NULL,
                    payment_method VARCHAR(50) NOT NULL,
                    payment_status VARCHAR(20) NOT NULL
                        CHECK (payment_status IN ('paid', 'pending', 'partial')),
                    gst_invoice_number VARCHAR(100),
                    discounts DOUBLE PRECISION,
                    refunds DOUBLE PRECISION,
                    notes TEXT,
                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                CREATE INDEX idx_billing_job_id ON billing(job_id);
                CREATE INDEX idx_billing_payment_status ON billing(payment_status);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS billing CASCADE;")
            .await?;

        Ok(())
    }
}
