//! SeaORM database migrations.

pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_users;
mod m20250301_000002_create_customers;
mod m20250301_000003_create_vehicles;
mod m20250301_000004_create_jobs;
mod m20250301_000005_create_tune_revisions;
mod m20250301_000006_create_billing;
mod m20250301_000007_create_reminders;
mod m20250301_000008_create_appointments;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_users::Migration),
            Box::new(m20250301_000002_create_customers::Migration),
            Box::new(m20250301_000003_create_vehicles::Migration),
            Box::new(m20250301_000004_create_jobs::Migration),
            Box::new(m20250301_000005_create_tune_revisions::Migration),
            Box::new(m20250301_000006_create_billing::Migration),
            Box::new(m20250301_000007_create_reminders::Migration),
            Box::new(m20250301_000008_create_appointments::Migration),
        ]
    }
}
