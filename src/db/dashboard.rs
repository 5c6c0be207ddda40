//! Aggregate queries backing the dashboard endpoint.

use chrono::{Duration, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};

use crate::entity::customer::Entity as Customer;
use crate::entity::vehicle::Entity as Vehicle;
use crate::error::{AppError, AppResult};
use crate::models::{DashboardStats, Job};

use super::DbPool;

impl DbPool {
    pub async fn count_customers(&self) -> AppResult<u64> {
        let count = Customer::find()
            .count(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to count customers: {}", e)))?;

        Ok(count)
    }

    pub async fn count_vehicles(&self) -> AppResult<u64> {
        let count = Vehicle::find()
            .count(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to count vehicles: {}", e)))?;

        Ok(count)
    }

    /// Assemble the dashboard summary from six independent queries. Counts are
    /// separate snapshots, not one atomic read.
    pub async fn dashboard_stats(&self) -> AppResult<DashboardStats> {
        let now = Utc::now();
        let week_ago = (now - Duration::days(7)).to_rfc3339();
        let today = now.to_rfc3339();

        let jobs_this_week = self.count_jobs_since(&week_ago).await?;
        let pending_payments = self.count_outstanding_payments().await?;
        let upcoming_reminders = self.count_upcoming_reminders(&today).await?;
        let total_customers = self.count_customers().await?;
        let total_vehicles = self.count_vehicles().await?;
        let recent_jobs = self
            .recent_jobs(5)
            .await?
            .into_iter()
            .map(Job::from)
            .collect();

        Ok(DashboardStats {
            jobs_this_week,
            pending_payments,
            upcoming_reminders,
            total_customers,
            total_vehicles,
            recent_jobs,
        })
    }
}
