//! Dashboard and cross-entity search models.

use serde::Serialize;
use utoipa::ToSchema;

use super::{Customer, Job, Vehicle};

/// Summary object returned by `GET /api/dashboard/stats`.
///
/// Assembled from six independent queries; the six reads are separate
/// point-in-time snapshots, not one atomic view.
#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardStats {
    pub jobs_this_week: u64,
    pub pending_payments: u64,
    pub upcoming_reminders: u64,
    pub total_customers: u64,
    pub total_vehicles: u64,
    pub recent_jobs: Vec<Job>,
}

/// Result of the cross-entity search endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct SearchResults {
    pub customers: Vec<Customer>,
    pub vehicles: Vec<Vehicle>,
}
