//! Reminder models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Reminder record as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Reminder {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub customer_id: Uuid,
    pub job_id: Option<Uuid>,
    pub reminder_type: String,
    pub reminder_date: String,
    pub message: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<crate::entity::reminder::Model> for Reminder {
    fn from(m: crate::entity::reminder::Model) -> Self {
        Self {
            id: m.id,
            vehicle_id: m.vehicle_id,
            customer_id: m.customer_id,
            job_id: m.job_id,
            reminder_type: m.reminder_type,
            reminder_date: m.reminder_date,
            message: m.message,
            status: m.status,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// Reminder creation payload. Status starts as pending.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ReminderCreate {
    pub vehicle_id: Uuid,
    pub customer_id: Uuid,
    pub job_id: Option<Uuid>,
    pub reminder_type: String,
    pub reminder_date: String,
    pub message: String,
}
