//! Appointment models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Appointment record as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Appointment {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub vehicle_id: Uuid,
    pub appointment_date: String,
    pub appointment_time: String,
    pub service_type: String,
    pub notes: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<crate::entity::appointment::Model> for Appointment {
    fn from(m: crate::entity::appointment::Model) -> Self {
        Self {
            id: m.id,
            customer_id: m.customer_id,
            vehicle_id: m.vehicle_id,
            appointment_date: m.appointment_date,
            appointment_time: m.appointment_time,
            service_type: m.service_type,
            notes: m.notes,
            status: m.status,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// Appointment creation payload.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AppointmentCreate {
    pub customer_id: Uuid,
    pub vehicle_id: Uuid,
    pub appointment_date: String,
    pub appointment_time: String,
    pub service_type: String,
    pub notes: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    "scheduled".to_string()
}

/// Status-only update body.
#[derive(Debug, Deserialize, ToSchema)]
pub struct StatusUpdate {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_defaults_to_scheduled() {
        let parsed: AppointmentCreate = serde_json::from_str(
            r#"{
                "customer_id": "7d9f1a36-9a3e-4a57-8f3e-0f6f1df5b001",
                "vehicle_id": "7d9f1a36-9a3e-4a57-8f3e-0f6f1df5b002",
                "appointment_date": "2025-03-10",
                "appointment_time": "10:30",
                "service_type": "stage1"
            }"#,
        )
        .unwrap();
        assert_eq!(parsed.status, "scheduled");
    }
}
