//! Vehicle models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Vehicle record as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Vehicle {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub make: String,
    pub model: String,
    pub variant: String,
    pub engine_code: String,
    pub ecu_type: String,
    pub vin: String,
    pub registration_number: String,
    pub year: i32,
    pub fuel_type: String,
    pub gearbox: String,
    pub odometer_at_last_visit: Option<i32>,
    pub notes: Option<String>,
    /// Inline `data:image/png;base64,...` QR image, set once at creation.
    pub qr_code: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<crate::entity::vehicle::Model> for Vehicle {
    fn from(m: crate::entity::vehicle::Model) -> Self {
        Self {
            id: m.id,
            customer_id: m.customer_id,
            make: m.make,
            model: m.model,
            variant: m.variant,
            engine_code: m.engine_code,
            ecu_type: m.ecu_type,
            vin: m.vin,
            registration_number: m.registration_number,
            year: m.year,
            fuel_type: m.fuel_type,
            gearbox: m.gearbox,
            odometer_at_last_visit: m.odometer_at_last_visit,
            notes: m.notes,
            qr_code: m.qr_code,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// Vehicle creation/update payload. The QR code is server-generated.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct VehicleCreate {
    pub customer_id: Uuid,
    pub make: String,
    pub model: String,
    pub variant: String,
    pub engine_code: String,
    pub ecu_type: String,
    pub vin: String,
    pub registration_number: String,
    pub year: i32,
    pub fuel_type: String,
    pub gearbox: String,
    pub odometer_at_last_visit: Option<i32>,
    pub notes: Option<String>,
}
