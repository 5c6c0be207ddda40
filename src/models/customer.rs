//! Customer models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Customer record as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Customer {
    pub id: Uuid,
    pub full_name: String,
    pub phone_number: String,
    pub whatsapp_number: Option<String>,
    pub email: Option<String>,
    pub instagram_handle: Option<String>,
    pub address: Option<String>,
    pub gst_number: Option<String>,
    pub id_proof_reference: Option<String>,
    pub consent_docs_reference: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<crate::entity::customer::Model> for Customer {
    fn from(m: crate::entity::customer::Model) -> Self {
        Self {
            id: m.id,
            full_name: m.full_name,
            phone_number: m.phone_number,
            whatsapp_number: m.whatsapp_number,
            email: m.email,
            instagram_handle: m.instagram_handle,
            address: m.address,
            gst_number: m.gst_number,
            id_proof_reference: m.id_proof_reference,
            consent_docs_reference: m.consent_docs_reference,
            notes: m.notes,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// Customer creation/update payload.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CustomerCreate {
    pub full_name: String,
    pub phone_number: String,
    pub whatsapp_number: Option<String>,
    pub email: Option<String>,
    pub instagram_handle: Option<String>,
    pub address: Option<String>,
    pub gst_number: Option<String>,
    pub id_proof_reference: Option<String>,
    pub consent_docs_reference: Option<String>,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tolerates_unknown_fields() {
        let parsed: CustomerCreate = serde_json::from_str(
            r#"{"full_name": "Test Customer", "phone_number": "+91-9876543210", "loyalty_tier": "gold"}"#,
        )
        .unwrap();
        assert_eq!(parsed.full_name, "Test Customer");
        assert!(parsed.email.is_none());
    }
}
