//! Service job models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Decode a JSON-encoded string list stored as a text column.
fn decode_list(raw: Option<&str>) -> Option<Vec<String>> {
    raw.and_then(|s| serde_json::from_str(s).ok())
}

/// Job record as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Job {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub customer_id: Uuid,
    pub date: String,
    pub technician_name: String,
    pub work_performed: Option<String>,
    pub tune_stage: Option<String>,
    pub mods_installed: Option<String>,
    pub dyno_results: Option<String>,
    pub before_ecu_map_version: Option<String>,
    pub after_ecu_map_version: Option<String>,
    pub files_uploaded: Option<Vec<String>>,
    pub afr_graph_screenshots: Option<Vec<String>>,
    pub calibration_notes: Option<String>,
    pub road_test_notes: Option<String>,
    pub next_recommendations: Option<String>,
    pub warranty_or_retune_status: Option<String>,
    pub odometer_at_visit: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<crate::entity::job::Model> for Job {
    fn from(m: crate::entity::job::Model) -> Self {
        Self {
            id: m.id,
            vehicle_id: m.vehicle_id,
            customer_id: m.customer_id,
            date: m.date,
            technician_name: m.technician_name,
            work_performed: m.work_performed,
            tune_stage: m.tune_stage,
            mods_installed: m.mods_installed,
            dyno_results: m.dyno_results,
            before_ecu_map_version: m.before_ecu_map_version,
            after_ecu_map_version: m.after_ecu_map_version,
            files_uploaded: decode_list(m.files_uploaded.as_deref()),
            afr_graph_screenshots: decode_list(m.afr_graph_screenshots.as_deref()),
            calibration_notes: m.calibration_notes,
            road_test_notes: m.road_test_notes,
            next_recommendations: m.next_recommendations,
            warranty_or_retune_status: m.warranty_or_retune_status,
            odometer_at_visit: m.odometer_at_visit,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// Job creation/update payload. The file-list columns are not writable
/// through this payload; they stay server-managed.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct JobCreate {
    pub vehicle_id: Uuid,
    pub customer_id: Uuid,
    pub date: String,
    pub technician_name: String,
    pub work_performed: Option<String>,
    pub tune_stage: Option<String>,
    pub mods_installed: Option<String>,
    pub dyno_results: Option<String>,
    pub before_ecu_map_version: Option<String>,
    pub after_ecu_map_version: Option<String>,
    pub calibration_notes: Option<String>,
    pub road_test_notes: Option<String>,
    pub next_recommendations: Option<String>,
    pub warranty_or_retune_status: Option<String>,
    pub odometer_at_visit: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_stored_list() {
        assert_eq!(
            decode_list(Some(r#"["a.bin","b.bin"]"#)),
            Some(vec!["a.bin".to_string(), "b.bin".to_string()])
        );
    }

    #[test]
    fn test_decode_tolerates_missing_and_garbage() {
        assert_eq!(decode_list(None), None);
        assert_eq!(decode_list(Some("not json")), None);
    }

    #[test]
    fn test_create_payload_ignores_file_lists() {
        let parsed: JobCreate = serde_json::from_str(
            r#"{
                "vehicle_id": "7f1f4a5e-8a85-4a78-9a5d-2a2f5d9c2b11",
                "customer_id": "3d0f0b76-55cc-4bb2-9d4f-6a7b8c9d0e1f",
                "date": "2025-03-01T10:00:00+00:00",
                "technician_name": "Arjun",
                "files_uploaded": ["sneaky.bin"],
                "afr_graph_screenshots": ["afr.png"]
            }"#,
        )
        .unwrap();
        assert_eq!(parsed.technician_name, "Arjun");
    }
}
