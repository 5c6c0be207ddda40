//! Tune revision models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Tune revision record as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TuneRevision {
    pub id: Uuid,
    pub job_id: Uuid,
    pub vehicle_id: Uuid,
    pub revision_label: String,
    pub description: Option<String>,
    pub base_file_reference: Option<String>,
    pub diff_notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<crate::entity::tune_revision::Model> for TuneRevision {
    fn from(m: crate::entity::tune_revision::Model) -> Self {
        Self {
            id: m.id,
            job_id: m.job_id,
            vehicle_id: m.vehicle_id,
            revision_label: m.revision_label,
            description: m.description,
            base_file_reference: m.base_file_reference,
            diff_notes: m.diff_notes,
            created_at: m.created_at,
        }
    }
}

/// Tune revision creation payload. `base_file_reference` is not writable
/// through this payload; it stays server-managed.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct TuneRevisionCreate {
    pub job_id: Uuid,
    pub vehicle_id: Uuid,
    pub revision_label: String,
    pub description: Option<String>,
    pub diff_notes: Option<String>,
}

/// Tune revision update payload. Only the descriptive fields are mutable.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct TuneRevisionUpdate {
    pub revision_label: String,
    pub description: Option<String>,
    pub diff_notes: Option<String>,
}
