//! Billing models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Payment statuses counted as outstanding by the dashboard.
pub const OUTSTANDING_STATUSES: &[&str] = &["pending", "partial"];

/// Billing record as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Billing {
    pub id: Uuid,
    pub job_id: Uuid,
    pub quoted_amount: f64,
    pub final_billed_amount: f64,
    pub payment_method: String,
    pub payment_status: String,
    pub gst_invoice_number: Option<String>,
    pub discounts: Option<f64>,
    pub refunds: Option<f64>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<crate::entity::billing::Model> for Billing {
    fn from(m: crate::entity::billing::Model) -> Self {
        Self {
            id: m.id,
            job_id: m.job_id,
            quoted_amount: m.quoted_amount,
            final_billed_amount: m.final_billed_amount,
            payment_method: m.payment_method,
            payment_status: m.payment_status,
            gst_invoice_number: m.gst_invoice_number,
            discounts: m.discounts,
            refunds: m.refunds,
            notes: m.notes,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// Billing creation/update payload.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct BillingCreate {
    pub job_id: Uuid,
    pub quoted_amount: f64,
    pub final_billed_amount: f64,
    pub payment_method: String,
    pub payment_status: String,
    pub gst_invoice_number: Option<String>,
    pub discounts: Option<f64>,
    pub refunds: Option<f64>,
    pub notes: Option<String>,
}
