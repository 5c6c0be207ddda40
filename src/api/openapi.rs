//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::{api, error, models};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "IgnitionLab Dynamics Server",
        version = "0.3.0",
        description = "Workshop management API for an ECU tuning shop: customers, vehicles, jobs, tune revisions, billing, reminders and appointments"
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    paths(
        // Health endpoints
        api::health::health,
        api::health::ready,
        // Auth endpoints
        api::auth::login,
        api::auth::me,
        api::auth::register,
        // User management
        api::users::list_users,
        api::users::create_user,
        api::users::update_role,
        api::users::delete_user,
        // Customers
        api::customers::create_customer,
        api::customers::list_customers,
        api::customers::get_customer,
        api::customers::update_customer,
        api::customers::search_customers,
        api::customers::delete_customer,
        // Vehicles
        api::vehicles::create_vehicle,
        api::vehicles::list_vehicles,
        api::vehicles::get_vehicle,
        api::vehicles::update_vehicle,
        api::vehicles::search_vehicles,
        api::vehicles::delete_vehicle,
        // Jobs
        api::jobs::create_job,
        api::jobs::list_jobs,
        api::jobs::get_job,
        api::jobs::update_job,
        api::jobs::delete_job,
        // Tune revisions
        api::tune_revisions::create_revision,
        api::tune_revisions::list_revisions,
        api::tune_revisions::update_revision,
        // Billing
        api::billing::create_billing,
        api::billing::list_billing,
        api::billing::update_billing,
        // Reminders
        api::reminders::create_reminder,
        api::reminders::list_reminders,
        api::reminders::update_reminder_status,
        // Appointments
        api::appointments::create_appointment,
        api::appointments::list_appointments,
        api::appointments::update_appointment_status,
        api::appointments::delete_appointment,
        // Dashboard and search
        api::dashboard::stats,
        api::search::global_search,
        // Uploads
        api::uploads::upload_file,
        api::uploads::get_file,
    ),
    components(
        schemas(
            // Common
            error::ErrorResponse,
            // Health
            api::health::HealthResponse,
            api::health::ReadyResponse,
            // Auth and users
            models::UserLogin,
            models::Token,
            models::UserCreate,
            models::RoleUpdate,
            models::UserResponse,
            // Customers
            models::Customer,
            models::CustomerCreate,
            // Vehicles
            models::Vehicle,
            models::VehicleCreate,
            // Jobs
            models::Job,
            models::JobCreate,
            // Tune revisions
            models::TuneRevision,
            models::TuneRevisionCreate,
            models::TuneRevisionUpdate,
            // Billing
            models::Billing,
            models::BillingCreate,
            // Reminders
            models::Reminder,
            models::ReminderCreate,
            // Appointments
            models::Appointment,
            models::AppointmentCreate,
            models::StatusUpdate,
            // Dashboard and search
            models::DashboardStats,
            models::SearchResults,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Auth", description = "Login, registration and session identity"),
        (name = "Users", description = "Admin-only account management"),
        (name = "Customers", description = "Customer records"),
        (name = "Vehicles", description = "Vehicle records and QR codes"),
        (name = "Jobs", description = "Service and tuning jobs"),
        (name = "Tune Revisions", description = "ECU map revision history"),
        (name = "Billing", description = "Quotes, invoices and payment status"),
        (name = "Reminders", description = "Follow-up reminders"),
        (name = "Appointments", description = "Workshop appointments"),
        (name = "Dashboard", description = "Summary statistics"),
        (name = "Search", description = "Cross-entity search"),
        (name = "Uploads", description = "File upload and retrieval")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Add the bearer-token security scheme.
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_token",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
