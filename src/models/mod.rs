//! API request/response models.

pub mod appointment;
pub mod billing;
pub mod customer;
pub mod dashboard;
pub mod job;
pub mod reminder;
pub mod tune_revision;
pub mod user;
pub mod vehicle;

pub use appointment::{Appointment, AppointmentCreate, StatusUpdate};
pub use billing::{Billing, BillingCreate};
pub use customer::{Customer, CustomerCreate};
pub use dashboard::{DashboardStats, SearchResults};
pub use job::{Job, JobCreate};
pub use reminder::{Reminder, ReminderCreate};
pub use tune_revision::{TuneRevision, TuneRevisionCreate, TuneRevisionUpdate};
pub use user::{
    CurrentUser, RoleUpdate, SessionClaims, Token, UserCreate, UserLogin, UserResponse,
};
pub use vehicle::{Vehicle, VehicleCreate};
