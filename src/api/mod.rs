//! HTTP API handlers, one module per resource.

pub mod appointments;
pub mod auth;
pub mod billing;
pub mod customers;
pub mod dashboard;
pub mod health;
pub mod jobs;
pub mod openapi;
pub mod reminders;
pub mod search;
pub mod tune_revisions;
pub mod uploads;
pub mod users;
pub mod vehicles;
