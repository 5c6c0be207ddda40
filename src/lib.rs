//! IgnitionLab Dynamics workshop management server.
//!
//! REST API over PostgreSQL for an ECU tuning shop: customers, vehicles,
//! service jobs, tune revisions, billing, reminders and appointments,
//! behind bearer-token authentication.

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod middleware;
pub mod migration;
pub mod models;
pub mod services;
