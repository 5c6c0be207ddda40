//! SeaORM entity definitions, one per persisted table.

pub mod appointment;
pub mod billing;
pub mod customer;
pub mod job;
pub mod reminder;
pub mod tune_revision;
pub mod user;
pub mod vehicle;
