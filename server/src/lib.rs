//! Silence configuration store
//!
//! Loads the process-wide settings (database connection, HTTP port, API prefix,
//! SQL script order, optional user-auth table, secret key) once at startup and
//! exposes them read-only.

pub mod app;
pub mod core;
pub mod utils;
