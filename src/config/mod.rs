//! Configuration modules for the Registrar API.
//!
//! Each submodule handles one aspect of configuration, loaded from
//! environment variables once at startup and injected through
//! [`crate::state::AppState`], never read ad hoc during request handling.
//!
//! # Modules
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`database`]: PostgreSQL database connection pool initialization
//! - [`jwt`]: JWT authentication configuration

pub mod cors;
pub mod database;
pub mod jwt;
