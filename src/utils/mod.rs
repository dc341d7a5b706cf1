//! Utility modules for the Registrar API.
//!
//! - [`errors`]: Application error types and the access-control rejection taxonomy
//! - [`jwt`]: JWT token creation and verification
//! - [`password`]: Password hashing and verification

pub mod errors;
pub mod jwt;
pub mod password;
