//! Request authorization middleware.
//!
//! The access-control pipeline gates every protected route group. Per
//! request it runs four stages in order, short-circuiting at the first
//! rejection:
//!
//! 1. [`auth`]: verify the bearer credential's signature and expiry
//! 2. [`principal`]: resolve the claims to a concrete account record in
//!    the partition matching the claimed role
//! 3. [`access`] role gate: exact membership of the resolved role in the
//!    route's allowed set
//! 4. [`access`] ownership guard: when the route addresses a record of
//!    the principal's own kind, the path id must match the principal
//!
//! On success the resolved [`principal::Principal`] rides on the request
//! and handlers receive it through [`access::CurrentPrincipal`].

pub mod access;
pub mod auth;
pub mod principal;
