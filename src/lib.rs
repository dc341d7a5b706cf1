//! # Registrar API
//!
//! A REST API built with Rust, Axum, and PostgreSQL for managing college
//! records, gated by a role-based access-control pipeline over three
//! disjoint principal kinds: administrators, faculty, and students.
//!
//! ## Architecture
//!
//! The codebase follows a modular layout:
//!
//! ```text
//! src/
//! ├── config/           # Configuration modules (JWT, database, CORS)
//! ├── directory/        # Per-partition account lookups (the resolver seam)
//! ├── middleware/       # The access-control pipeline
//! ├── modules/          # Feature modules
//! │   ├── admins/      # Administrator profiles
//! │   ├── faculty/     # Faculty records
//! │   └── students/    # Student records
//! └── utils/           # Shared utilities (errors, JWT, password hashing)
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `controller.rs`: HTTP handlers
//! - `service.rs`: Business logic
//! - `model.rs`: Data models and DTOs
//! - `router.rs`: Axum router configuration with its access policy
//!
//! ## Access control
//!
//! Every protected route group declares which roles may reach it and,
//! where the route addresses a single record, which account kind that
//! record belongs to. Per request the pipeline verifies the bearer JWT,
//! re-resolves the subject from the matching partition (so deletions take
//! effect immediately), checks role membership, and, for a principal
//! acting on its own kind, checks that the path id is the principal's
//! own. The first failure terminates the request with a 401, 403, or 500
//! class response; handlers only ever see authenticated, authorized
//! requests.
//!
//! ## Roles
//!
//! | Role | Scope |
//! |------|-------|
//! | Admin | Manages faculty and student records, own profile |
//! | Faculty | Student roster access, own profile |
//! | Student | Own record only |
//!
//! Roles are exact: a policy must list every role that should pass, and
//! there is no hierarchy or implicit escalation.

pub mod config;
pub mod directory;
pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;
