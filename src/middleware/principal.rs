//! Principal types and resolution.
//!
//! A bearer token carries a `(sub, role)` pair. The role tag selects one of
//! three disjoint partitions (admins, faculty, students); the subject id is
//! then looked up in that partition only. The result is a [`Principal`], a
//! closed tagged union over the three account kinds. Adding a fourth kind
//! means adding a variant here, a lookup on
//! [`SubjectDirectory`](crate::directory::SubjectDirectory), and a dispatch
//! arm in [`resolve_principal`]; the match is exhaustive, so the compiler
//! flags every site.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::directory::SubjectDirectory;
use crate::modules::admins::model::Admin;
use crate::modules::faculty::model::Faculty;
use crate::modules::students::model::Student;
use crate::utils::errors::AccessError;

/// The closed set of roles a credential may claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Faculty,
    Student,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Faculty => "faculty",
            Role::Student => "student",
        }
    }

    /// Parses a role tag from a token claim. Anything outside the closed
    /// set yields `None`; callers treat that as a resolution failure.
    pub fn parse(role_str: &str) -> Option<Role> {
        match role_str {
            "admin" => Some(Role::Admin),
            "faculty" => Some(Role::Faculty),
            "student" => Some(Role::Student),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JWT claims carried by an access token.
///
/// `role` stays a plain string here so that a token claiming a role outside
/// the closed set still decodes and is then rejected as `UnknownRole`
/// during resolution, rather than failing opaquely at deserialization.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    pub exp: usize,
    pub iat: usize,
}

/// The authenticated subject attached to a request after resolution.
///
/// Created fresh per request and discarded with it; never cached.
#[derive(Debug, Clone)]
pub enum Principal {
    Admin(Admin),
    Faculty(Faculty),
    Student(Student),
}

impl Principal {
    pub fn id(&self) -> Uuid {
        match self {
            Principal::Admin(admin) => admin.id,
            Principal::Faculty(faculty) => faculty.id,
            Principal::Student(student) => student.id,
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Principal::Admin(_) => Role::Admin,
            Principal::Faculty(_) => Role::Faculty,
            Principal::Student(_) => Role::Student,
        }
    }
}

/// Loads the concrete account record for a set of verified claims.
///
/// Fail-closed on every path: an unknown role tag, a malformed subject id,
/// and a missing record all reject. A store error is surfaced as
/// [`AccessError::UpstreamLookupFailure`] so a transient outage is reported
/// as a server failure, not as "unauthorized".
pub async fn resolve_principal(
    directory: &dyn SubjectDirectory,
    claims: &Claims,
) -> Result<Principal, AccessError> {
    let role = Role::parse(&claims.role).ok_or(AccessError::UnknownRole)?;
    let id = Uuid::parse_str(&claims.sub).map_err(|_| AccessError::PrincipalNotFound)?;

    let principal = match role {
        Role::Admin => directory
            .find_admin(id)
            .await
            .map_err(AccessError::UpstreamLookupFailure)?
            .map(Principal::Admin),
        Role::Faculty => directory
            .find_faculty(id)
            .await
            .map_err(AccessError::UpstreamLookupFailure)?
            .map(Principal::Faculty),
        Role::Student => directory
            .find_student(id)
            .await
            .map_err(AccessError::UpstreamLookupFailure)?
            .map(Principal::Student),
    };

    // A valid, unexpired token whose subject was deleted must still be
    // rejected.
    principal.ok_or(AccessError::PrincipalNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_roles() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("faculty"), Some(Role::Faculty));
        assert_eq!(Role::parse("student"), Some(Role::Student));
    }

    #[test]
    fn test_parse_unknown_role() {
        assert_eq!(Role::parse("superuser"), None);
        assert_eq!(Role::parse("Admin"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn test_role_round_trip() {
        for role in [Role::Admin, Role::Faculty, Role::Student] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }
}
