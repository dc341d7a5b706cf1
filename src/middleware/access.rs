//! Route-level access policy and the authorization pipeline.
//!
//! Every protected route group declares a [`RoutePolicy`] at registration
//! time: the set of roles allowed through, and optionally the resource kind
//! its `{id}` path parameter refers to. [`require_access`] runs the whole
//! chain per request (verify credential, resolve principal, role gate,
//! ownership guard), short-circuiting at the first rejection. On success
//! the resolved [`Principal`] is attached to the request so handlers can
//! take it via the [`CurrentPrincipal`] extractor.
//!
//! # Usage
//!
//! ```ignore
//! let protected = Router::new()
//!     .route("/{id}", get(get_student).put(update_student))
//!     .route_layer(middleware::from_fn_with_state(
//!         (
//!             state.clone(),
//!             RoutePolicy::roles(&[Role::Admin, Role::Faculty, Role::Student])
//!                 .owned_by(Role::Student),
//!         ),
//!         require_access,
//!     ));
//! ```

use axum::{
    extract::{FromRequestParts, Path, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use tracing::warn;
use uuid::Uuid;

use crate::middleware::auth::verify_credential;
use crate::middleware::principal::{Principal, Role, resolve_principal};
use crate::state::AppState;
use crate::utils::errors::AccessError;

/// Static per-route-group authorization configuration.
///
/// Built once at route registration and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct RoutePolicy {
    allowed_roles: &'static [Role],
    owned_kind: Option<Role>,
}

impl RoutePolicy {
    /// Declares the roles permitted to reach the route group.
    ///
    /// # Panics
    ///
    /// Panics if `allowed_roles` is empty. An empty set would make the
    /// route unreachable by design; that is a registration bug and is
    /// flagged at startup rather than silently denying everything.
    pub fn roles(allowed_roles: &'static [Role]) -> Self {
        assert!(
            !allowed_roles.is_empty(),
            "a route policy must allow at least one role"
        );
        Self {
            allowed_roles,
            owned_kind: None,
        }
    }

    /// Declares that the route's `{id}` path parameter addresses a record
    /// of the given kind, enabling the ownership guard.
    pub fn owned_by(mut self, kind: Role) -> Self {
        self.owned_kind = Some(kind);
        self
    }

    /// Exact membership check; no hierarchy and no implicit escalation.
    /// A policy must enumerate every role that should pass, including
    /// administrative override roles.
    pub fn permits(&self, role: Role) -> bool {
        self.allowed_roles.contains(&role)
    }

    pub fn owned_kind(&self) -> Option<Role> {
        self.owned_kind
    }
}

/// Role gate: deny unless the resolved principal's role is enumerated.
pub fn check_role(principal: &Principal, policy: &RoutePolicy) -> Result<(), AccessError> {
    if policy.permits(principal.role()) {
        Ok(())
    } else {
        Err(AccessError::RoleDenied)
    }
}

/// Ownership guard: a principal of the addressed kind may only act on its
/// own record.
///
/// Principals of a *different* role are exempt here: the role gate has
/// already decided which kinds may reach this route at all, so an admin
/// editing a faculty record passes untouched. This runs strictly after
/// [`check_role`]; it narrows, it never grants.
pub fn check_ownership(
    principal: &Principal,
    resource_kind: Role,
    target_id: Uuid,
) -> Result<(), AccessError> {
    if principal.role() != resource_kind {
        return Ok(());
    }

    if principal.id() == target_id {
        Ok(())
    } else {
        Err(AccessError::OwnershipDenied)
    }
}

/// The resolved principal for the current request.
///
/// Inserted by [`require_access`] after the full chain passes; handlers
/// behind a protected route group take it as an extractor argument. Routes
/// not wrapped by the pipeline have no principal and are rejected, so a
/// handler can never observe an unauthenticated request.
#[derive(Debug, Clone)]
pub struct CurrentPrincipal(pub Principal);

impl<S> FromRequestParts<S> for CurrentPrincipal
where
    S: Send + Sync,
{
    type Rejection = AccessError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentPrincipal>()
            .cloned()
            .ok_or(AccessError::MissingCredential)
    }
}

/// Middleware composing the full authorization chain for one route group.
///
/// Stages run in a fixed order and the first rejection terminates the
/// request: verify → resolve → role gate → ownership guard. There is no
/// retry and no default-permit branch anywhere in the chain.
pub async fn require_access(
    State((state, policy)): State<(AppState, RoutePolicy)>,
    req: Request,
    next: Next,
) -> Result<Response, AccessError> {
    let (mut parts, body) = req.into_parts();

    let principal = match authorize(&state, &policy, &mut parts).await {
        Ok(principal) => principal,
        Err(err) => {
            warn!(
                error = %err,
                path = %parts.uri.path(),
                "request rejected by access pipeline"
            );
            return Err(err);
        }
    };

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(CurrentPrincipal(principal));
    Ok(next.run(req).await)
}

async fn authorize(
    state: &AppState,
    policy: &RoutePolicy,
    parts: &mut Parts,
) -> Result<Principal, AccessError> {
    let claims = verify_credential(&parts.headers, &state.jwt_config)?;
    let principal = resolve_principal(state.directory.as_ref(), &claims).await?;

    check_role(&principal, policy)?;

    if let Some(kind) = policy.owned_kind() {
        let target_id = path_resource_id(parts).await?;
        check_ownership(&principal, kind, target_id)?;
    }

    Ok(principal)
}

/// Reads the `{id}` path parameter as the canonical identifier type.
///
/// A path id that does not parse as a UUID can never equal a principal id,
/// so a format mismatch is a denial rather than a crash or a pass.
async fn path_resource_id(parts: &mut Parts) -> Result<Uuid, AccessError> {
    Path::<Uuid>::from_request_parts(parts, &())
        .await
        .map(|Path(id)| id)
        .map_err(|_| AccessError::OwnershipDenied)
}
