use crate::middleware::access::{RoutePolicy, require_access};
use crate::middleware::principal::Role;
use crate::modules::students::controller::{get_student, update_student};
use crate::state::AppState;
use axum::{Router, middleware, routing::get};

/// Student route group.
///
/// All three roles may reach these routes, but a student is bound to their
/// own record; admins and faculty may address any student.
pub fn init_student_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/{id}", get(get_student).put(update_student))
        .route_layer(middleware::from_fn_with_state(
            (
                state.clone(),
                RoutePolicy::roles(&[Role::Admin, Role::Faculty, Role::Student])
                    .owned_by(Role::Student),
            ),
            require_access,
        ))
}
