use crate::middleware::access::{RoutePolicy, require_access};
use crate::middleware::principal::Role;
use crate::modules::faculty::controller::{get_faculty, update_faculty};
use crate::modules::students::controller::{get_student, get_students, update_student};
use crate::state::AppState;
use axum::{Router, middleware, routing::get};

/// Faculty route group.
///
/// Student roster access is open to admins and faculty alike. The profile
/// routes bind the path id to the faculty member's own record; admins are
/// exempt from that binding and may manage any faculty record.
pub fn init_faculty_router(state: &AppState) -> Router<AppState> {
    let roster = Router::new()
        .route("/student", get(get_students))
        .route("/student/{id}", get(get_student).put(update_student))
        .route_layer(middleware::from_fn_with_state(
            (
                state.clone(),
                RoutePolicy::roles(&[Role::Admin, Role::Faculty]),
            ),
            require_access,
        ));

    let profile = Router::new()
        .route("/{id}", get(get_faculty).put(update_faculty))
        .route_layer(middleware::from_fn_with_state(
            (
                state.clone(),
                RoutePolicy::roles(&[Role::Admin, Role::Faculty]).owned_by(Role::Faculty),
            ),
            require_access,
        ));

    roster.merge(profile)
}
