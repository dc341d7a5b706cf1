use crate::middleware::access::{RoutePolicy, require_access};
use crate::middleware::principal::Role;
use crate::modules::admins::controller::{get_admin, update_admin};
use crate::modules::faculty::controller::{
    create_faculty, delete_faculty, get_all_faculty, get_faculty, update_faculty,
};
use crate::modules::students::controller::{
    create_student, delete_student, get_student, get_students, update_student,
};
use crate::state::AppState;
use axum::{
    Router, middleware,
    routing::{get, post},
};

/// Admin route group.
///
/// Record management is admin-only; the profile routes additionally bind
/// the path id to the admin's own record.
pub fn init_admin_router(state: &AppState) -> Router<AppState> {
    let records = Router::new()
        .route("/faculty", post(create_faculty).get(get_all_faculty))
        .route(
            "/faculty/{id}",
            get(get_faculty).put(update_faculty).delete(delete_faculty),
        )
        .route("/student", post(create_student).get(get_students))
        .route(
            "/student/{id}",
            get(get_student).put(update_student).delete(delete_student),
        )
        .route_layer(middleware::from_fn_with_state(
            (state.clone(), RoutePolicy::roles(&[Role::Admin])),
            require_access,
        ));

    let profile = Router::new()
        .route("/{id}", get(get_admin).put(update_admin))
        .route_layer(middleware::from_fn_with_state(
            (
                state.clone(),
                RoutePolicy::roles(&[Role::Admin]).owned_by(Role::Admin),
            ),
            require_access,
        ));

    records.merge(profile)
}
