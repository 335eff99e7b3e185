use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{delete, get, post, put},
};

/// Role Administration Router Module
///
/// Defines the single canonical role-management surface under `/users`.
/// These endpoints mutate the access-control roles the rest of the
/// scheduling system (doctors, secretaries, administrators) is built on,
/// so every mutation goes through the uniqueness and existence checks in
/// the handlers plus the database unique constraint on the role name.
pub fn role_routes() -> Router<AppState> {
    Router::new()
        // POST /users/crear-rol
        // Registers a new role. Rejected with 409 when the name is already
        // taken; on success the response carries the refreshed roster.
        .route("/users/crear-rol", post(handlers::create_role))
        // PUT /users/modificar-rol/{id}
        // Replaces an existing role's name and description. The id never
        // changes; renaming a role to its own current name succeeds.
        .route("/users/modificar-rol/{id}", put(handlers::update_role))
        // DELETE /users/eliminar-rol/{id}
        // Permanently removes a role. Destructive and immediate; there is
        // no soft-delete or tombstone state.
        .route("/users/eliminar-rol/{id}", delete(handlers::delete_role))
        // GET /users/user-roles
        // Lists every role ordered by ascending id.
        .route("/users/user-roles", get(handlers::list_roles))
}
