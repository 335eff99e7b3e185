use crate::{
    AppState,
    errors::{ApiError, ApiResult},
    models::{
        CreateRoleRequest, CreateRoleResponse, DeleteRoleResponse, HealthResponse, Role,
        UpdateRoleRequest, UpdateRoleResponse,
    },
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

// --- Handlers ---

/// create_role
///
/// Registers a new role, enforcing name uniqueness.
///
/// Flow: an existence pre-check by name produces a friendly 409 for the
/// common case; the insert itself is still guarded by the database unique
/// constraint, so a create that races past the pre-check ends in the same
/// `Conflict`. On success the full roster is re-read (ordered by id) and
/// returned alongside the confirmation, sparing the frontend a second call.
///
/// The lifecycle manager holds no state between steps: every check reads the
/// store's current state at the moment of the request.
#[utoipa::path(
    post,
    path = "/users/crear-rol",
    request_body = CreateRoleRequest,
    responses(
        (status = 200, description = "Role created", body = CreateRoleResponse),
        (status = 409, description = "Role name already exists"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn create_role(
    State(state): State<AppState>,
    Json(payload): Json<CreateRoleRequest>,
) -> ApiResult<Json<CreateRoleResponse>> {
    if state.repo.find_by_name(&payload.name).await?.is_some() {
        return Err(ApiError::Conflict(format!(
            "El rol '{}' ya existe en el sistema.",
            payload.name
        )));
    }

    let created = state
        .repo
        .insert(&payload.name, payload.description.as_deref())
        .await?
        .ok_or_else(|| ApiError::Internal("No se pudo insertar el rol.".to_string()))?;

    tracing::info!(role_id = created.id, role_name = %created.name, "role created");

    let current_roles = state.repo.list_all().await?;

    Ok(Json(CreateRoleResponse {
        message: format!("Rol '{}' creado correctamente.", created.name),
        current_roles,
    }))
}

/// update_role
///
/// Replaces the name and description of an existing role. The id is fixed at
/// creation and never changes.
///
/// The uniqueness check excludes the record being updated: renaming a role to
/// its own current name is a valid no-op that must succeed, since it cannot
/// break the one-name-one-role invariant.
#[utoipa::path(
    put,
    path = "/users/modificar-rol/{id}",
    params(("id" = i32, Path, description = "Role ID")),
    request_body = UpdateRoleRequest,
    responses(
        (status = 200, description = "Role updated", body = UpdateRoleResponse),
        (status = 404, description = "No role with this id"),
        (status = 409, description = "Name already used by another role"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn update_role(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateRoleRequest>,
) -> ApiResult<Json<UpdateRoleResponse>> {
    if state.repo.find_by_id(id).await?.is_none() {
        return Err(ApiError::NotFound("No existe un rol con este id.".to_string()));
    }

    // Uniqueness check, excluding the record being updated.
    if let Some(other) = state.repo.find_by_name(&payload.name).await? {
        if other.id != id {
            return Err(ApiError::Conflict(format!(
                "El nombre '{}' ya está en uso por otro rol.",
                payload.name
            )));
        }
    }

    let updated = state
        .repo
        .update(id, &payload.name, payload.description.as_deref())
        .await?
        .ok_or_else(|| ApiError::Internal("No se pudo actualizar el rol.".to_string()))?;

    tracing::info!(role_id = updated.id, role_name = %updated.name, "role updated");

    Ok(Json(UpdateRoleResponse {
        message: format!("Rol '{}' actualizado correctamente.", updated.name),
        updated_role: updated,
    }))
}

/// delete_role
///
/// Removes a role permanently. There is no soft-delete: once the row is gone,
/// lookups and updates for this id report 404. The role's name is captured
/// before the delete so the confirmation message can still reference it.
#[utoipa::path(
    delete,
    path = "/users/eliminar-rol/{id}",
    params(("id" = i32, Path, description = "Role ID")),
    responses(
        (status = 200, description = "Role deleted", body = DeleteRoleResponse),
        (status = 404, description = "No role with this id"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn delete_role(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<DeleteRoleResponse>> {
    let role = state
        .repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("No existe un rol con este id.".to_string()))?;

    let deleted = state.repo.delete(id).await?;
    if !deleted {
        return Err(ApiError::Internal("No se pudo eliminar el rol.".to_string()));
    }

    tracing::info!(role_id = id, role_name = %role.name, "role deleted");

    Ok(Json(DeleteRoleResponse {
        message: format!("Rol '{}' eliminado correctamente.", role.name),
    }))
}

/// list_roles
///
/// Returns every role ordered by ascending id, verbatim from the store.
/// No filtering or pagination; the roster is small by nature.
#[utoipa::path(
    get,
    path = "/users/user-roles",
    responses(
        (status = 200, description = "All roles ordered by id", body = [Role]),
        (status = 500, description = "Store failure")
    )
)]
pub async fn list_roles(State(state): State<AppState>) -> ApiResult<Json<Vec<Role>>> {
    let roles = state.repo.list_all().await?;
    Ok(Json(roles))
}

/// health_check
///
/// Monitoring endpoint. Probes the persistence client with a trivial query:
/// a pool that cannot reach Postgres (never initialized, or connectivity
/// lost) yields a 503 with `db_connected = false`, distinguishable from the
/// healthy 200. Role endpoints are not involved.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.repo.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                db_connected: true,
            }),
        ),
        Err(err) => {
            tracing::warn!(error = %err, "health check failed: database unreachable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "degraded".to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                    db_connected: false,
                }),
            )
        }
    }
}

/// service_info
///
/// Root endpoint returning static service metadata, kept for compatibility
/// with the original gateway banner the frontend expects.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service metadata"))
)]
pub async fn service_info() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Gestión de horarios médicos",
        "database": "PostgreSQL",
        "version": env!("CARGO_PKG_VERSION"),
        "framework": "Axum",
    }))
}
