use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;
use utoipa::ToSchema;

// --- Core Application Schemas (Mapped to Database) ---

/// Role
///
/// Represents an access-control role record stored in the `clinica.rol` table.
/// Roles categorize system users (doctors, secretaries, administrators) and are
/// referenced by the scheduling frontend through their stable integer id.
///
/// Wire compatibility: the JSON field names are the Spanish column names
/// (`nombre`, `descripcion`) expected by the existing frontend, while the Rust
/// fields keep English names for internal readability.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default, PartialEq, Eq)]
#[ts(export)]
pub struct Role {
    // Primary key, assigned by the database identity column. Never reused.
    pub id: i32,
    /// Unique role name. Uniqueness is enforced by the `uq_rol_nombre`
    /// constraint; comparison is exact (no case folding or trimming).
    #[serde(rename = "nombre")]
    #[sqlx(rename = "nombre")]
    pub name: String,
    /// Optional free-text description of the role's purpose.
    #[serde(rename = "descripcion")]
    #[sqlx(rename = "descripcion")]
    pub description: Option<String>,
}

/// --- Request Payloads (Input Schemas) ---

/// CreateRoleRequest
///
/// Input payload for registering a new role (POST /users/crear-rol).
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct CreateRoleRequest {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
}

/// UpdateRoleRequest
///
/// Input payload for modifying an existing role (PUT /users/modificar-rol/{id}).
/// Both attributes are replaced as a unit; the id itself is immutable.
/// Submitting the role's current name is valid and must not be rejected as a
/// duplicate (a no-op rename keeps the uniqueness invariant intact).
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UpdateRoleRequest {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
}

/// --- Response Schemas (Output) ---

/// CreateRoleResponse
///
/// Output schema for a successful role creation. Besides the confirmation
/// message it carries the full up-to-date roster (ordered by id) so the
/// frontend can refresh its role table without issuing a second request.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct CreateRoleResponse {
    #[serde(rename = "mensaje")]
    pub message: String,
    #[serde(rename = "roles_actuales")]
    pub current_roles: Vec<Role>,
}

/// UpdateRoleResponse
///
/// Output schema for a successful role update, returning the record as stored.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UpdateRoleResponse {
    #[serde(rename = "mensaje")]
    pub message: String,
    #[serde(rename = "rol_actualizado")]
    pub updated_role: Role,
}

/// DeleteRoleResponse
///
/// Output schema for a successful role deletion. The message names the role
/// that was removed (captured before the destructive delete).
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct DeleteRoleResponse {
    #[serde(rename = "mensaje")]
    pub message: String,
}

/// HealthResponse
///
/// Output schema for the monitoring endpoint (GET /health). `db_connected`
/// distinguishes an unreachable or not-yet-initialized database connection
/// from a healthy service, so load balancers can act on connectivity loss
/// without touching the role endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub db_connected: bool,
}
