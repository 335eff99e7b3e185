use crate::errors::ApiResult;
use crate::models::Role;
use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, nombre, descripcion";

/// RoleRepository Trait
///
/// Defines the abstract contract for all persistence operations on role
/// records. Handlers interact with the store exclusively through this trait,
/// so the Postgres implementation can be swapped for an in-memory one in
/// tests without touching the lifecycle logic.
///
/// The store is the sole owner of identity assignment: callers never supply
/// an id on insert, and ids are never reused once assigned. Each method is
/// atomic with respect to a single role record.
///
/// **Send + Sync + async_trait** are required to make the trait object
/// (`Arc<dyn RoleRepository>`) safely shareable across Axum's asynchronous
/// task boundaries.
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Exact-match lookup by role name (case-sensitive, no normalization).
    async fn find_by_name(&self, name: &str) -> ApiResult<Option<Role>>;

    /// Lookup by the store-assigned integer id.
    async fn find_by_id(&self, id: i32) -> ApiResult<Option<Role>>;

    /// Inserts a new role and returns the created record with its assigned id.
    /// `Ok(None)` means the insert reported success but persisted nothing;
    /// callers must treat that as an internal failure, not a created role.
    /// A name collision at the constraint level surfaces as `Err(Conflict)`.
    async fn insert(&self, name: &str, description: Option<&str>) -> ApiResult<Option<Role>>;

    /// Replaces a role's name and description. `Ok(None)` means no row with
    /// this id existed at update time.
    async fn update(
        &self,
        id: i32,
        name: &str,
        description: Option<&str>,
    ) -> ApiResult<Option<Role>>;

    /// Removes a role permanently. Returns whether a row was affected.
    async fn delete(&self, id: i32) -> ApiResult<bool>;

    /// Full ordered listing, ascending by id.
    async fn list_all(&self) -> ApiResult<Vec<Role>>;

    /// Connectivity probe for the health check. Fails when the underlying
    /// connection pool cannot reach the database, independent of any role
    /// operation.
    async fn ping(&self) -> ApiResult<()>;
}

/// RepositoryState
///
/// The concrete type used to share the persistence layer access across the
/// application state.
pub type RepositoryState = Arc<dyn RoleRepository>;

/// PostgresRoleRepository
///
/// The concrete implementation of the `RoleRepository` trait, backed by the
/// `clinica.rol` table. Queries are runtime-checked `query_as` calls mapping
/// onto the `Role` struct via its `#[sqlx(rename)]` attributes.
pub struct PostgresRoleRepository {
    pool: PgPool,
}

impl PostgresRoleRepository {
    /// Creates a new repository instance using the initialized connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoleRepository for PostgresRoleRepository {
    async fn find_by_name(&self, name: &str) -> ApiResult<Option<Role>> {
        let query = format!("SELECT {COLUMNS} FROM clinica.rol WHERE nombre = $1");
        let role = sqlx::query_as::<_, Role>(&query)
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        Ok(role)
    }

    async fn find_by_id(&self, id: i32) -> ApiResult<Option<Role>> {
        let query = format!("SELECT {COLUMNS} FROM clinica.rol WHERE id = $1");
        let role = sqlx::query_as::<_, Role>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(role)
    }

    /// insert
    ///
    /// The `uq_rol_nombre` unique constraint is the real uniqueness guard:
    /// a duplicate name raises 23505 here even when the caller's existence
    /// pre-check raced with a concurrent create, and the error layer
    /// translates it to the same `Conflict` outcome.
    async fn insert(&self, name: &str, description: Option<&str>) -> ApiResult<Option<Role>> {
        let query = format!(
            "INSERT INTO clinica.rol (nombre, descripcion) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        let created = sqlx::query_as::<_, Role>(&query)
            .bind(name)
            .bind(description)
            .fetch_optional(&self.pool)
            .await?;
        Ok(created)
    }

    async fn update(
        &self,
        id: i32,
        name: &str,
        description: Option<&str>,
    ) -> ApiResult<Option<Role>> {
        let query = format!(
            "UPDATE clinica.rol SET nombre = $2, descripcion = $3 WHERE id = $1 RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Role>(&query)
            .bind(id)
            .bind(name)
            .bind(description)
            .fetch_optional(&self.pool)
            .await?;
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> ApiResult<bool> {
        let result = sqlx::query("DELETE FROM clinica.rol WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_all(&self) -> ApiResult<Vec<Role>> {
        let query = format!("SELECT {COLUMNS} FROM clinica.rol ORDER BY id ASC");
        let roles = sqlx::query_as::<_, Role>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(roles)
    }

    async fn ping(&self) -> ApiResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
