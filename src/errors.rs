use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// ApiError
///
/// The application's error taxonomy, shared by the repository layer and the
/// handlers. Every failure a caller can observe maps to exactly one variant:
///
/// - `Conflict`: a uniqueness violation (role name already taken), either
///   detected by the handler pre-check or raised by the database constraint.
/// - `NotFound`: a reference to a role id that does not exist.
/// - `Internal`: the store did not persist an expected change, or the
///   underlying connection failed. The original error text is preserved in
///   the message so nothing is silently swallowed.
///
/// Deliberately raised `Conflict`/`NotFound` values pass through the handler
/// chain unchanged; they are never re-wrapped as `Internal`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

/// Convenience alias used by repository methods and handlers alike.
pub type ApiResult<T> = Result<T, ApiError>;

/// sqlx Error Classification
///
/// Translates database-layer failures into the caller-facing taxonomy.
/// The unique constraint on `clinica.rol.nombre` is the actual enforcement of
/// the name-uniqueness invariant; the handler-level existence check is only a
/// best-effort fast path. When two concurrent creates race past that check,
/// the losing insert surfaces here as a Postgres 23505 and must become the
/// same `Conflict` outcome the fast path produces.
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => {
                ApiError::NotFound("No existe un rol con este id.".to_string())
            }
            // Postgres unique-constraint violation (SQLSTATE 23505).
            sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505") => {
                ApiError::Conflict(
                    "El nombre de rol ya está registrado en el sistema.".to_string(),
                )
            }
            _ => ApiError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    /// Maps each variant to its HTTP status and serializes the human-readable
    /// message as a JSON body. Internal failures are additionally logged here,
    /// at the single boundary where they leave the application.
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "internal failure");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_maps_to_409() {
        let resp = ApiError::Conflict("duplicado".into()).into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn not_found_maps_to_404() {
        let resp = ApiError::NotFound("no existe".into()).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn internal_maps_to_500() {
        let resp = ApiError::Internal("se perdió la conexión".into()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn row_not_found_classifies_as_not_found() {
        let err = ApiError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[test]
    fn other_sqlx_errors_keep_their_message() {
        let err = ApiError::from(sqlx::Error::PoolTimedOut);
        match err {
            ApiError::Internal(msg) => assert!(!msg.is_empty()),
            other => panic!("expected Internal, got {other:?}"),
        }
    }
}
