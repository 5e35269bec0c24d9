use anyhow::Result;
use axum::Json;

use crate::errors::{upstream_error, AppError};

/// Collaborator payloads pass through verbatim; collaborator failures become
/// the standard error envelope.
pub fn to_json<T: serde::Serialize>(result: Result<T>) -> Result<Json<T>, AppError> {
    match result {
        Ok(value) => Ok(Json(value)),
        Err(err) => Err(upstream_error(err)), // preserves original error string
    }
}
