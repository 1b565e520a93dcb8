/**
 * Error Conversion
 *
 * Converts `ApiError` into HTTP responses so handlers can return
 * `Result<_, ApiError>` directly.
 *
 * # Response Format
 *
 * Validation failures carry field-level detail:
 * ```json
 * { "errors": [ { "param": "text", "msg": "Text is required" } ] }
 * ```
 *
 * Every other error uses a single message:
 * ```json
 * { "msg": "No post found" }
 * ```
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::backend::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match &self {
            ApiError::Validation(errors) => json!({ "errors": errors }),
            _ => json!({ "msg": self.message() }),
        };

        (status, Json(body)).into_response()
    }
}
