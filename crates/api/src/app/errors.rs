use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use tally_core::DomainError;

/// Map a domain error onto the wire contract.
///
/// All three kinds are client errors on this API; the distinguishing
/// information is in the `error` code.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::NotFound => {
            json_error(StatusCode::BAD_REQUEST, "not_found", "Customer not found")
        }
        DomainError::DuplicateKey(_) => json_error(
            StatusCode::BAD_REQUEST,
            "duplicate_key",
            "Customer already exists",
        ),
        DomainError::InsufficientFunds => json_error(
            StatusCode::BAD_REQUEST,
            "insufficient_funds",
            "Insufficient funds",
        ),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
