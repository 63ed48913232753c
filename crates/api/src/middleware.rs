use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::app::{errors, services::AppServices};
use crate::context::CustomerContext;

/// Header carrying the customer's identifying key on guarded routes.
pub const CPF_HEADER: &str = "cpf";

/// Account guard: resolve the `cpf` header against the directory before any
/// handler runs.
///
/// A missing, malformed, or unknown cpf short-circuits the request with the
/// same `not_found` response; on success the resolved identity is made
/// available to handlers as a [`CustomerContext`] extension.
pub async fn account_guard(
    State(services): State<Arc<AppServices>>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let cpf = match extract_cpf(req.headers()) {
        Some(cpf) => cpf.to_string(),
        None => {
            return errors::json_error(StatusCode::BAD_REQUEST, "not_found", "Customer not found")
        }
    };

    let customer_id = match services.resolve(&cpf) {
        Ok(id) => id,
        Err(e) => return errors::domain_error_to_response(e),
    };

    req.extensions_mut()
        .insert(CustomerContext::new(customer_id, cpf));

    next.run(req).await
}

fn extract_cpf(headers: &HeaderMap) -> Option<&str> {
    let cpf = headers.get(CPF_HEADER)?.to_str().ok()?.trim();
    if cpf.is_empty() {
        return None;
    }
    Some(cpf)
}
