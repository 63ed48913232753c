use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::app::{dto, errors};
use crate::app::services::AppServices;
use crate::context::CustomerContext;

pub async fn register_account(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateAccountRequest>,
) -> axum::response::Response {
    match services.register(body.cpf, body.name) {
        Ok(id) => {
            tracing::debug!(customer_id = %id, "account registered");
            StatusCode::CREATED.into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_account(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(account): Extension<CustomerContext>,
) -> axum::response::Response {
    match services.account(account.cpf()) {
        Ok(customer) => (StatusCode::OK, Json(customer)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_account(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(account): Extension<CustomerContext>,
    Json(body): Json<dto::UpdateAccountRequest>,
) -> axum::response::Response {
    match services.rename(account.cpf(), body.name) {
        Ok(()) => StatusCode::CREATED.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_account(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(account): Extension<CustomerContext>,
) -> axum::response::Response {
    match services.remove(account.cpf()) {
        Ok(()) => {
            tracing::debug!(customer_id = %account.customer_id(), "account removed");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}
