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

pub async fn deposit(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(account): Extension<CustomerContext>,
    Json(body): Json<dto::DepositRequest>,
) -> axum::response::Response {
    match services.deposit(account.cpf(), body.amount, body.description) {
        Ok(()) => StatusCode::CREATED.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn withdraw(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(account): Extension<CustomerContext>,
    Json(body): Json<dto::WithdrawRequest>,
) -> axum::response::Response {
    match services.withdraw(account.cpf(), body.amount) {
        Ok(()) => StatusCode::CREATED.into_response(),
        Err(e) => {
            tracing::debug!(cpf = account.cpf(), amount = body.amount, "withdrawal rejected");
            errors::domain_error_to_response(e)
        }
    }
}
