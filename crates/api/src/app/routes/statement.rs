use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;

use crate::app::{dto, errors};
use crate::app::services::AppServices;
use crate::context::CustomerContext;

pub async fn get_statement(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(account): Extension<CustomerContext>,
) -> axum::response::Response {
    match services.statements(account.cpf()) {
        Ok(entries) => (StatusCode::OK, Json(entries)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_statement_by_date(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(account): Extension<CustomerContext>,
    Query(query): Query<dto::StatementDateQuery>,
) -> axum::response::Response {
    // Days are evaluated against the UTC calendar.
    let day: NaiveDate = match query.date.parse() {
        Ok(day) => day,
        Err(_) => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "validation",
                "date must be formatted YYYY-MM-DD",
            )
        }
    };

    match services.statements_on(account.cpf(), day) {
        Ok(entries) => (StatusCode::OK, Json(entries)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_balance(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(account): Extension<CustomerContext>,
) -> axum::response::Response {
    match services.balance(account.cpf()) {
        Ok(balance) => (StatusCode::OK, Json(balance)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
