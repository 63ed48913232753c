use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::app::services::AppServices;
use crate::middleware;

pub mod account;
pub mod operations;
pub mod statement;
pub mod system;

/// Build the route table.
///
/// Every route except `POST /account` and `GET /health` sits behind the
/// account guard, which resolves the `cpf` header before the handler runs.
/// The guard is applied per method router because `/account` mixes the
/// unguarded registration with guarded reads/updates.
pub fn router(services: Arc<AppServices>) -> Router {
    let guard = axum::middleware::from_fn_with_state(services, middleware::account_guard);

    Router::new()
        .route("/health", get(system::health))
        .route(
            "/account",
            post(account::register_account).merge(
                get(account::get_account)
                    .put(account::update_account)
                    .delete(account::delete_account)
                    .route_layer(guard.clone()),
            ),
        )
        .route(
            "/statement",
            get(statement::get_statement).route_layer(guard.clone()),
        )
        .route(
            "/statement/date",
            get(statement::get_statement_by_date).route_layer(guard.clone()),
        )
        .route(
            "/deposit",
            post(operations::deposit).route_layer(guard.clone()),
        )
        .route(
            "/withdraw",
            post(operations::withdraw).route_layer(guard.clone()),
        )
        .route("/balance", get(statement::get_balance).route_layer(guard))
}
