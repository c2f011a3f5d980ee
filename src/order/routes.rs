use axum::{
    Router,
    routing::{get, post},
};

use super::handlers;
use crate::utils::types::Pool;

pub fn get_routes() -> Router<Pool> {
    Router::new()
        .route(
            "/orders",
            get(handlers::get_orders).post(handlers::place_order),
        )
        .route(
            "/orders/{id}",
            get(handlers::get_order_by_id).patch(handlers::update_order_status),
        )
        .route("/orders/{id}/cancel", post(handlers::cancel_order))
}
