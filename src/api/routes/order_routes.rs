use crate::api::controllers::order_controller;
use axum::Router;
use axum::routing::{get, patch, post};

pub fn routes() -> Router {
    Router::new()
        .route("/", get(order_controller::get_orders))
        .route("/", post(order_controller::create_order))
        .route("/{id}", patch(order_controller::update_order))
}
