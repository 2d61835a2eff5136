use crate::api::controllers::product_controller;
use axum::Router;
use axum::routing::{delete, get, patch, post};

pub fn routes() -> Router {
    Router::new()
        .route("/", get(product_controller::get_all_products))
        .route("/", post(product_controller::create_product))
        .route("/bulk", post(product_controller::bulk_import_products))
        .route("/{id}", patch(product_controller::update_product))
        .route("/{id}", delete(product_controller::delete_product))
}
