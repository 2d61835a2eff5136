use crate::api::controllers::recipient_controller;
use axum::Router;
use axum::routing::{delete, get, patch, post};

pub fn routes() -> Router {
    Router::new()
        .route("/", get(recipient_controller::get_all_recipients))
        .route("/", post(recipient_controller::create_recipient))
        .route("/{id}", patch(recipient_controller::update_recipient))
        .route("/{id}", delete(recipient_controller::delete_recipient))
}
