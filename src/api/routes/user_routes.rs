use crate::api::controllers::user_controller;
use axum::Router;
use axum::routing::{delete, get, patch, post};

pub fn routes() -> Router {
    Router::new()
        .route("/", get(user_controller::get_all_users))
        .route("/", post(user_controller::create_user))
        .route("/{id}", patch(user_controller::update_user))
        .route("/{id}", delete(user_controller::delete_user))
}
