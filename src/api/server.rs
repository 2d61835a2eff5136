use crate::api::config::Config;
use crate::api::routes::{
    auth_routes, order_routes, product_routes, recipient_routes, user_routes,
};
use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

pub fn router() -> Router {
    Router::new()
        .route("/api", get(|| async { "TreadPort API is running!" }))
        .nest("/api/auth", auth_routes::routes())
        .nest("/api/users", user_routes::routes())
        .nest("/api/products", product_routes::routes())
        .nest("/api/orders", order_routes::routes())
        .nest("/api/notification_recipients", recipient_routes::routes())
}

pub async fn start() {
    let config = Config::new();

    let cors_layer = CorsLayer::new().allow_origin(Any).allow_headers(Any);
    let app = router().layer(cors_layer);

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server running on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .await
        .expect("Failed to start the server");
}
