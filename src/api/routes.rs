pub mod auth_routes;
pub mod order_routes;
pub mod product_routes;
pub mod recipient_routes;
pub mod user_routes;
