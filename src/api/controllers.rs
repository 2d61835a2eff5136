pub mod auth_controller;
pub mod order_controller;
pub mod product_controller;
pub mod recipient_controller;
pub mod user_controller;
