pub mod errors;
pub mod order_service;
pub mod product_service;
