pub mod direct;
pub mod order_number;
pub mod workflow;

pub use workflow::{
    CatalogSource, CheckoutError, CheckoutReceipt, CheckoutWorkflow, OrderGateway, PlacedOrder,
};
