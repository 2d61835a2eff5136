use crate::api::request::CreateOrderRequest;
use crate::checkout::workflow::{CatalogSource, CheckoutError, OrderGateway, PlacedOrder};
use crate::data::models::product::Product;
use crate::data::repos::implementors::product_repo::ProductRepo;
use crate::services::order_service::OrderService;
use async_trait::async_trait;

/// In-process port implementations, for deployments where the storefront
/// session runs next to the server core. They hit the same repo/service
/// path the HTTP controllers do.
pub struct DirectCatalog;

#[async_trait]
impl CatalogSource for DirectCatalog {
    async fn active_products(&self) -> Result<Vec<Product>, CheckoutError> {
        ProductRepo::new()
            .get_filtered(Some(true))
            .await
            .map(|products| products.unwrap_or_default())
            .map_err(|e| CheckoutError::CatalogUnavailable(e.to_string()))
    }
}

pub struct DirectGateway;

#[async_trait]
impl OrderGateway for DirectGateway {
    async fn submit(&self, request: CreateOrderRequest) -> Result<PlacedOrder, CheckoutError> {
        OrderService::new()
            .place_order(request)
            .await
            .map(|(order, items)| PlacedOrder { order, items })
            .map_err(|e| CheckoutError::Submission(e.to_string()))
    }
}
