use crate::api::request::{CreateOrderRequest, OrderItemPayload};
use crate::cart::CartManager;
use crate::checkout::order_number;
use crate::data::models::order::Order;
use crate::data::models::order_item::OrderItem;
use crate::data::models::product::Product;
use async_trait::async_trait;
use bigdecimal::BigDecimal;

#[derive(Debug, PartialEq)]
pub enum CheckoutError {
    EmptyCart,
    /// The catalog could not be re-read, so stock could not be validated.
    CatalogUnavailable(String),
    /// A cart line references a product that is gone or no longer active.
    ProductUnavailable { product_name: String },
    /// Live stock dropped below the cart quantity since the cart was built.
    InsufficientStock {
        product_name: String,
        available: i32,
    },
    Submission(String),
}

impl std::error::Error for CheckoutError {}

impl std::fmt::Display for CheckoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckoutError::EmptyCart => write!(f, "Cart is empty"),
            CheckoutError::CatalogUnavailable(reason) => {
                write!(f, "Could not validate stock: {reason}")
            }
            CheckoutError::ProductUnavailable { product_name } => {
                write!(f, "Product no longer available: {product_name}")
            }
            CheckoutError::InsufficientStock {
                product_name,
                available,
            } => write!(
                f,
                "Insufficient stock for {product_name}, available: {available}"
            ),
            CheckoutError::Submission(reason) => write!(f, "Order submission failed: {reason}"),
        }
    }
}

/// Read port onto the live catalog, used for the final stock check. The
/// client-held snapshots in the cart are never trusted for that.
#[async_trait]
pub trait CatalogSource {
    async fn active_products(&self) -> Result<Vec<Product>, CheckoutError>;
}

/// A committed order as returned by the transaction handler.
#[derive(Debug, PartialEq)]
pub struct PlacedOrder {
    pub order: Order,
    pub items: Vec<OrderItem>,
}

/// Submission port onto the order transaction handler.
#[async_trait]
pub trait OrderGateway {
    async fn submit(&self, request: CreateOrderRequest) -> Result<PlacedOrder, CheckoutError>;
}

#[derive(Debug, PartialEq)]
pub struct CheckoutReceipt {
    pub order_number: String,
    pub placed: PlacedOrder,
}

/// Turns a cart into a submitted order, defending against stock having
/// changed since items were added. All-or-nothing: any failing line aborts
/// the whole checkout before submission, and the cart is only cleared once
/// the order actually committed.
pub struct CheckoutWorkflow<C, G> {
    catalog: C,
    gateway: G,
}

impl<C: CatalogSource, G: OrderGateway> CheckoutWorkflow<C, G> {
    pub fn new(catalog: C, gateway: G) -> Self {
        CheckoutWorkflow { catalog, gateway }
    }

    pub async fn submit_cart(
        &self,
        cart: &mut CartManager,
        user_id: i32,
        notes: Option<String>,
    ) -> Result<CheckoutReceipt, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let products = self.catalog.active_products().await?;

        for item in cart.items() {
            let product = products
                .iter()
                .find(|p| p.product_id == item.product.product_id)
                .ok_or_else(|| CheckoutError::ProductUnavailable {
                    product_name: item.product.name.clone(),
                })?;

            if product.stock_quantity < item.quantity {
                return Err(CheckoutError::InsufficientStock {
                    product_name: item.product.name.clone(),
                    available: product.stock_quantity,
                });
            }
        }

        let order_number = order_number::generate();

        let items: Vec<OrderItemPayload> = cart
            .items()
            .iter()
            .map(|item| OrderItemPayload {
                product_id: item.product.product_id,
                product_code: item.product.product_code.clone(),
                product_name: item.product.name.clone(),
                quantity: item.quantity,
                unit_price: item.product.price.clone(),
                total_price: &item.product.price * BigDecimal::from(item.quantity),
            })
            .collect();

        let total_amount = items
            .iter()
            .fold(BigDecimal::from(0), |acc, item| acc + &item.total_price);

        let request = CreateOrderRequest {
            order_number: order_number.clone(),
            user_id,
            status: Some("pending".to_string()),
            total_amount,
            notes,
            items,
        };

        let placed = self.gateway.submit(request).await?;

        // Only now is the attempt known to have succeeded; a failed
        // submission must leave the cart untouched for a retry.
        cart.clear();

        Ok(CheckoutReceipt {
            order_number,
            placed,
        })
    }
}
