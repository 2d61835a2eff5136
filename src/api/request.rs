use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    pub role: Option<String>,
    pub business_name: Option<String>,
    pub business_number: Option<String>,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub viber: Option<String>,
    pub contact_person: Option<String>,
    pub logo_url: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Deserialize)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub business_name: Option<String>,
    pub business_number: Option<String>,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub viber: Option<String>,
    pub contact_person: Option<String>,
    pub logo_url: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Deserialize, Clone)]
pub struct CreateProductRequest {
    pub product_code: String,
    pub brand: String,
    pub name: String,
    pub width: Option<i32>,
    pub aspect_ratio: Option<i32>,
    pub rim_diameter: Option<i32>,
    pub dimensions: String,
    pub tire_type: String,
    pub season: String,
    pub stock_quantity: Option<i32>,
    pub price: BigDecimal,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Deserialize)]
pub struct BulkProductImportRequest {
    pub products: Vec<CreateProductRequest>,
}

#[derive(Deserialize)]
pub struct UpdateProductRequest {
    pub product_code: Option<String>,
    pub brand: Option<String>,
    pub name: Option<String>,
    pub width: Option<i32>,
    pub aspect_ratio: Option<i32>,
    pub rim_diameter: Option<i32>,
    pub dimensions: Option<String>,
    pub tire_type: Option<String>,
    pub season: Option<String>,
    pub stock_quantity: Option<i32>,
    pub price: Option<BigDecimal>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

/// One line of an order submission. Prices are the client's snapshot: the
/// server stores them as-is so later catalog edits cannot rewrite history.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OrderItemPayload {
    pub product_id: i32,
    pub product_code: String,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: BigDecimal,
    pub total_price: BigDecimal,
}

/// Wire shape of `POST /api/orders`. Built by the checkout workflow and
/// consumed by the order transaction handler.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CreateOrderRequest {
    pub order_number: String,
    pub user_id: i32,
    pub status: Option<String>,
    pub total_amount: BigDecimal,
    pub notes: Option<String>,
    pub items: Vec<OrderItemPayload>,
}

#[derive(Deserialize)]
pub struct UpdateOrderRequest {
    pub status: Option<String>,
    pub notes: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateRecipientRequest {
    pub email: String,
    pub name: Option<String>,
    pub role: String,
    pub is_active: Option<bool>,
}

#[derive(Deserialize)]
pub struct UpdateRecipientRequest {
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
    pub is_active: Option<bool>,
}
