use crate::data::models::notification_recipient::NotificationRecipient;
use crate::data::models::order::Order;
use crate::data::models::order_item::OrderItem;
use crate::data::models::product::Product;
use crate::data::models::user::User;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bigdecimal::BigDecimal;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use serde_with::skip_serializing_none;

/// Tagged result every endpoint returns. On the wire it is always
/// `{"data": ..., "error": ...}` with HTTP 200; business failures live in
/// the `error` field, never in the status code. Only transport-level
/// problems (unroutable request, malformed JSON) surface as HTTP errors.
pub enum Envelope<T> {
    Data(T),
    Error(String),
}

impl<T> Envelope<T> {
    pub fn data(value: T) -> Self {
        Envelope::Data(value)
    }

    pub fn error(message: impl ToString) -> Self {
        Envelope::Error(message.to_string())
    }
}

impl<T: Serialize> Serialize for Envelope<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Envelope", 2)?;
        match self {
            Envelope::Data(value) => {
                state.serialize_field("data", &Some(value))?;
                state.serialize_field("error", &None::<String>)?;
            }
            Envelope::Error(message) => {
                state.serialize_field("data", &None::<()>)?;
                state.serialize_field("error", &Some(message))?;
            }
        }
        state.end()
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Marker payload for successful deletes.
#[derive(Serialize, Deserialize)]
pub struct Deleted {
    pub success: bool,
}

impl Deleted {
    pub fn ok() -> Self {
        Deleted { success: true }
    }
}

/// User record without the password hash.
#[skip_serializing_none]
#[derive(Serialize, Deserialize)]
pub struct UserResponse {
    pub user_id: i32,
    pub email: String,
    pub role: String,
    pub business_name: Option<String>,
    pub business_number: Option<String>,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub viber: Option<String>,
    pub contact_person: Option<String>,
    pub logo_url: Option<String>,
    pub is_active: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id,
            email: user.email,
            role: user.role,
            business_name: user.business_name,
            business_number: user.business_number,
            phone: user.phone,
            whatsapp: user.whatsapp,
            viber: user.viber,
            contact_person: user.contact_person,
            logo_url: user.logo_url,
            is_active: user.is_active,
            created_at: user.created_at.map(|d| d.to_string()),
            updated_at: user.updated_at.map(|d| d.to_string()),
        }
    }
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize)]
pub struct ProductResponse {
    pub product_id: i32,
    pub product_code: String,
    pub brand: String,
    pub name: String,
    pub width: Option<i32>,
    pub aspect_ratio: Option<i32>,
    pub rim_diameter: Option<i32>,
    pub dimensions: String,
    pub tire_type: String,
    pub season: String,
    pub stock_quantity: i32,
    pub price: BigDecimal,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            product_id: product.product_id,
            product_code: product.product_code,
            brand: product.brand,
            name: product.name,
            width: product.width,
            aspect_ratio: product.aspect_ratio,
            rim_diameter: product.rim_diameter,
            dimensions: product.dimensions,
            tire_type: product.tire_type,
            season: product.season,
            stock_quantity: product.stock_quantity,
            price: product.price,
            description: product.description,
            image_url: product.image_url,
            is_active: product.is_active,
            created_at: product.created_at.map(|d| d.to_string()),
            updated_at: product.updated_at.map(|d| d.to_string()),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct OrderItemResponse {
    pub order_item_id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub product_code: String,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: BigDecimal,
    pub total_price: BigDecimal,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        Self {
            order_item_id: item.order_item_id,
            order_id: item.order_id,
            product_id: item.product_id,
            product_code: item.product_code,
            product_name: item.product_name,
            quantity: item.quantity,
            unit_price: item.unit_price,
            total_price: item.total_price,
        }
    }
}

/// Denormalized customer block embedded in order listings, so the back
/// office can render an order without a second lookup.
#[skip_serializing_none]
#[derive(Serialize, Deserialize)]
pub struct CustomerSummary {
    pub user_id: i32,
    pub email: String,
    pub business_name: Option<String>,
    pub business_number: Option<String>,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub logo_url: Option<String>,
}

impl From<User> for CustomerSummary {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id,
            email: user.email,
            business_name: user.business_name,
            business_number: user.business_number,
            contact_person: user.contact_person,
            phone: user.phone,
            logo_url: user.logo_url,
        }
    }
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize)]
pub struct OrderResponse {
    pub order_id: i32,
    pub order_number: String,
    pub user_id: i32,
    pub status: Option<String>,
    pub total_amount: BigDecimal,
    pub notes: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub items: Option<Vec<OrderItemResponse>>,
    pub user: Option<CustomerSummary>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            order_id: order.order_id,
            order_number: order.order_number,
            user_id: order.user_id,
            status: order.status,
            total_amount: order.total_amount,
            notes: order.notes,
            created_at: order.created_at.map(|d| d.to_string()),
            updated_at: order.updated_at.map(|d| d.to_string()),
            items: None,
            user: None,
        }
    }
}

impl From<(Order, Vec<OrderItem>)> for OrderResponse {
    fn from((order, items): (Order, Vec<OrderItem>)) -> Self {
        let mut response = OrderResponse::from(order);
        response.items = Some(items.into_iter().map(OrderItemResponse::from).collect());
        response
    }
}

impl From<(Order, Vec<OrderItem>, Option<User>)> for OrderResponse {
    fn from((order, items, user): (Order, Vec<OrderItem>, Option<User>)) -> Self {
        let mut response = OrderResponse::from((order, items));
        response.user = user.map(CustomerSummary::from);
        response
    }
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize)]
pub struct RecipientResponse {
    pub recipient_id: i32,
    pub email: String,
    pub name: Option<String>,
    pub role: String,
    pub is_active: bool,
    pub created_at: Option<String>,
}

impl From<NotificationRecipient> for RecipientResponse {
    fn from(recipient: NotificationRecipient) -> Self {
        Self {
            recipient_id: recipient.recipient_id,
            email: recipient.email,
            name: recipient.name,
            role: recipient.role,
            is_active: recipient.is_active,
            created_at: recipient.created_at.map(|d| d.to_string()),
        }
    }
}
