use crate::api::request::{
    CreateOrderRequest, CreateProductRequest, CreateRecipientRequest, OrderItemPayload,
    UpdateProductRequest, UpdateRecipientRequest,
};
use crate::data::models::notification_recipient::{NewRecipient, UpdateRecipient};
use crate::data::models::order::NewOrder;
use crate::data::models::order_item::OrderItemDraft;
use crate::data::models::product::{NewProduct, UpdateProduct};

impl<'a> From<&'a CreateProductRequest> for NewProduct<'a> {
    fn from(request: &'a CreateProductRequest) -> Self {
        NewProduct {
            product_code: &request.product_code,
            brand: &request.brand,
            name: &request.name,
            width: request.width,
            aspect_ratio: request.aspect_ratio,
            rim_diameter: request.rim_diameter,
            dimensions: &request.dimensions,
            tire_type: &request.tire_type,
            season: &request.season,
            stock_quantity: request.stock_quantity.unwrap_or(0),
            price: request.price.clone(),
            description: request.description.as_deref(),
            image_url: request.image_url.as_deref(),
            is_active: request.is_active.unwrap_or(true),
        }
    }
}

/// Full-overwrite form of a create payload, for the bulk import's
/// update-on-conflict path.
impl<'a> From<&'a CreateProductRequest> for UpdateProduct<'a> {
    fn from(request: &'a CreateProductRequest) -> Self {
        UpdateProduct {
            product_code: Some(&request.product_code),
            brand: Some(&request.brand),
            name: Some(&request.name),
            width: request.width,
            aspect_ratio: request.aspect_ratio,
            rim_diameter: request.rim_diameter,
            dimensions: Some(&request.dimensions),
            tire_type: Some(&request.tire_type),
            season: Some(&request.season),
            stock_quantity: Some(request.stock_quantity.unwrap_or(0)),
            price: Some(request.price.clone()),
            description: request.description.as_deref(),
            image_url: request.image_url.as_deref(),
            is_active: Some(request.is_active.unwrap_or(true)),
        }
    }
}

impl<'a> From<&'a UpdateProductRequest> for UpdateProduct<'a> {
    fn from(request: &'a UpdateProductRequest) -> Self {
        UpdateProduct {
            product_code: request.product_code.as_deref(),
            brand: request.brand.as_deref(),
            name: request.name.as_deref(),
            width: request.width,
            aspect_ratio: request.aspect_ratio,
            rim_diameter: request.rim_diameter,
            dimensions: request.dimensions.as_deref(),
            tire_type: request.tire_type.as_deref(),
            season: request.season.as_deref(),
            stock_quantity: request.stock_quantity,
            price: request.price.clone(),
            description: request.description.as_deref(),
            image_url: request.image_url.as_deref(),
            is_active: request.is_active,
        }
    }
}

impl From<&CreateOrderRequest> for NewOrder {
    fn from(request: &CreateOrderRequest) -> Self {
        NewOrder {
            order_number: request.order_number.clone(),
            user_id: request.user_id,
            status: request
                .status
                .clone()
                .or_else(|| Some("pending".to_string())),
            total_amount: request.total_amount.clone(),
            notes: request.notes.clone(),
        }
    }
}

impl From<&OrderItemPayload> for OrderItemDraft {
    fn from(payload: &OrderItemPayload) -> Self {
        OrderItemDraft {
            product_id: payload.product_id,
            product_code: payload.product_code.clone(),
            product_name: payload.product_name.clone(),
            quantity: payload.quantity,
            unit_price: payload.unit_price.clone(),
            total_price: payload.total_price.clone(),
        }
    }
}

impl<'a> From<&'a CreateRecipientRequest> for NewRecipient<'a> {
    fn from(request: &'a CreateRecipientRequest) -> Self {
        NewRecipient {
            email: &request.email,
            name: request.name.as_deref(),
            role: &request.role,
            is_active: request.is_active.unwrap_or(true),
        }
    }
}

impl<'a> From<&'a UpdateRecipientRequest> for UpdateRecipient<'a> {
    fn from(request: &'a UpdateRecipientRequest) -> Self {
        UpdateRecipient {
            email: request.email.as_deref(),
            name: request.name.as_deref(),
            role: request.role.as_deref(),
            is_active: request.is_active,
        }
    }
}
