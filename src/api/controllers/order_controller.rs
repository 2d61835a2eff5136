use crate::api::request::{CreateOrderRequest, UpdateOrderRequest};
use crate::api::response::{Envelope, OrderResponse};
use crate::data::repos::implementors::order_repo::OrderRepo;
use crate::data::repos::traits::repository::Repository;
use crate::services::errors::OrderServiceError;
use crate::services::order_service::OrderService;
use axum::Json;
use axum::extract::{Path, Query};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct OrderListQuery {
    pub user_id: Option<i32>,
}

// TODO: Add pagination once order history grows beyond a single screen

/// Order history, newest first, with line items and a customer summary
/// embedded. `?user_id=` narrows to one customer's orders.
pub async fn get_orders(Query(query): Query<OrderListQuery>) -> Envelope<Vec<OrderResponse>> {
    let repo = OrderRepo::new();

    let orders = match query.user_id {
        Some(user_id) => repo.get_by_user_id(user_id).await,
        None => repo.get_all().await,
    };

    let orders = match orders {
        Ok(orders) => orders.unwrap_or_default(),
        Err(e) => {
            tracing::error!("Order listing failed: {e}");
            return Envelope::error("Database error");
        }
    };

    match repo.attach_details(orders).await {
        Ok(detailed) => {
            Envelope::data(detailed.into_iter().map(OrderResponse::from).collect())
        }
        Err(e) => {
            tracing::error!("Order detail lookup failed: {e}");
            Envelope::error("Database error")
        }
    }
}

/// The atomic commit: order header, line items, and stock decrements all
/// land together or not at all. Validation failures (insufficient stock,
/// empty order) come back in the envelope; the caller's cart is their
/// concern and stays untouched on failure.
pub async fn create_order(Json(payload): Json<CreateOrderRequest>) -> Envelope<OrderResponse> {
    let service = OrderService::new();

    match service.place_order(payload).await {
        Ok((order, items)) => Envelope::data(OrderResponse::from((order, items))),
        Err(
            e @ (OrderServiceError::EmptyOrder | OrderServiceError::InsufficientStock { .. }),
        ) => Envelope::error(e),
        Err(e) => {
            tracing::error!("Order creation failed: {e}");
            Envelope::error("Failed to create order")
        }
    }
}

/// Admin mutation: status transitions and notes only.
pub async fn update_order(
    Path(order_id): Path<i32>,
    Json(payload): Json<UpdateOrderRequest>,
) -> Envelope<OrderResponse> {
    let service = OrderService::new();

    match service
        .update_order(order_id, payload.status.as_deref(), payload.notes.as_deref())
        .await
    {
        Ok(order) => Envelope::data(OrderResponse::from(order)),
        Err(
            e @ (OrderServiceError::OrderNotFound
            | OrderServiceError::InvalidStatus(_)
            | OrderServiceError::InvalidStatusTransition),
        ) => Envelope::error(e),
        Err(e) => {
            tracing::error!("Order update failed: {e}");
            Envelope::error("Failed to update order")
        }
    }
}
