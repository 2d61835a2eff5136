use crate::api::request::CreateOrderRequest;
use crate::data::models::order::{NewOrder, Order, UpdateOrder};
use crate::data::models::order_item::{OrderItem, OrderItemDraft};
use crate::data::repos::implementors::order_repo::{OrderCommitError, OrderRepo};
use crate::data::repos::implementors::user_repo::UserRepo;
use crate::data::repos::traits::repository::Repository;
use crate::notify::dispatcher::NotificationDispatcher;
use crate::services::errors::OrderServiceError;

/// Order lifecycle. An order starts pending, moves forward through
/// fulfilment, and can be cancelled from any non-terminal state; delivered
/// and cancelled orders never change again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        match self {
            Pending => matches!(next, Confirmed | Processing | Cancelled),
            Confirmed => matches!(next, Processing | Shipped | Delivered | Cancelled),
            Processing => matches!(next, Shipped | Delivered | Cancelled),
            Shipped => matches!(next, Delivered | Cancelled),
            Delivered | Cancelled => false,
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "confirmed" => Ok(OrderStatus::Confirmed),
            "processing" => Ok(OrderStatus::Processing),
            "shipped" => Ok(OrderStatus::Shipped),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            _ => Err(()),
        }
    }
}

pub struct OrderService;

impl OrderService {
    pub fn new() -> Self {
        OrderService
    }

    /// Commits an order and its line items atomically, then kicks off the
    /// notification dispatch on a detached task. The dispatch can fail
    /// without affecting the returned result; the commit cannot partially
    /// succeed.
    pub async fn place_order(
        &self,
        request: CreateOrderRequest,
    ) -> Result<(Order, Vec<OrderItem>), OrderServiceError> {
        if request.items.is_empty() {
            return Err(OrderServiceError::EmptyOrder);
        }

        let drafts: Vec<OrderItemDraft> = request.items.iter().map(OrderItemDraft::from).collect();
        let new_order = NewOrder::from(&request);

        let repo = OrderRepo::new();
        let (order, items) = repo
            .create_with_items(new_order, drafts)
            .await
            .map_err(|e| match e {
                OrderCommitError::InsufficientStock {
                    product_name,
                    available,
                } => OrderServiceError::InsufficientStock {
                    product_name,
                    available,
                },
                OrderCommitError::Database(err) => {
                    tracing::error!("Order commit failed: {err}");
                    OrderServiceError::DatabaseError
                }
            })?;

        tracing::info!(
            "Order {} committed with {} items",
            order.order_number,
            items.len()
        );

        let customer = UserRepo::new().get_by_id(order.user_id).await.ok().flatten();
        NotificationDispatcher::spawn_order_placed(order.clone(), items.clone(), customer);

        Ok((order, items))
    }

    /// Admin mutation surface: status and notes. A status change must be a
    /// legal forward transition; re-asserting the current status is a no-op.
    pub async fn update_order(
        &self,
        order_id: i32,
        status: Option<&str>,
        notes: Option<&str>,
    ) -> Result<Order, OrderServiceError> {
        let repo = OrderRepo::new();

        let order = repo
            .get_by_id(order_id)
            .await
            .map_err(|_| OrderServiceError::DatabaseError)?
            .ok_or(OrderServiceError::OrderNotFound)?;

        if let Some(requested) = status {
            let next: OrderStatus = requested
                .parse()
                .map_err(|_| OrderServiceError::InvalidStatus(requested.to_string()))?;
            let current: OrderStatus = order
                .status
                .as_deref()
                .and_then(|s| s.parse().ok())
                .unwrap_or(OrderStatus::Pending);

            if current != next && !current.can_transition_to(next) {
                return Err(OrderServiceError::InvalidStatusTransition);
            }
        }

        if status.is_none() && notes.is_none() {
            return Ok(order);
        }

        let form = UpdateOrder { status, notes };
        repo.update(order_id, form)
            .await
            .map_err(|_| OrderServiceError::DatabaseError)?;

        repo.get_by_id(order_id)
            .await
            .map_err(|_| OrderServiceError::DatabaseError)?
            .ok_or(OrderServiceError::OrderNotFound)
    }
}

impl Default for OrderService {
    fn default() -> Self {
        Self::new()
    }
}
