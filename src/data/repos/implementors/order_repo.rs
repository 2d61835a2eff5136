use crate::data::database::Database;
use crate::data::models::order::{NewOrder, Order, UpdateOrder};
use crate::data::models::order_item::{NewOrderItem, OrderItem, OrderItemDraft};
use crate::data::models::user::User;
use crate::data::repos::traits::repository::Repository;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use std::collections::HashMap;

/// Failure of the order commit transaction. Insufficient stock is split out
/// because it carries a user-facing message; everything else stays a plain
/// database error.
#[derive(Debug)]
pub enum OrderCommitError {
    InsufficientStock {
        product_name: String,
        available: i32,
    },
    Database(result::Error),
}

impl From<result::Error> for OrderCommitError {
    fn from(e: result::Error) -> Self {
        OrderCommitError::Database(e)
    }
}

impl std::error::Error for OrderCommitError {}

impl std::fmt::Display for OrderCommitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderCommitError::InsufficientStock {
                product_name,
                available,
            } => write!(
                f,
                "Insufficient stock for {product_name}, available: {available}"
            ),
            OrderCommitError::Database(e) => write!(f, "Order commit failed: {e}"),
        }
    }
}

pub struct OrderRepo {}

impl OrderRepo {
    pub fn new() -> Self {
        OrderRepo {}
    }

    /// Retrieves all orders for a specific user, newest first.
    pub async fn get_by_user_id(
        &self,
        user_id_query: i32,
    ) -> Result<Option<Vec<Order>>, result::Error> {
        use crate::data::models::schema::orders::dsl::{created_at, orders, user_id};

        let mut conn = Database::connection().await?;

        match orders
            .filter(user_id.eq(user_id_query))
            .order(created_at.desc())
            .load::<Order>(&mut conn)
            .await
        {
            Ok(value) if value.is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn get_by_order_number(
        &self,
        number_query: &str,
    ) -> Result<Option<Order>, result::Error> {
        use crate::data::models::schema::orders::dsl::{order_number, orders};

        let mut conn = Database::connection().await?;

        match orders
            .filter(order_number.eq(number_query))
            .first::<Order>(&mut conn)
            .await
        {
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// The single place an order becomes durable. Inserts the header, then
    /// every line item in list order, and decrements each referenced
    /// product's stock inside the same transaction. The decrement is guarded
    /// (`stock_quantity >= quantity`); when the guard fails the whole
    /// transaction rolls back, leaving no header, no items, and no stock
    /// changes behind.
    pub async fn create_with_items(
        &self,
        new_order: NewOrder,
        drafts: Vec<OrderItemDraft>,
    ) -> Result<(Order, Vec<OrderItem>), OrderCommitError> {
        use crate::data::models::schema::order_items::dsl::{
            order_id as item_order_id, order_items,
        };
        use crate::data::models::schema::orders::dsl::{order_id, orders};
        use crate::data::models::schema::products::dsl::{
            product_id, products, stock_quantity, updated_at,
        };

        let mut conn = Database::connection().await?;

        conn.transaction::<_, OrderCommitError, _>(|connection| {
            async move {
                diesel::insert_into(orders)
                    .values(&new_order)
                    .execute(connection)
                    .await?;

                let new_id: i32 = diesel::select(diesel::dsl::sql::<
                    diesel::sql_types::Integer,
                >("LAST_INSERT_ID()"))
                .get_result(connection)
                .await?;

                for draft in &drafts {
                    let row = NewOrderItem {
                        order_id: new_id,
                        product_id: draft.product_id,
                        product_code: draft.product_code.clone(),
                        product_name: draft.product_name.clone(),
                        quantity: draft.quantity,
                        unit_price: draft.unit_price.clone(),
                        total_price: draft.total_price.clone(),
                    };

                    diesel::insert_into(order_items)
                        .values(&row)
                        .execute(connection)
                        .await?;

                    let affected = diesel::update(
                        products
                            .filter(product_id.eq(draft.product_id))
                            .filter(stock_quantity.ge(draft.quantity)),
                    )
                    .set((
                        stock_quantity.eq(stock_quantity - draft.quantity),
                        updated_at.eq(diesel::dsl::now.nullable()),
                    ))
                    .execute(connection)
                    .await?;

                    if affected == 0 {
                        // Stock changed (or the product vanished) between the
                        // caller's validation and this commit; abort the whole
                        // order rather than oversell.
                        let available: i32 = products
                            .filter(product_id.eq(draft.product_id))
                            .select(stock_quantity)
                            .first(connection)
                            .await
                            .optional()?
                            .unwrap_or(0);

                        return Err(OrderCommitError::InsufficientStock {
                            product_name: draft.product_name.clone(),
                            available,
                        });
                    }
                }

                let order: Order = orders
                    .filter(order_id.eq(new_id))
                    .first(connection)
                    .await?;
                let items: Vec<OrderItem> = order_items
                    .filter(item_order_id.eq(new_id))
                    .load(connection)
                    .await?;

                Ok((order, items))
            }
            .scope_boxed()
        })
        .await
    }

    /// Embeds each order's line items and a customer record, for the order
    /// history listing.
    pub async fn attach_details(
        &self,
        orders_list: Vec<Order>,
    ) -> Result<Vec<(Order, Vec<OrderItem>, Option<User>)>, result::Error> {
        if orders_list.is_empty() {
            return Ok(Vec::new());
        }

        use crate::data::models::schema::order_items::dsl::{order_id, order_items};
        use crate::data::models::schema::users::dsl::{user_id, users};

        let mut conn = Database::connection().await?;

        let ids: Vec<i32> = orders_list.iter().map(|o| o.order_id).collect();

        let items_data: Vec<OrderItem> = order_items
            .filter(order_id.eq_any(ids))
            .load::<OrderItem>(&mut conn)
            .await?;

        let mut items_by_order: HashMap<i32, Vec<OrderItem>> = HashMap::new();
        for item in items_data {
            items_by_order.entry(item.order_id).or_default().push(item);
        }

        let user_ids: Vec<i32> = orders_list.iter().map(|o| o.user_id).collect();

        let customers: Vec<User> = users
            .filter(user_id.eq_any(user_ids))
            .load::<User>(&mut conn)
            .await?;
        let customers_by_id: HashMap<i32, User> =
            customers.into_iter().map(|u| (u.user_id, u)).collect();

        let result = orders_list
            .into_iter()
            .map(|o| {
                let items = items_by_order.remove(&o.order_id).unwrap_or_default();
                let customer = customers_by_id.get(&o.user_id).cloned();
                (o, items, customer)
            })
            .collect();

        Ok(result)
    }
}

#[async_trait]
impl Repository for OrderRepo {
    type Id = i32;
    type Item = Order;
    type NewItem<'a> = NewOrder;
    type UpdateForm<'a> = UpdateOrder<'a>;

    async fn get_all(&self) -> Result<Option<Vec<Self::Item>>, result::Error> {
        use crate::data::models::schema::orders::dsl::{created_at, orders};

        let mut conn = Database::connection().await?;

        match orders
            .order(created_at.desc())
            .load::<Self::Item>(&mut conn)
            .await
        {
            Ok(value) if value.is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn get_by_id(&self, id: Self::Id) -> Result<Option<Self::Item>, result::Error> {
        use crate::data::models::schema::orders::dsl::{order_id, orders};

        let mut conn = Database::connection().await?;

        match orders
            .filter(order_id.eq(id))
            .first::<Self::Item>(&mut conn)
            .await
        {
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn add<'a>(&self, item: Self::NewItem<'a>) -> Result<(), result::Error> {
        use crate::data::models::schema::orders::dsl::orders;

        let mut conn = Database::connection().await?;

        conn.transaction(|connection| {
            async move {
                diesel::insert_into(orders)
                    .values(&item)
                    .execute(connection)
                    .await?;
                Ok(())
            }
            .scope_boxed()
        })
        .await
    }

    async fn update<'a>(
        &self,
        id: Self::Id,
        item: Self::UpdateForm<'a>,
    ) -> Result<(), result::Error> {
        use crate::data::models::schema::orders::dsl::{order_id, orders, updated_at};

        let mut conn = Database::connection().await?;

        conn.transaction(|connection| {
            async move {
                diesel::update(orders.filter(order_id.eq(id)))
                    .set((&item, updated_at.eq(diesel::dsl::now.nullable())))
                    .execute(connection)
                    .await?;
                Ok(())
            }
            .scope_boxed()
        })
        .await
    }

    async fn delete(&self, id: Self::Id) -> Result<(), result::Error> {
        use crate::data::models::schema::orders::dsl::{order_id, orders};

        let mut conn = Database::connection().await?;

        conn.transaction(|connection| {
            async move {
                diesel::delete(orders.filter(order_id.eq(id)))
                    .execute(connection)
                    .await?;
                Ok(())
            }
            .scope_boxed()
        })
        .await
    }
}

impl Default for OrderRepo {
    fn default() -> Self {
        Self::new()
    }
}
