use crate::data::models::schema::*;
use crate::data::models::user::User;
use bigdecimal::BigDecimal;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, Associations, PartialEq, Debug, Clone)]
#[diesel(table_name = orders)]
#[diesel(primary_key(order_id))]
#[diesel(belongs_to(User, foreign_key = user_id))]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
#[diesel(treat_none_as_null = true)]
pub struct Order {
    pub order_id: i32,
    pub order_number: String,
    pub user_id: i32,
    pub status: Option<String>,
    pub total_amount: BigDecimal,
    pub notes: Option<String>,
    pub created_at: Option<chrono::NaiveDateTime>,
    pub updated_at: Option<chrono::NaiveDateTime>,
}

#[derive(Insertable, PartialEq, Debug)]
#[diesel(table_name = orders)]
pub struct NewOrder {
    pub order_number: String,
    pub user_id: i32,
    pub status: Option<String>,
    pub total_amount: BigDecimal,
    pub notes: Option<String>,
}

/// Post-creation mutation surface: status transitions and note edits only.
/// The monetary fields and line items of a committed order are frozen.
#[derive(AsChangeset, PartialEq, Debug)]
#[diesel(table_name = orders)]
pub struct UpdateOrder<'a> {
    pub status: Option<&'a str>,
    pub notes: Option<&'a str>,
}
