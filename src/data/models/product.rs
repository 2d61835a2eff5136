use crate::data::models::schema::*;
use bigdecimal::BigDecimal;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Catalog row. Serde derives exist because the cart persists whole product
/// snapshots to local storage.
#[derive(
    Queryable, Selectable, Identifiable, PartialEq, Debug, Clone, Serialize, Deserialize,
)]
#[diesel(table_name = products)]
#[diesel(primary_key(product_id))]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
#[diesel(treat_none_as_null = true)]
pub struct Product {
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
    pub created_at: Option<chrono::NaiveDateTime>,
    pub updated_at: Option<chrono::NaiveDateTime>,
}

#[derive(Insertable, PartialEq, Debug)]
#[diesel(table_name = products)]
pub struct NewProduct<'a> {
    pub product_code: &'a str,
    pub brand: &'a str,
    pub name: &'a str,
    pub width: Option<i32>,
    pub aspect_ratio: Option<i32>,
    pub rim_diameter: Option<i32>,
    pub dimensions: &'a str,
    pub tire_type: &'a str,
    pub season: &'a str,
    pub stock_quantity: i32,
    pub price: BigDecimal,
    pub description: Option<&'a str>,
    pub image_url: Option<&'a str>,
    pub is_active: bool,
}

#[derive(AsChangeset, PartialEq, Debug, Default)]
#[diesel(table_name = products)]
pub struct UpdateProduct<'a> {
    pub product_code: Option<&'a str>,
    pub brand: Option<&'a str>,
    pub name: Option<&'a str>,
    pub width: Option<i32>,
    pub aspect_ratio: Option<i32>,
    pub rim_diameter: Option<i32>,
    pub dimensions: Option<&'a str>,
    pub tire_type: Option<&'a str>,
    pub season: Option<&'a str>,
    pub stock_quantity: Option<i32>,
    pub price: Option<BigDecimal>,
    pub description: Option<&'a str>,
    pub image_url: Option<&'a str>,
    pub is_active: Option<bool>,
}
