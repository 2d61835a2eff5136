use crate::data::models::schema::*;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, PartialEq, Debug, Clone)]
#[diesel(table_name = users)]
#[diesel(primary_key(user_id))]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
#[diesel(treat_none_as_null = true)]
pub struct User {
    pub user_id: i32,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub business_name: Option<String>,
    pub business_number: Option<String>,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub viber: Option<String>,
    pub contact_person: Option<String>,
    pub logo_url: Option<String>,
    pub is_active: bool,
    pub created_at: Option<chrono::NaiveDateTime>,
    pub updated_at: Option<chrono::NaiveDateTime>,
}

#[derive(Insertable, PartialEq, Debug)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub email: &'a str,
    pub password_hash: &'a str,
    pub role: &'a str,
    pub business_name: Option<&'a str>,
    pub business_number: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub whatsapp: Option<&'a str>,
    pub viber: Option<&'a str>,
    pub contact_person: Option<&'a str>,
    pub logo_url: Option<&'a str>,
    pub is_active: bool,
}

#[derive(AsChangeset, PartialEq, Debug, Default)]
#[diesel(table_name = users)]
pub struct UpdateUser<'a> {
    pub email: Option<&'a str>,
    pub password_hash: Option<&'a str>,
    pub role: Option<&'a str>,
    pub business_name: Option<&'a str>,
    pub business_number: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub whatsapp: Option<&'a str>,
    pub viber: Option<&'a str>,
    pub contact_person: Option<&'a str>,
    pub logo_url: Option<&'a str>,
    pub is_active: Option<bool>,
}
