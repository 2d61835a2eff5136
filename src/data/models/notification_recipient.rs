use crate::data::models::schema::*;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, PartialEq, Debug, Clone)]
#[diesel(table_name = notification_recipients)]
#[diesel(primary_key(recipient_id))]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
#[diesel(treat_none_as_null = true)]
pub struct NotificationRecipient {
    pub recipient_id: i32,
    pub email: String,
    pub name: Option<String>,
    pub role: String,
    pub is_active: bool,
    pub created_at: Option<chrono::NaiveDateTime>,
}

#[derive(Insertable, PartialEq, Debug)]
#[diesel(table_name = notification_recipients)]
pub struct NewRecipient<'a> {
    pub email: &'a str,
    pub name: Option<&'a str>,
    pub role: &'a str,
    pub is_active: bool,
}

#[derive(AsChangeset, PartialEq, Debug, Default)]
#[diesel(table_name = notification_recipients)]
pub struct UpdateRecipient<'a> {
    pub email: Option<&'a str>,
    pub name: Option<&'a str>,
    pub role: Option<&'a str>,
    pub is_active: Option<bool>,
}
