use crate::data::database::Database;
use crate::data::models::notification_recipient::{
    NewRecipient, NotificationRecipient, UpdateRecipient,
};
use crate::data::repos::traits::repository::Repository;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

pub struct RecipientRepo {}

impl RecipientRepo {
    pub fn new() -> Self {
        RecipientRepo {}
    }

    /// Recipients that should actually receive order notifications.
    pub async fn get_active(&self) -> Result<Option<Vec<NotificationRecipient>>, result::Error> {
        use crate::data::models::schema::notification_recipients::dsl::{
            is_active, notification_recipients,
        };

        let mut conn = Database::connection().await?;

        match notification_recipients
            .filter(is_active.eq(true))
            .load::<NotificationRecipient>(&mut conn)
            .await
        {
            Ok(value) if value.is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl Repository for RecipientRepo {
    type Id = i32;
    type Item = NotificationRecipient;
    type NewItem<'a> = NewRecipient<'a>;
    type UpdateForm<'a> = UpdateRecipient<'a>;

    async fn get_all(&self) -> Result<Option<Vec<Self::Item>>, result::Error> {
        use crate::data::models::schema::notification_recipients::dsl::{
            created_at, notification_recipients,
        };

        let mut conn = Database::connection().await?;

        match notification_recipients
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
        use crate::data::models::schema::notification_recipients::dsl::{
            notification_recipients, recipient_id,
        };

        let mut conn = Database::connection().await?;

        match notification_recipients
            .filter(recipient_id.eq(id))
            .first::<Self::Item>(&mut conn)
            .await
        {
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn add<'a>(&self, item: Self::NewItem<'a>) -> Result<(), result::Error> {
        use crate::data::models::schema::notification_recipients::dsl::notification_recipients;

        let mut conn = Database::connection().await?;

        conn.transaction(|connection| {
            async move {
                diesel::insert_into(notification_recipients)
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
        use crate::data::models::schema::notification_recipients::dsl::{
            notification_recipients, recipient_id,
        };

        let mut conn = Database::connection().await?;

        conn.transaction(|connection| {
            async move {
                diesel::update(notification_recipients.filter(recipient_id.eq(id)))
                    .set(&item)
                    .execute(connection)
                    .await?;
                Ok(())
            }
            .scope_boxed()
        })
        .await
    }

    async fn delete(&self, id: Self::Id) -> Result<(), result::Error> {
        use crate::data::models::schema::notification_recipients::dsl::{
            notification_recipients, recipient_id,
        };

        let mut conn = Database::connection().await?;

        conn.transaction(|connection| {
            async move {
                diesel::delete(notification_recipients.filter(recipient_id.eq(id)))
                    .execute(connection)
                    .await?;
                Ok(())
            }
            .scope_boxed()
        })
        .await
    }
}

impl Default for RecipientRepo {
    fn default() -> Self {
        Self::new()
    }
}
