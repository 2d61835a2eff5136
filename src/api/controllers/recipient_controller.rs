use crate::api::request::{CreateRecipientRequest, UpdateRecipientRequest};
use crate::api::response::{Deleted, Envelope, RecipientResponse};
use crate::data::models::notification_recipient::{NewRecipient, UpdateRecipient};
use crate::data::repos::implementors::recipient_repo::RecipientRepo;
use crate::data::repos::traits::repository::Repository;
use axum::Json;
use axum::extract::Path;

pub async fn get_all_recipients() -> Envelope<Vec<RecipientResponse>> {
    let repo = RecipientRepo::new();

    match repo.get_all().await {
        Ok(recipients) => Envelope::data(
            recipients
                .unwrap_or_default()
                .into_iter()
                .map(RecipientResponse::from)
                .collect(),
        ),
        Err(e) => {
            tracing::error!("Recipient listing failed: {e}");
            Envelope::error("Database error")
        }
    }
}

pub async fn create_recipient(
    Json(payload): Json<CreateRecipientRequest>,
) -> Envelope<RecipientResponse> {
    let repo = RecipientRepo::new();

    if let Err(e) = repo.add(NewRecipient::from(&payload)).await {
        tracing::error!("Recipient creation failed: {e}");
        return Envelope::error("Failed to create recipient");
    }

    // The roster is small; the freshly created row is simply the newest one.
    match repo.get_all().await {
        Ok(Some(recipients)) => match recipients
            .into_iter()
            .find(|r| r.email == payload.email)
        {
            Some(recipient) => Envelope::data(RecipientResponse::from(recipient)),
            None => Envelope::error("Failed to create recipient"),
        },
        Ok(None) => Envelope::error("Failed to create recipient"),
        Err(e) => {
            tracing::error!("Recipient lookup after create failed: {e}");
            Envelope::error("Database error")
        }
    }
}

pub async fn update_recipient(
    Path(recipient_id): Path<i32>,
    Json(payload): Json<UpdateRecipientRequest>,
) -> Envelope<RecipientResponse> {
    let repo = RecipientRepo::new();

    let form = UpdateRecipient::from(&payload);
    if form == UpdateRecipient::default() {
        return match repo.get_by_id(recipient_id).await {
            Ok(Some(recipient)) => Envelope::data(RecipientResponse::from(recipient)),
            Ok(None) => Envelope::error("Recipient not found"),
            Err(_) => Envelope::error("Database error"),
        };
    }

    if let Err(e) = repo.update(recipient_id, form).await {
        tracing::error!("Recipient update failed: {e}");
        return Envelope::error("Failed to update recipient");
    }

    match repo.get_by_id(recipient_id).await {
        Ok(Some(recipient)) => Envelope::data(RecipientResponse::from(recipient)),
        Ok(None) => Envelope::error("Recipient not found"),
        Err(e) => {
            tracing::error!("Recipient lookup after update failed: {e}");
            Envelope::error("Database error")
        }
    }
}

pub async fn delete_recipient(Path(recipient_id): Path<i32>) -> Envelope<Deleted> {
    let repo = RecipientRepo::new();

    match repo.delete(recipient_id).await {
        Ok(_) => Envelope::data(Deleted::ok()),
        Err(e) => {
            tracing::error!("Recipient deletion failed: {e}");
            Envelope::error("Failed to delete recipient")
        }
    }
}
