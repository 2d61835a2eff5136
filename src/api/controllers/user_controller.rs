use crate::api::request::{CreateUserRequest, UpdateUserRequest};
use crate::api::response::{Deleted, Envelope, UserResponse};
use crate::data::models::user::{NewUser, UpdateUser};
use crate::data::repos::implementors::user_repo::UserRepo;
use crate::data::repos::traits::repository::Repository;
use crate::security::auth::AuthService;
use axum::Json;
use axum::extract::Path;

pub async fn get_all_users() -> Envelope<Vec<UserResponse>> {
    let repo = UserRepo::new();

    match repo.get_all().await {
        Ok(users) => Envelope::data(
            users
                .unwrap_or_default()
                .into_iter()
                .map(UserResponse::from)
                .collect(),
        ),
        Err(e) => {
            tracing::error!("User listing failed: {e}");
            Envelope::error("Database error")
        }
    }
}

pub async fn create_user(Json(payload): Json<CreateUserRequest>) -> Envelope<UserResponse> {
    let auth = AuthService::new();
    let repo = UserRepo::new();

    let password_hash = match auth.hash_password(&payload.password).await {
        Ok(hash) => hash,
        Err(e) => {
            tracing::error!("Password hashing failed: {e}");
            return Envelope::error("Failed to process password");
        }
    };

    let new_user = NewUser {
        email: &payload.email,
        password_hash: &password_hash,
        role: payload.role.as_deref().unwrap_or("user"),
        business_name: payload.business_name.as_deref(),
        business_number: payload.business_number.as_deref(),
        phone: payload.phone.as_deref(),
        whatsapp: payload.whatsapp.as_deref(),
        viber: payload.viber.as_deref(),
        contact_person: payload.contact_person.as_deref(),
        logo_url: payload.logo_url.as_deref(),
        is_active: payload.is_active.unwrap_or(true),
    };

    if let Err(e) = repo.add(new_user).await {
        tracing::error!("User creation failed: {e}");
        return Envelope::error("Failed to create user");
    }

    match repo.get_by_email(&payload.email).await {
        Ok(Some(user)) => Envelope::data(UserResponse::from(user)),
        Ok(None) => Envelope::error("Failed to create user"),
        Err(e) => {
            tracing::error!("User lookup after create failed: {e}");
            Envelope::error("Database error")
        }
    }
}

pub async fn update_user(
    Path(user_id): Path<i32>,
    Json(payload): Json<UpdateUserRequest>,
) -> Envelope<UserResponse> {
    let repo = UserRepo::new();

    // An incoming plaintext password is swapped for its hash; the raw value
    // never reaches the data layer.
    let password_hash = match &payload.password {
        Some(password) => match AuthService::new().hash_password(password).await {
            Ok(hash) => Some(hash),
            Err(e) => {
                tracing::error!("Password hashing failed: {e}");
                return Envelope::error("Failed to process password");
            }
        },
        None => None,
    };

    let form = UpdateUser {
        email: payload.email.as_deref(),
        password_hash: password_hash.as_deref(),
        role: payload.role.as_deref(),
        business_name: payload.business_name.as_deref(),
        business_number: payload.business_number.as_deref(),
        phone: payload.phone.as_deref(),
        whatsapp: payload.whatsapp.as_deref(),
        viber: payload.viber.as_deref(),
        contact_person: payload.contact_person.as_deref(),
        logo_url: payload.logo_url.as_deref(),
        is_active: payload.is_active,
    };

    if form == UpdateUser::default() {
        return match repo.get_by_id(user_id).await {
            Ok(Some(user)) => Envelope::data(UserResponse::from(user)),
            Ok(None) => Envelope::error("User not found"),
            Err(_) => Envelope::error("Database error"),
        };
    }

    if let Err(e) = repo.update(user_id, form).await {
        tracing::error!("User update failed: {e}");
        return Envelope::error("Failed to update user");
    }

    match repo.get_by_id(user_id).await {
        Ok(Some(user)) => Envelope::data(UserResponse::from(user)),
        Ok(None) => Envelope::error("User not found"),
        Err(e) => {
            tracing::error!("User lookup after update failed: {e}");
            Envelope::error("Database error")
        }
    }
}

pub async fn delete_user(Path(user_id): Path<i32>) -> Envelope<Deleted> {
    let repo = UserRepo::new();

    match repo.delete(user_id).await {
        Ok(_) => Envelope::data(Deleted::ok()),
        Err(e) => {
            tracing::error!("User deletion failed: {e}");
            Envelope::error("Failed to delete user")
        }
    }
}
