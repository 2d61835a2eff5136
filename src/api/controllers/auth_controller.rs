use crate::api::request::LoginRequest;
use crate::api::response::{Envelope, UserResponse};
use crate::security::auth::AuthService;
use crate::security::errors::AuthError;
use axum::Json;

/// Login. Credential failures are business errors, so they come back in the
/// envelope with HTTP 200 like everything else.
pub async fn login(Json(payload): Json<LoginRequest>) -> Envelope<UserResponse> {
    let auth = AuthService::new();

    match auth.login(&payload.email, &payload.password).await {
        Ok(user) => Envelope::data(UserResponse::from(user)),
        Err(e @ (AuthError::InvalidCredentials | AuthError::AccountInactive)) => {
            Envelope::error(e)
        }
        Err(e) => {
            tracing::error!("Login failed: {e}");
            Envelope::error("Login failed")
        }
    }
}
