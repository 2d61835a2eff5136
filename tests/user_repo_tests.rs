use diesel::result;
use diesel_async::RunQueryDsl;
use treadport_server_lib::data::database::Database;
use treadport_server_lib::data::models::user::{NewUser, UpdateUser};
use treadport_server_lib::data::repos::implementors::user_repo::UserRepo;
use treadport_server_lib::data::repos::traits::repository::Repository;
use treadport_server_lib::security::auth::AuthService;
use treadport_server_lib::security::errors::AuthError;

async fn setup() -> Result<(), result::Error> {
    let db = Database::new().await;

    let mut conn = db
        .get_connection()
        .await
        .expect("Failed to get a database connection");

    use treadport_server_lib::data::models::schema::order_items::dsl::order_items;
    use treadport_server_lib::data::models::schema::orders::dsl::orders;
    use treadport_server_lib::data::models::schema::users::dsl::users;

    diesel::delete(order_items).execute(&mut conn).await?;
    diesel::delete(orders).execute(&mut conn).await?;
    diesel::delete(users).execute(&mut conn).await?;

    Ok(())
}

async fn create_user(email: &str, password: &str, is_active: bool) -> i32 {
    let auth = AuthService::new();
    let repo = UserRepo::new();

    let hashed = auth
        .hash_password(password)
        .await
        .expect("Hashing failed");

    let new_user = NewUser {
        email,
        password_hash: &hashed,
        role: "user",
        business_name: Some("Retreads Ltd"),
        business_number: Some("BN-1234"),
        phone: Some("+38970111222"),
        whatsapp: None,
        viber: None,
        contact_person: Some("Ana K"),
        logo_url: None,
        is_active,
    };

    repo.add(new_user).await.expect("Failed to add user");

    repo.get_by_email(email)
        .await
        .expect("Failed to get user")
        .expect("User not found")
        .user_id
}

#[tokio::test]
#[serial_test::serial]
async fn test_add_and_get_by_email() {
    setup().await.expect("Setup failed");

    let user_id = create_user("buyer@retreads.example", "s3cret", true).await;
    let repo = UserRepo::new();

    let user = repo
        .get_by_id(user_id)
        .await
        .expect("Query failed")
        .expect("User not found");

    assert_eq!(user.email, "buyer@retreads.example");
    assert_eq!(user.role, "user");
    assert_eq!(user.business_name.as_deref(), Some("Retreads Ltd"));
    assert!(user.is_active);

    assert!(repo
        .get_by_email("nobody@retreads.example")
        .await
        .expect("Query failed")
        .is_none());
}

#[tokio::test]
#[serial_test::serial]
async fn test_update_user_profile() {
    setup().await.expect("Setup failed");

    let user_id = create_user("buyer@retreads.example", "s3cret", true).await;
    let repo = UserRepo::new();

    let form = UpdateUser {
        phone: Some("+38970999888"),
        is_active: Some(false),
        ..Default::default()
    };
    repo.update(user_id, form)
        .await
        .expect("Failed to update user");

    let updated = repo
        .get_by_id(user_id)
        .await
        .expect("Query failed")
        .expect("User not found");
    assert_eq!(updated.phone.as_deref(), Some("+38970999888"));
    assert!(!updated.is_active);
    // Untouched fields survive a partial update.
    assert_eq!(updated.contact_person.as_deref(), Some("Ana K"));
}

#[tokio::test]
#[serial_test::serial]
async fn test_delete_user() {
    setup().await.expect("Setup failed");

    let user_id = create_user("buyer@retreads.example", "s3cret", true).await;
    let repo = UserRepo::new();

    repo.delete(user_id).await.expect("Failed to delete user");

    assert!(repo
        .get_by_id(user_id)
        .await
        .expect("Query failed")
        .is_none());
}

#[tokio::test]
#[serial_test::serial]
async fn test_login_with_valid_credentials() {
    setup().await.expect("Setup failed");

    create_user("buyer@retreads.example", "s3cret", true).await;
    let auth = AuthService::new();

    let user = auth
        .login("buyer@retreads.example", "s3cret")
        .await
        .expect("Login should succeed");
    assert_eq!(user.email, "buyer@retreads.example");
}

#[tokio::test]
#[serial_test::serial]
async fn test_login_rejects_bad_password_and_unknown_email() {
    setup().await.expect("Setup failed");

    create_user("buyer@retreads.example", "s3cret", true).await;
    let auth = AuthService::new();

    assert_eq!(
        auth.login("buyer@retreads.example", "wrong")
            .await
            .unwrap_err(),
        AuthError::InvalidCredentials
    );
    assert_eq!(
        auth.login("nobody@retreads.example", "s3cret")
            .await
            .unwrap_err(),
        AuthError::InvalidCredentials
    );
}

#[tokio::test]
#[serial_test::serial]
async fn test_login_rejects_inactive_account() {
    setup().await.expect("Setup failed");

    create_user("dormant@retreads.example", "s3cret", false).await;
    let auth = AuthService::new();

    let error = auth
        .login("dormant@retreads.example", "s3cret")
        .await
        .unwrap_err();
    assert_eq!(error, AuthError::AccountInactive);
    assert_eq!(error.to_string(), "Account is inactive");
}

#[tokio::test]
async fn test_password_hash_round_trip() {
    let auth = AuthService::new();

    let hash = auth.hash_password("s3cret").await.expect("Hashing failed");
    assert_ne!(hash, "s3cret");

    assert!(auth
        .verify_password("s3cret", &hash)
        .await
        .expect("Verification failed"));
    assert!(!auth
        .verify_password("wrong", &hash)
        .await
        .expect("Verification failed"));
}
