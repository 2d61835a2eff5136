use diesel::result;
use diesel_async::RunQueryDsl;
use treadport_server_lib::data::database::Database;
use treadport_server_lib::data::models::notification_recipient::{NewRecipient, UpdateRecipient};
use treadport_server_lib::data::repos::implementors::recipient_repo::RecipientRepo;
use treadport_server_lib::data::repos::traits::repository::Repository;

async fn setup() -> Result<(), result::Error> {
    let db = Database::new().await;

    let mut conn = db
        .get_connection()
        .await
        .expect("Failed to get a database connection");

    use treadport_server_lib::data::models::schema::notification_recipients::dsl::notification_recipients;

    diesel::delete(notification_recipients)
        .execute(&mut conn)
        .await?;

    Ok(())
}

#[tokio::test]
#[serial_test::serial]
async fn test_add_and_list_recipients() {
    setup().await.expect("Setup failed");

    let repo = RecipientRepo::new();

    repo.add(NewRecipient {
        email: "warehouse@treadport.example",
        name: Some("Warehouse"),
        role: "warehouse",
        is_active: true,
    })
    .await
    .expect("Failed to add recipient");

    let recipients = repo
        .get_all()
        .await
        .expect("Query failed")
        .expect("No recipients found");

    assert_eq!(recipients.len(), 1);
    assert_eq!(recipients[0].email, "warehouse@treadport.example");
    assert_eq!(recipients[0].role, "warehouse");
    assert!(recipients[0].is_active);
}

#[tokio::test]
#[serial_test::serial]
async fn test_get_active_excludes_disabled_recipients() {
    setup().await.expect("Setup failed");

    let repo = RecipientRepo::new();

    repo.add(NewRecipient {
        email: "warehouse@treadport.example",
        name: None,
        role: "warehouse",
        is_active: true,
    })
    .await
    .expect("Failed to add recipient");
    repo.add(NewRecipient {
        email: "former@treadport.example",
        name: None,
        role: "manager",
        is_active: false,
    })
    .await
    .expect("Failed to add recipient");

    let active = repo
        .get_active()
        .await
        .expect("Query failed")
        .expect("No active recipients");

    assert_eq!(active.len(), 1);
    assert_eq!(active[0].email, "warehouse@treadport.example");
}

#[tokio::test]
#[serial_test::serial]
async fn test_update_recipient_toggles_active_flag() {
    setup().await.expect("Setup failed");

    let repo = RecipientRepo::new();

    repo.add(NewRecipient {
        email: "finance@treadport.example",
        name: Some("Finance"),
        role: "finance",
        is_active: true,
    })
    .await
    .expect("Failed to add recipient");

    let recipient = repo
        .get_all()
        .await
        .expect("Query failed")
        .expect("No recipients found")
        .remove(0);

    repo.update(
        recipient.recipient_id,
        UpdateRecipient {
            is_active: Some(false),
            ..Default::default()
        },
    )
    .await
    .expect("Failed to update recipient");

    let updated = repo
        .get_by_id(recipient.recipient_id)
        .await
        .expect("Query failed")
        .expect("Recipient not found");
    assert!(!updated.is_active);
    assert_eq!(updated.name.as_deref(), Some("Finance"));

    assert!(repo.get_active().await.expect("Query failed").is_none());
}

#[tokio::test]
#[serial_test::serial]
async fn test_delete_recipient() {
    setup().await.expect("Setup failed");

    let repo = RecipientRepo::new();

    repo.add(NewRecipient {
        email: "manager@treadport.example",
        name: None,
        role: "manager",
        is_active: true,
    })
    .await
    .expect("Failed to add recipient");

    let recipient = repo
        .get_all()
        .await
        .expect("Query failed")
        .expect("No recipients found")
        .remove(0);

    repo.delete(recipient.recipient_id)
        .await
        .expect("Failed to delete recipient");

    assert!(repo
        .get_by_id(recipient.recipient_id)
        .await
        .expect("Query failed")
        .is_none());
}
