use async_trait::async_trait;
use bigdecimal::BigDecimal;
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use treadport_server_lib::data::models::notification_recipient::NotificationRecipient;
use treadport_server_lib::data::models::order::Order;
use treadport_server_lib::data::models::order_item::OrderItem;
use treadport_server_lib::data::models::user::User;
use treadport_server_lib::notify::dispatcher::{render_order_summary, NotificationDispatcher};
use treadport_server_lib::notify::mailer::{MailError, Mailer, OutboundEmail};

struct MockMailer {
    sent: Arc<Mutex<Vec<OutboundEmail>>>,
    fail: bool,
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send(&self, email: OutboundEmail) -> Result<(), MailError> {
        if self.fail {
            return Err(MailError::Transport("connection reset".to_string()));
        }
        self.sent.lock().unwrap().push(email);
        Ok(())
    }
}

fn order() -> Order {
    Order {
        order_id: 12,
        order_number: "PO-240101-0007".to_string(),
        user_id: 3,
        status: Some("pending".to_string()),
        total_amount: BigDecimal::from_str("25.00").unwrap(),
        notes: Some("Deliver before Friday".to_string()),
        created_at: None,
        updated_at: None,
    }
}

fn items() -> Vec<OrderItem> {
    vec![
        OrderItem {
            order_item_id: 1,
            order_id: 12,
            product_id: 1,
            product_code: "LS-205".to_string(),
            product_name: "Competus".to_string(),
            quantity: 2,
            unit_price: BigDecimal::from_str("10.00").unwrap(),
            total_price: BigDecimal::from_str("20.00").unwrap(),
            created_at: None,
        },
        OrderItem {
            order_item_id: 2,
            order_id: 12,
            product_id: 2,
            product_code: "LS-195".to_string(),
            product_name: "Greenways".to_string(),
            quantity: 1,
            unit_price: BigDecimal::from_str("5.00").unwrap(),
            total_price: BigDecimal::from_str("5.00").unwrap(),
            created_at: None,
        },
    ]
}

fn customer() -> User {
    User {
        user_id: 3,
        email: "orders@retreads.example".to_string(),
        password_hash: "unused".to_string(),
        role: "user".to_string(),
        business_name: Some("Retreads Ltd".to_string()),
        business_number: Some("BN-1234".to_string()),
        phone: Some("+38970111222".to_string()),
        whatsapp: None,
        viber: None,
        contact_person: Some("Ana K".to_string()),
        logo_url: None,
        is_active: true,
        created_at: None,
        updated_at: None,
    }
}

fn recipient(id: i32, email: &str, name: Option<&str>) -> NotificationRecipient {
    NotificationRecipient {
        recipient_id: id,
        email: email.to_string(),
        name: name.map(str::to_string),
        role: "warehouse".to_string(),
        is_active: true,
        created_at: None,
    }
}

#[test]
fn summary_lists_every_line_and_the_total() {
    let body = render_order_summary(&order(), &items(), Some(&customer()));

    assert!(body.contains("Order PO-240101-0007"));
    assert!(body.contains("Customer: Retreads Ltd"));
    assert!(body.contains("Contact: Ana K"));
    assert!(body.contains("LS-205  Competus  x2 @ 10.00 = 20.00"));
    assert!(body.contains("LS-195  Greenways  x1 @ 5.00 = 5.00"));
    assert!(body.contains("Total: 25.00"));
    assert!(body.contains("Notes: Deliver before Friday"));
}

#[test]
fn summary_without_customer_skips_the_customer_block() {
    let body = render_order_summary(&order(), &items(), None);

    assert!(!body.contains("Customer:"));
    assert!(body.contains("Total: 25.00"));
}

#[tokio::test]
async fn dispatch_sends_one_email_to_all_recipients() {
    let sent = Arc::new(Mutex::new(Vec::new()));
    let dispatcher = NotificationDispatcher::new(Box::new(MockMailer {
        sent: sent.clone(),
        fail: false,
    }));

    let recipients = vec![
        recipient(1, "warehouse@treadport.example", Some("Warehouse")),
        recipient(2, "finance@treadport.example", None),
    ];

    dispatcher
        .send_order_summary(&recipients, &order(), &items(), Some(&customer()))
        .await
        .expect("dispatch should succeed");

    let sent = sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "New order PO-240101-0007");
    assert_eq!(
        sent[0].to,
        vec![
            "Warehouse <warehouse@treadport.example>".to_string(),
            "finance@treadport.example".to_string(),
        ]
    );
}

#[tokio::test]
async fn dispatch_with_no_recipients_sends_nothing_and_succeeds() {
    let sent = Arc::new(Mutex::new(Vec::new()));
    let dispatcher = NotificationDispatcher::new(Box::new(MockMailer {
        sent: sent.clone(),
        fail: false,
    }));

    dispatcher
        .send_order_summary(&[], &order(), &items(), None)
        .await
        .expect("empty roster is not an error");

    assert!(sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn mailer_failure_is_reported_to_the_dispatcher_only() {
    let dispatcher = NotificationDispatcher::new(Box::new(MockMailer {
        sent: Arc::new(Mutex::new(Vec::new())),
        fail: true,
    }));

    let recipients = vec![recipient(1, "warehouse@treadport.example", None)];
    let result = dispatcher
        .send_order_summary(&recipients, &order(), &items(), None)
        .await;

    assert!(matches!(result, Err(MailError::Transport(_))));
}
