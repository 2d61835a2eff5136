use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use bigdecimal::BigDecimal;
use diesel::result;
use diesel_async::RunQueryDsl;
use http_body_util::BodyExt;
use serde::Deserialize;
use serde_json::json;
use std::str::FromStr;
use tower::ServiceExt;
use treadport_server_lib::api::response::OrderResponse;
use treadport_server_lib::api::routes::order_routes;
use treadport_server_lib::data::database::Database;
use treadport_server_lib::data::models::product::NewProduct;
use treadport_server_lib::data::models::user::NewUser;
use treadport_server_lib::data::repos::implementors::product_repo::ProductRepo;
use treadport_server_lib::data::repos::implementors::user_repo::UserRepo;
use treadport_server_lib::data::repos::traits::repository::Repository;

#[derive(Deserialize)]
struct Envelope<T> {
    data: Option<T>,
    error: Option<String>,
}

fn app() -> Router {
    Router::new().nest("/api/orders", order_routes::routes())
}

async fn setup() -> Result<(), result::Error> {
    let db = Database::new().await;

    let mut conn = db
        .get_connection()
        .await
        .expect("Failed to get a database connection");

    use treadport_server_lib::data::models::schema::order_items::dsl::order_items;
    use treadport_server_lib::data::models::schema::orders::dsl::orders;
    use treadport_server_lib::data::models::schema::products::dsl::products;
    use treadport_server_lib::data::models::schema::users::dsl::users;

    diesel::delete(order_items).execute(&mut conn).await?;
    diesel::delete(orders).execute(&mut conn).await?;
    diesel::delete(products).execute(&mut conn).await?;
    diesel::delete(users).execute(&mut conn).await?;

    Ok(())
}

async fn create_test_user(email: &str) -> i32 {
    let repo = UserRepo::new();

    repo.add(NewUser {
        email,
        password_hash: "$argon2id$test$hash",
        role: "user",
        business_name: Some("Retreads Ltd"),
        business_number: None,
        phone: None,
        whatsapp: None,
        viber: None,
        contact_person: None,
        logo_url: None,
        is_active: true,
    })
    .await
    .expect("Failed to add user");

    repo.get_by_email(email)
        .await
        .expect("Failed to get user")
        .expect("User not found")
        .user_id
}

async fn create_test_product(code: &str, name: &str, stock: i32, price: &str) -> i32 {
    let repo = ProductRepo::new();

    repo.add(NewProduct {
        product_code: code,
        brand: "Lassa",
        name,
        width: None,
        aspect_ratio: None,
        rim_diameter: None,
        dimensions: "205/55R16",
        tire_type: "car",
        season: "summer",
        stock_quantity: stock,
        price: BigDecimal::from_str(price).unwrap(),
        description: None,
        image_url: None,
        is_active: true,
    })
    .await
    .expect("Failed to add product");

    repo.get_by_code(code)
        .await
        .expect("Failed to get product")
        .expect("Product not found")
        .product_id
}

fn order_body(order_number: &str, user_id: i32, product_id: i32, quantity: i32) -> Body {
    let body = json!({
        "order_number": order_number,
        "user_id": user_id,
        "status": "pending",
        "total_amount": format!("{}.00", 10 * quantity),
        "notes": null,
        "items": [{
            "product_id": product_id,
            "product_code": "LS-CTRL",
            "product_name": "Competus",
            "quantity": quantity,
            "unit_price": "10.00",
            "total_price": format!("{}.00", 10 * quantity),
        }],
    });
    Body::from(body.to_string())
}

async fn read_envelope<T: for<'de> Deserialize<'de>>(
    response: axum::response::Response,
) -> Envelope<T> {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("Body should be an envelope")
}

#[tokio::test]
#[serial_test::serial]
async fn test_create_order_returns_order_with_items() {
    setup().await.expect("Setup failed");

    let user_id = create_test_user("controller@retreads.example").await;
    let product_id = create_test_product("LS-CTRL", "Competus", 5, "10.00").await;

    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/orders")
                .header("content-type", "application/json")
                .body(order_body("PO-240101-0200", user_id, product_id, 2))
                .unwrap(),
        )
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::OK);

    let envelope: Envelope<OrderResponse> = read_envelope(response).await;
    assert!(envelope.error.is_none());

    let order = envelope.data.expect("Order should be returned");
    assert_eq!(order.order_number, "PO-240101-0200");
    assert_eq!(order.total_amount, BigDecimal::from_str("20.00").unwrap());

    let items = order.items.expect("Items should be embedded");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].quantity, 2);

    // The commit decremented stock.
    let product = ProductRepo::new()
        .get_by_id(product_id)
        .await
        .expect("Query failed")
        .expect("Product not found");
    assert_eq!(product.stock_quantity, 3);
}

#[tokio::test]
#[serial_test::serial]
async fn test_insufficient_stock_is_a_business_error_not_an_http_error() {
    setup().await.expect("Setup failed");

    let user_id = create_test_user("controller@retreads.example").await;
    let product_id = create_test_product("LS-CTRL", "Competus", 4, "10.00").await;

    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/orders")
                .header("content-type", "application/json")
                .body(order_body("PO-240101-0201", user_id, product_id, 10))
                .unwrap(),
        )
        .await
        .expect("Request failed");

    // Business failures ride the envelope with HTTP 200.
    assert_eq!(response.status(), StatusCode::OK);

    let envelope: Envelope<OrderResponse> = read_envelope(response).await;
    assert!(envelope.data.is_none());

    let error = envelope.error.expect("Error message expected");
    assert!(error.contains("Competus"));
    assert!(error.contains("available: 4"));

    // Nothing was committed.
    let product = ProductRepo::new()
        .get_by_id(product_id)
        .await
        .expect("Query failed")
        .expect("Product not found");
    assert_eq!(product.stock_quantity, 4);
}

#[tokio::test]
#[serial_test::serial]
async fn test_get_orders_filters_by_user_and_embeds_details() {
    setup().await.expect("Setup failed");

    let buyer = create_test_user("buyer@retreads.example").await;
    let other = create_test_user("other@retreads.example").await;
    let product_id = create_test_product("LS-CTRL", "Competus", 10, "10.00").await;

    for (number, user_id) in [
        ("PO-240101-0202", buyer),
        ("PO-240101-0203", other),
    ] {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/orders")
                    .header("content-type", "application/json")
                    .body(order_body(number, user_id, product_id, 1))
                    .unwrap(),
            )
            .await
            .expect("Request failed");
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app()
        .oneshot(
            Request::builder()
                .uri(format!("/api/orders?user_id={buyer}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("Request failed");

    let envelope: Envelope<Vec<OrderResponse>> = read_envelope(response).await;
    let orders = envelope.data.expect("Orders should be returned");

    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].order_number, "PO-240101-0202");
    assert_eq!(
        orders[0].items.as_ref().map(|items| items.len()),
        Some(1)
    );

    let customer = orders[0].user.as_ref().expect("Customer should be embedded");
    assert_eq!(customer.email, "buyer@retreads.example");
}

#[tokio::test]
#[serial_test::serial]
async fn test_patch_updates_status_and_rejects_illegal_transition() {
    setup().await.expect("Setup failed");

    let user_id = create_test_user("controller@retreads.example").await;
    let product_id = create_test_product("LS-CTRL", "Competus", 5, "10.00").await;

    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/orders")
                .header("content-type", "application/json")
                .body(order_body("PO-240101-0204", user_id, product_id, 1))
                .unwrap(),
        )
        .await
        .expect("Request failed");
    let envelope: Envelope<OrderResponse> = read_envelope(response).await;
    let order_id = envelope.data.expect("Order should be returned").order_id;

    let response = app()
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri(format!("/api/orders/{order_id}"))
                .header("content-type", "application/json")
                .body(Body::from(json!({"status": "cancelled"}).to_string()))
                .unwrap(),
        )
        .await
        .expect("Request failed");
    let envelope: Envelope<OrderResponse> = read_envelope(response).await;
    assert_eq!(
        envelope.data.expect("Order should be returned").status,
        Some("cancelled".to_string())
    );

    // Cancelled is terminal; reviving the order is rejected in the envelope.
    let response = app()
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri(format!("/api/orders/{order_id}"))
                .header("content-type", "application/json")
                .body(Body::from(json!({"status": "confirmed"}).to_string()))
                .unwrap(),
        )
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::OK);
    let envelope: Envelope<OrderResponse> = read_envelope(response).await;
    assert!(envelope.data.is_none());
    assert_eq!(envelope.error.as_deref(), Some("Invalid status transition"));
}

#[tokio::test]
#[serial_test::serial]
async fn test_empty_item_list_is_rejected() {
    setup().await.expect("Setup failed");

    let user_id = create_test_user("controller@retreads.example").await;

    let body = json!({
        "order_number": "PO-240101-0205",
        "user_id": user_id,
        "status": "pending",
        "total_amount": "0.00",
        "notes": null,
        "items": [],
    });

    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/orders")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .expect("Request failed");

    let envelope: Envelope<OrderResponse> = read_envelope(response).await;
    assert!(envelope.data.is_none());
    assert_eq!(
        envelope.error.as_deref(),
        Some("Order must contain at least one item")
    );
}
