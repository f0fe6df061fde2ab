//! End-to-end rental flow over the HTTP adapter.
//!
//! Uses an in-memory SQLite repository and a local stand-in for the payment
//! gateway, so the whole charge-then-record path runs for real.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::{
    Json, Router,
    body::Body,
    extract::State,
    http::{Method, Request, StatusCode},
    routing::post,
};
use http_body_util::BodyExt;
use payment_providers::{ChargeGateway, PaymentRegistry};
use rental_hex::{AppState, HttpServer};
use rental_repo::SqliteRepo;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Starts a gateway that approves charges with a positive amount and
/// rejects the rest with 402. Returns its URL and a charge counter.
async fn spawn_gateway() -> (String, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));

    async fn charge(State(hits): State<Arc<AtomicUsize>>, Json(body): Json<Value>) -> StatusCode {
        hits.fetch_add(1, Ordering::SeqCst);
        if body["amount"].as_i64().unwrap_or(0) > 0 {
            StatusCode::OK
        } else {
            StatusCode::PAYMENT_REQUIRED
        }
    }

    let app = Router::new()
        .route("/charges", post(charge))
        .with_state(hits.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/charges", addr), hits)
}

async fn create_app(payments: PaymentRegistry) -> Router {
    let repo = SqliteRepo::new("sqlite::memory:").await.unwrap();
    HttpServer::new(AppState::new(repo, payments)).router()
}

fn rental_request(customer: &str, method: &str, days: i32) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/rental")
        .header("Content-Type", "application/json")
        .body(Body::from(
            json!({"customerName": customer, "paymentMethod": method, "daysRented": days})
                .to_string(),
        ))
        .unwrap()
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_rental_is_recorded_only_when_gateway_approves() {
    let (endpoint, hits) = spawn_gateway().await;
    let app = create_app(PaymentRegistry::with_defaults(
        ChargeGateway::http(endpoint),
        ChargeGateway::simulated(),
    ))
    .await;

    let (status, rental) = send(&app, rental_request("Alice", "MbWay", 3)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rental["totalPrice"], 1500);
    assert!(rental["id"].as_i64().unwrap() > 0);

    let (status, body) = send(&app, rental_request("Alice", "MbWay", 0)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Payment processing failed.");

    assert_eq!(hits.load(Ordering::SeqCst), 2);

    let list = Request::builder()
        .uri("/rental/Alice")
        .body(Body::empty())
        .unwrap();
    let (status, rentals) = send(&app, list).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rentals.as_array().unwrap().len(), 1);
    assert_eq!(rentals[0]["daysRented"], 3);
}

#[tokio::test]
async fn test_unreachable_gateway_is_server_error() {
    let app = create_app(PaymentRegistry::with_defaults(
        ChargeGateway::simulated(),
        ChargeGateway::http("http://127.0.0.1:1/charges"),
    ))
    .await;

    let (status, body) = send(&app, rental_request("Bob", "PayPal", 2)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["message"],
        "An error occurred while processing your request."
    );

    let list = Request::builder()
        .uri("/rental/Bob")
        .body(Body::empty())
        .unwrap();
    let (_, rentals) = send(&app, list).await;
    assert_eq!(rentals, json!([]));
}

#[tokio::test]
async fn test_customers_and_movies_are_persisted() {
    let app = create_app(PaymentRegistry::new()).await;

    let create = Request::builder()
        .method(Method::POST)
        .uri("/customer")
        .header("Content-Type", "application/json")
        .body(Body::from(r#"{"name":"Carol","phone":"+351910000000"}"#))
        .unwrap();
    let (status, customer) = send(&app, create).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(customer["phone"], "+351910000000");

    let create = Request::builder()
        .method(Method::POST)
        .uri("/movie")
        .header("Content-Type", "application/json")
        .body(Body::from(r#"{"title":"Heat","releaseYear":1995}"#))
        .unwrap();
    let (status, movie) = send(&app, create).await;
    assert_eq!(status, StatusCode::OK);
    assert!(movie["genre"].is_null());

    let (_, customers) = send(
        &app,
        Request::builder().uri("/customer").body(Body::empty()).unwrap(),
    )
    .await;
    let (_, movies) = send(
        &app,
        Request::builder().uri("/movie").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(customers, json!([customer]));
    assert_eq!(movies, json!([movie]));
}
