//! Client example renting movies against a freshly started server.
//!
//! Run with: cargo run -p rental-app --example client_example

use payment_providers::{ChargeGateway, PaymentRegistry};
use rental_client::{ClientError, MovieRentalClient};
use rental_hex::{AppState, HttpServer};
use rental_repo::build_repo;
use rental_types::{CreateCustomerRequest, CreateMovieRequest, CreateRentalRequest};
use std::net::SocketAddr;
use tempfile::tempdir;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter("info").init();

    // Find an available port
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;
    let port = addr.port();
    drop(listener);

    // Use a temp file-backed SQLite DB
    let tmp = tempdir()?;
    let db_path = tmp.path().join("movie_rental.db");
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

    println!("🚀 Starting server on port {port}...");
    println!("   Database: {db_url}");

    // Build repository (handles connection and migration)
    let repo = build_repo(&db_url).await?;

    // Both providers simulated: MB WAY approves, PayPal declines
    let payments =
        PaymentRegistry::with_defaults(ChargeGateway::simulated(), ChargeGateway::declining());

    // Start server in background
    let server = HttpServer::new(AppState::new(repo, payments));
    let router = server.router();

    let server_addr = format!("127.0.0.1:{port}");
    tokio::spawn(async move {
        axum::serve(
            TcpListener::bind(&server_addr).await.unwrap(),
            router.into_make_service(),
        )
        .await
        .unwrap();
    });

    // Wait for server to start
    tokio::time::sleep(std::time::Duration::from_millis(500)).await;

    let client = MovieRentalClient::new(format!("http://127.0.0.1:{port}"));

    // ─────────────────────────────────────────────────────────────────────────
    // Demo: customers, movies, rentals
    // ─────────────────────────────────────────────────────────────────────────

    let health = client.health().await?;
    println!("✅ Server health: {health}");

    let alice = client
        .create_customer(&CreateCustomerRequest {
            name: "Alice".to_string(),
            email: Some("alice@example.com".to_string()),
            phone: None,
        })
        .await?;
    println!("✅ Created customer: {} (id={})", alice.name, alice.id);

    let matrix = client
        .create_movie(&CreateMovieRequest {
            title: "The Matrix".to_string(),
            genre: Some("Science Fiction".to_string()),
            release_year: Some(1999),
        })
        .await?;
    println!("✅ Created movie: {} (id={})", matrix.title, matrix.id);

    let rental = client
        .rent_movie(&CreateRentalRequest {
            customer_name: alice.name.clone(),
            movie_id: Some(matrix.id),
            payment_method: "MbWay".to_string(),
            days_rented: 3,
        })
        .await?;
    println!(
        "✅ Rented {} for {} days with {}: {}",
        matrix.title, rental.days_rented, rental.payment_method, rental.total_price
    );

    // PayPal is configured to decline
    match client
        .rent_movie(&CreateRentalRequest {
            customer_name: alice.name.clone(),
            movie_id: Some(matrix.id),
            payment_method: "PayPal".to_string(),
            days_rented: 1,
        })
        .await
    {
        Err(ClientError::Api { status, message }) => {
            println!("✅ PayPal rental refused ({status}): {message}");
        }
        other => anyhow::bail!("expected a declined payment, got {:?}", other),
    }

    let rentals = client.rentals_for_customer(&alice.name).await?;
    println!("\n📋 Rentals for {}:", alice.name);
    for r in rentals {
        println!(
            "   - #{} movie={:?} days={} paid={} via {}",
            r.id,
            r.movie_id.map(|id| id.get()),
            r.days_rented,
            r.total_price,
            r.payment_method
        );
    }

    println!("\n🎉 Example completed successfully!");

    Ok(())
}
