//! # Movie Rental Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the repository adapter
//! - Register the payment providers
//! - Start the HTTP server

mod config;

use opentelemetry::global;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{propagation::TraceContextPropagator, trace as sdktrace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use payment_providers::{ChargeGateway, PaymentRegistry};
use rental_hex::{AppState, HttpServer};
use rental_repo::{build_repo, redact};

fn init_tracer(
    endpoint: &str,
) -> anyhow::Result<(sdktrace::Tracer, sdktrace::SdkTracerProvider)> {
    global::set_text_map_propagator(TraceContextPropagator::new());

    // Use gRPC exporter with batch processing (non-blocking)
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()?;

    let provider = sdktrace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .build();

    global::set_tracer_provider(provider.clone());

    use opentelemetry::trace::TracerProvider as _;
    Ok((provider.tracer("movie-rental-service"), provider))
}

fn gateway(endpoint: Option<String>) -> ChargeGateway {
    endpoint
        .map(ChargeGateway::http)
        .unwrap_or_else(ChargeGateway::simulated)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = config::Config::from_env()?;

    // OpenTelemetry export only when a collector is configured
    let otel = config
        .otlp_endpoint
        .as_deref()
        .map(init_tracer)
        .transpose()?;
    let (telemetry, otel_provider) = match otel {
        Some((tracer, provider)) => (
            Some(tracing_opentelemetry::layer().with_tracer(tracer)),
            Some(provider),
        ),
        None => (None, None),
    };

    let (json_logs, pretty_logs) = if config.log_json {
        (Some(tracing_subscriber::fmt::layer().json()), None)
    } else {
        (None, Some(tracing_subscriber::fmt::layer()))
    };

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,rental_app=debug,rental_hex=debug".into()),
        )
        .with(json_logs)
        .with(pretty_logs)
        .with(telemetry)
        .init();

    tracing::info!("Starting movie rental server on port {}", config.port);
    tracing::info!("Using database: {}", redact(&config.database_url));

    // Build repository (handles connection and migration)
    let repo = build_repo(&config.database_url).await?;
    tracing::info!(backend = repo.backend(), "repository ready");

    let mbway_simulated = config.mbway_endpoint.is_none();
    let paypal_simulated = config.paypal_endpoint.is_none();
    let payments = PaymentRegistry::with_defaults(
        gateway(config.mbway_endpoint),
        gateway(config.paypal_endpoint),
    );
    tracing::info!(
        methods = ?payments.methods(),
        mbway_simulated,
        paypal_simulated,
        "payment providers registered"
    );

    // Create and run the HTTP server
    let server = HttpServer::new(AppState::new(repo, payments));
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    // Ensure traces are flushed before exit
    if let Some(provider) = otel_provider {
        let _ = provider.shutdown();
    }
    Ok(())
}
