//! HTTP Server configuration and startup.

use std::any::Any;
use std::sync::Arc;

use axum::{
    Json, Router,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use utoipa::OpenApi;

use rental_types::{AppError, MovieRentalRepository};

use super::handlers::{self, ApiError, AppState};
use crate::openapi::ApiDoc;

/// HTTP Server for the Movie Rental API.
pub struct HttpServer<R: MovieRentalRepository> {
    state: Arc<AppState<R>>,
}

impl<R: MovieRentalRepository> HttpServer<R> {
    /// Creates a new HTTP server over the given services.
    pub fn new(state: AppState<R>) -> Self {
        Self {
            state: Arc::new(state),
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(handlers::health))
            .route("/api-docs/openapi.json", get(openapi_json))
            .route(
                "/customer",
                get(handlers::list_customers::<R>).post(handlers::create_customer::<R>),
            )
            .route(
                "/movie",
                get(handlers::list_movies::<R>).post(handlers::create_movie::<R>),
            )
            .route("/rental", axum::routing::post(handlers::create_rental::<R>))
            .route(
                "/rental/{customer_name}",
                get(handlers::list_rentals_for_customer::<R>),
            )
            .layer(CatchPanicLayer::custom(panic_response))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

/// Answers a panicking handler with the same body as any other fault.
fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError(AppError::Internal(format!("handler panicked: {}", detail))).into_response()
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
