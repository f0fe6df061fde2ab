//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{FromRequest, Path, Request, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use payment_providers::PaymentRegistry;
use rental_types::{
    AppError, CreateCustomerRequest, CreateMovieRequest, CreateRentalRequest, ErrorResponse,
    MovieRentalRepository,
};

use crate::{CustomerService, MovieService, RentalService};

/// Message returned for every unexpected fault.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred while processing your request.";

/// Message returned when a request body cannot be parsed.
pub const INVALID_BODY_MESSAGE: &str = "The request body is invalid.";

/// Application state shared across handlers.
pub struct AppState<R: MovieRentalRepository> {
    pub customers: CustomerService<R>,
    pub movies: MovieService<R>,
    pub rentals: RentalService<R>,
}

impl<R: MovieRentalRepository> AppState<R> {
    /// Builds the three feature services over one shared repository.
    pub fn new(repo: R, payments: PaymentRegistry) -> Self {
        let repo = Arc::new(repo);
        Self {
            customers: CustomerService::new(repo.clone()),
            movies: MovieService::new(repo.clone()),
            rentals: RentalService::new(repo, payments),
        }
    }
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
///
/// This is the only place errors become HTTP responses. Internal detail is
/// logged here and never sent to the client.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(AppError::InvalidRequest(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::PaymentDeclined => (StatusCode::BAD_REQUEST, self.0.to_string()),
            AppError::InvalidRequest(detail) => {
                tracing::warn!(error = %detail, "rejected request body");
                (StatusCode::BAD_REQUEST, INVALID_BODY_MESSAGE.to_string())
            }
            AppError::Internal(detail) => {
                tracing::error!(error = %detail, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GENERIC_ERROR_MESSAGE.to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { message })).into_response()
    }
}

/// JSON request body whose parse failures answer through [`ApiError`].
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(value))
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

// ─────────────────────────────────────────────────────────────────────────────
// Customers
// ─────────────────────────────────────────────────────────────────────────────

/// List all customers.
#[tracing::instrument(skip(state))]
pub async fn list_customers<R: MovieRentalRepository>(
    State(state): State<Arc<AppState<R>>>,
) -> Result<impl IntoResponse, ApiError> {
    let customers = state.customers.get_all().await?;
    Ok(Json(customers))
}

/// Store a customer.
#[tracing::instrument(skip(state, req))]
pub async fn create_customer<R: MovieRentalRepository>(
    State(state): State<Arc<AppState<R>>>,
    JsonBody(req): JsonBody<CreateCustomerRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let customer = state.customers.save(req).await?;
    Ok(Json(customer))
}

// ─────────────────────────────────────────────────────────────────────────────
// Movies
// ─────────────────────────────────────────────────────────────────────────────

/// List all movies.
#[tracing::instrument(skip(state))]
pub async fn list_movies<R: MovieRentalRepository>(
    State(state): State<Arc<AppState<R>>>,
) -> Result<impl IntoResponse, ApiError> {
    let movies = state.movies.get_all().await?;
    Ok(Json(movies))
}

/// Store a movie.
#[tracing::instrument(skip(state, req), fields(title = %req.title))]
pub async fn create_movie<R: MovieRentalRepository>(
    State(state): State<Arc<AppState<R>>>,
    JsonBody(req): JsonBody<CreateMovieRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let movie = state.movies.save(req).await?;
    Ok(Json(movie))
}

// ─────────────────────────────────────────────────────────────────────────────
// Rentals
// ─────────────────────────────────────────────────────────────────────────────

/// Rent a movie: charge first, record on success.
#[tracing::instrument(skip(state, req), fields(method = %req.payment_method, days = req.days_rented))]
pub async fn create_rental<R: MovieRentalRepository>(
    State(state): State<Arc<AppState<R>>>,
    JsonBody(req): JsonBody<CreateRentalRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let rental = state.rentals.rent(req).await?;
    Ok(Json(rental))
}

/// List rentals recorded under a customer name.
#[tracing::instrument(skip(state, customer_name))]
pub async fn list_rentals_for_customer<R: MovieRentalRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(customer_name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let rentals = state
        .rentals
        .get_rentals_by_customer_name(&customer_name)
        .await?;
    Ok(Json(rentals))
}
