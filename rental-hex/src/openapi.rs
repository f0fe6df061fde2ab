//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use rental_types::domain::{Customer, CustomerId, Money, Movie, MovieId, Rental, RentalId};
use rental_types::dto::{
    CreateCustomerRequest, CreateMovieRequest, CreateRentalRequest, ErrorResponse,
};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// List all customers
#[utoipa::path(
    get,
    path = "/customer",
    tag = "customers",
    responses(
        (status = 200, description = "All stored customers", body = Vec<Customer>),
        (status = 500, description = "Unexpected fault", body = ErrorResponse)
    )
)]
async fn list_customers() {}

/// Store a customer
#[utoipa::path(
    post,
    path = "/customer",
    tag = "customers",
    request_body = CreateCustomerRequest,
    responses(
        (status = 200, description = "Customer stored with its new identity", body = Customer),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 500, description = "Unexpected fault", body = ErrorResponse)
    )
)]
async fn create_customer() {}

/// List all movies
#[utoipa::path(
    get,
    path = "/movie",
    tag = "movies",
    responses(
        (status = 200, description = "All stored movies", body = Vec<Movie>),
        (status = 500, description = "Unexpected fault", body = ErrorResponse)
    )
)]
async fn list_movies() {}

/// Store a movie
#[utoipa::path(
    post,
    path = "/movie",
    tag = "movies",
    request_body = CreateMovieRequest,
    responses(
        (status = 200, description = "Movie stored with its new identity", body = Movie),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 500, description = "Unexpected fault", body = ErrorResponse)
    )
)]
async fn create_movie() {}

/// Rent a movie
///
/// Charges 5.00 per day with the selected payment method and records the
/// rental only if the charge succeeded.
#[utoipa::path(
    post,
    path = "/rental",
    tag = "rentals",
    request_body = CreateRentalRequest,
    responses(
        (status = 200, description = "Payment taken and rental recorded", body = Rental),
        (status = 400, description = "Payment declined, payment method unknown or malformed body", body = ErrorResponse,
            example = json!({"message": "Payment processing failed."})),
        (status = 500, description = "Unexpected fault", body = ErrorResponse)
    )
)]
async fn create_rental() {}

/// List rentals of a customer
#[utoipa::path(
    get,
    path = "/rental/{customer_name}",
    tag = "rentals",
    params(
        ("customer_name" = String, Path, description = "Customer name, matched exactly")
    ),
    responses(
        (status = 200, description = "Rentals recorded under that name", body = Vec<Rental>),
        (status = 500, description = "Unexpected fault", body = ErrorResponse)
    )
)]
async fn list_rentals_for_customer() {}

/// OpenAPI document for the Movie Rental API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Movie Rental API",
        version = "0.1.0",
        description = "Customers, movies and paid rentals"
    ),
    paths(
        health,
        list_customers,
        create_customer,
        list_movies,
        create_movie,
        create_rental,
        list_rentals_for_customer,
    ),
    components(schemas(
        Customer,
        CustomerId,
        Movie,
        MovieId,
        Rental,
        RentalId,
        Money,
        CreateCustomerRequest,
        CreateMovieRequest,
        CreateRentalRequest,
        ErrorResponse,
    )),
    tags(
        (name = "health", description = "Liveness"),
        (name = "customers", description = "Customer records"),
        (name = "movies", description = "Movie catalogue"),
        (name = "rentals", description = "Paid rentals"),
    )
)]
pub struct ApiDoc;
