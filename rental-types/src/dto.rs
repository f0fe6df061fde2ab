//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Money, MovieId};

// ─────────────────────────────────────────────────────────────────────────────
// Customer DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to store a new customer.
///
/// Any `id` present in the body is ignored; the store assigns the identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    #[schema(example = "Alice")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "alice@example.com")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "+351912345678")]
    pub phone: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Movie DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to store a new movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovieRequest {
    #[schema(example = "The Matrix")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Science Fiction")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 1999)]
    pub release_year: Option<i32>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Rental DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to rent a movie. The rental is only recorded once the selected
/// payment method charged the rental price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRentalRequest {
    /// Name of the renting customer
    #[schema(example = "Alice")]
    pub customer_name: String,
    /// Rented movie
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movie_id: Option<MovieId>,
    /// Payment method name, e.g. `MbWay` or `PayPal`
    #[schema(example = "MbWay")]
    pub payment_method: String,
    /// Number of days to rent for
    #[schema(example = 3)]
    pub days_rented: i32,
}

/// A rental ready to be persisted: payment has already been confirmed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRental {
    pub customer_name: String,
    pub movie_id: Option<MovieId>,
    pub payment_method: String,
    pub days_rented: i32,
    pub total_price: Money,
}

impl NewRental {
    /// Builds the record to persist for a paid rental request.
    pub fn paid(req: CreateRentalRequest, total_price: Money) -> Self {
        Self {
            customer_name: req.customer_name,
            movie_id: req.movie_id,
            payment_method: req.payment_method,
            days_rented: req.days_rented,
            total_price,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Error DTO
// ─────────────────────────────────────────────────────────────────────────────

/// Body of every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Payment processing failed.")]
    pub message: String,
}
