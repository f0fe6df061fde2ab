//! Rental domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::money::Money;
use super::movie::MovieId;

/// Store-assigned identifier for a Rental.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = i64, example = 1)]
pub struct RentalId(i64);

impl RentalId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for RentalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A paid rental.
///
/// Rentals are immutable once created. A rental only exists after its
/// payment was confirmed, so there is no pending or failed state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Rental {
    /// Identity assigned by the store
    pub id: RentalId,
    /// Name of the renting customer, matched verbatim on lookup
    #[schema(example = "Alice")]
    pub customer_name: String,
    /// Rented movie, if the client supplied one
    pub movie_id: Option<MovieId>,
    /// Payment method the rental was charged with
    #[schema(example = "MbWay")]
    pub payment_method: String,
    /// Number of days rented
    #[schema(example = 3)]
    pub days_rented: i32,
    /// Amount charged in cents
    pub total_price: Money,
    /// When the rental was recorded
    pub created_at: DateTime<Utc>,
}

impl Rental {
    /// Reconstructs a rental from database fields.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: RentalId,
        customer_name: String,
        movie_id: Option<MovieId>,
        payment_method: String,
        days_rented: i32,
        total_price: Money,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            customer_name,
            movie_id,
            payment_method,
            days_rented,
            total_price,
            created_at,
        }
    }
}
