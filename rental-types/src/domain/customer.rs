//! Customer domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Store-assigned identifier for a Customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = i64, example = 1)]
pub struct CustomerId(i64);

impl CustomerId {
    /// Wraps an identity assigned by the store.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identity value.
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A customer as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Identity assigned by the store
    pub id: CustomerId,
    /// Customer name
    #[schema(example = "Alice")]
    pub name: String,
    /// Contact e-mail
    pub email: Option<String>,
    /// Contact phone number
    pub phone: Option<String>,
    /// When the customer was stored
    pub created_at: DateTime<Utc>,
}

impl Customer {
    /// Creates a customer with all fields specified (for database reconstruction).
    pub fn from_parts(
        id: CustomerId,
        name: String,
        email: Option<String>,
        phone: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            phone,
            created_at,
        }
    }
}
