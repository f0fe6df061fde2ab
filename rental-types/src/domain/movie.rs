//! Movie domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Store-assigned identifier for a Movie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = i64, example = 1)]
pub struct MovieId(i64);

impl MovieId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A movie in the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: MovieId,
    #[schema(example = "The Matrix")]
    pub title: String,
    #[schema(example = "Science Fiction")]
    pub genre: Option<String>,
    #[schema(example = 1999)]
    pub release_year: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl Movie {
    /// Creates a movie with all fields specified (for database reconstruction).
    pub fn from_parts(
        id: MovieId,
        title: String,
        genre: Option<String>,
        release_year: Option<i32>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            genre,
            release_year,
            created_at,
        }
    }
}
