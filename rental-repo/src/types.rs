//! Database row types shared by the SQLite and PostgreSQL adapters.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use rental_types::{Customer, CustomerId, Money, Movie, MovieId, Rental, RentalId};

// ─────────────────────────────────────────────────────────────────────────────
// Database row structs (derive FromRow for automatic mapping)
// ─────────────────────────────────────────────────────────────────────────────

/// Customer row from database.
#[derive(FromRow)]
pub struct DbCustomer {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Movie row from database.
#[derive(FromRow)]
pub struct DbMovie {
    pub id: i64,
    pub title: String,
    pub genre: Option<String>,
    pub release_year: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Rental row from database.
#[derive(FromRow)]
pub struct DbRental {
    pub id: i64,
    pub customer_name: String,
    pub movie_id: Option<i64>,
    pub payment_method: String,
    pub days_rented: i32,
    /// Cents
    pub total_price: i64,
    pub created_at: DateTime<Utc>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Domain conversion
// ─────────────────────────────────────────────────────────────────────────────

impl DbCustomer {
    pub fn into_domain(self) -> Customer {
        Customer::from_parts(
            CustomerId::new(self.id),
            self.name,
            self.email,
            self.phone,
            self.created_at,
        )
    }
}

impl DbMovie {
    pub fn into_domain(self) -> Movie {
        Movie::from_parts(
            MovieId::new(self.id),
            self.title,
            self.genre,
            self.release_year,
            self.created_at,
        )
    }
}

impl DbRental {
    pub fn into_domain(self) -> Rental {
        Rental::from_parts(
            RentalId::new(self.id),
            self.customer_name,
            self.movie_id.map(MovieId::new),
            self.payment_method,
            self.days_rented,
            Money::from_minor(self.total_price),
            self.created_at,
        )
    }
}

/// Splits a migration file into individual statements.
pub fn migration_statements(sql: &str) -> impl Iterator<Item = &str> {
    sql.split(';').map(str::trim).filter(|s| !s.is_empty())
}
