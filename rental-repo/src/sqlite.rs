//! SQLite repository adapter.
#![allow(clippy::collapsible_if)]

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

use rental_types::{
    CreateCustomerRequest, CreateMovieRequest, Customer, CustomerRepository, Movie,
    MovieRepository, NewRental, Rental, RentalRepository, RepoError,
};

use crate::types::{DbCustomer, DbMovie, DbRental, migration_statements};

// ─────────────────────────────────────────────────────────────────────────────
// SQLite Repository
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite repository implementation.
pub struct SqliteRepo {
    pool: SqlitePool,
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

impl SqliteRepo {
    /// Creates a new SQLite repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            // Remove query parameters
            let path = path.split('?').next().unwrap_or(path);
            if !is_in_memory(database_url) {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        // Every connection to an in-memory database opens its own empty
        // database, so the pool is pinned to one long-lived connection.
        let pool = if is_in_memory(database_url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            SqlitePool::connect_with(options).await?
        };

        let repo = Self { pool };
        repo.create_schema().await?;
        Ok(repo)
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Creates the database schema (idempotent).
    pub async fn create_schema(&self) -> Result<(), RepoError> {
        for statement in migration_statements(include_str!("../migrations/0001_create_tables.sql"))
        {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| RepoError::Database(e.to_string()))?;
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl CustomerRepository for SqliteRepo {
    async fn save_customer(&self, req: CreateCustomerRequest) -> Result<Customer, RepoError> {
        let row: DbCustomer = sqlx::query_as(
            r#"INSERT INTO customers (name, email, phone, created_at) VALUES (?, ?, ?, ?)
               RETURNING id, name, email, phone, created_at"#,
        )
        .bind(&req.name)
        .bind(&req.email)
        .bind(&req.phone)
        .bind(chrono::Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(row.into_domain())
    }

    async fn list_customers(&self) -> Result<Vec<Customer>, RepoError> {
        let rows: Vec<DbCustomer> = sqlx::query_as(
            r#"SELECT id, name, email, phone, created_at FROM customers ORDER BY id ASC"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(DbCustomer::into_domain).collect())
    }
}

#[async_trait]
impl MovieRepository for SqliteRepo {
    async fn save_movie(&self, req: CreateMovieRequest) -> Result<Movie, RepoError> {
        let row: DbMovie = sqlx::query_as(
            r#"INSERT INTO movies (title, genre, release_year, created_at) VALUES (?, ?, ?, ?)
               RETURNING id, title, genre, release_year, created_at"#,
        )
        .bind(&req.title)
        .bind(&req.genre)
        .bind(req.release_year)
        .bind(chrono::Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(row.into_domain())
    }

    async fn list_movies(&self) -> Result<Vec<Movie>, RepoError> {
        let rows: Vec<DbMovie> = sqlx::query_as(
            r#"SELECT id, title, genre, release_year, created_at FROM movies ORDER BY id ASC"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(DbMovie::into_domain).collect())
    }
}

#[async_trait]
impl RentalRepository for SqliteRepo {
    async fn save_rental(&self, rental: NewRental) -> Result<Rental, RepoError> {
        let row: DbRental = sqlx::query_as(
            r#"INSERT INTO rentals (customer_name, movie_id, payment_method, days_rented, total_price, created_at)
               VALUES (?, ?, ?, ?, ?, ?)
               RETURNING id, customer_name, movie_id, payment_method, days_rented, total_price, created_at"#,
        )
        .bind(&rental.customer_name)
        .bind(rental.movie_id.map(|id| id.get()))
        .bind(&rental.payment_method)
        .bind(rental.days_rented)
        .bind(rental.total_price.minor_units())
        .bind(chrono::Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(row.into_domain())
    }

    async fn find_rentals_by_customer_name(
        &self,
        customer_name: &str,
    ) -> Result<Vec<Rental>, RepoError> {
        // `=` on TEXT uses the BINARY collation: exact, case-sensitive.
        let rows: Vec<DbRental> = sqlx::query_as(
            r#"SELECT id, customer_name, movie_id, payment_method, days_rented, total_price, created_at
               FROM rentals WHERE customer_name = ?
               ORDER BY id ASC"#,
        )
        .bind(customer_name)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(DbRental::into_domain).collect())
    }
}
