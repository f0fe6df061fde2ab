//! PostgreSQL repository adapter.

use async_trait::async_trait;
use sqlx::PgPool;

use rental_types::{
    CreateCustomerRequest, CreateMovieRequest, Customer, CustomerRepository, Movie,
    MovieRepository, NewRental, Rental, RentalRepository, RepoError,
};

use crate::types::{DbCustomer, DbMovie, DbRental, migration_statements};

// ─────────────────────────────────────────────────────────────────────────────
// PostgreSQL Repository
// ─────────────────────────────────────────────────────────────────────────────

/// PostgreSQL repository implementation.
pub struct PostgresRepo {
    pool: PgPool,
}

/// Executes SQL statements from a migration file, one statement at a time.
async fn execute_migration(pool: &PgPool, sql: &str, name: &str) -> Result<(), anyhow::Error> {
    for stmt in migration_statements(sql) {
        sqlx::query(stmt)
            .execute(pool)
            .await
            .map_err(|e| anyhow::anyhow!("Migration {} failed: {}", name, e))?;
    }
    Ok(())
}

/// Runs all database migrations.
async fn run_migrations(pool: &PgPool) -> Result<(), anyhow::Error> {
    execute_migration(
        pool,
        include_str!("../migrations/0001_create_tables_pg.sql"),
        "0001",
    )
    .await
}

impl PostgresRepo {
    /// Creates a new PostgreSQL repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Creates the database schema (for testing with existing pool).
    pub async fn create_schema(&self) -> Result<(), RepoError> {
        run_migrations(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl CustomerRepository for PostgresRepo {
    async fn save_customer(&self, req: CreateCustomerRequest) -> Result<Customer, RepoError> {
        let row: DbCustomer = sqlx::query_as(
            r#"INSERT INTO customers (name, email, phone) VALUES ($1, $2, $3)
               RETURNING id, name, email, phone, created_at"#,
        )
        .bind(&req.name)
        .bind(&req.email)
        .bind(&req.phone)
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
impl MovieRepository for PostgresRepo {
    async fn save_movie(&self, req: CreateMovieRequest) -> Result<Movie, RepoError> {
        let row: DbMovie = sqlx::query_as(
            r#"INSERT INTO movies (title, genre, release_year) VALUES ($1, $2, $3)
               RETURNING id, title, genre, release_year, created_at"#,
        )
        .bind(&req.title)
        .bind(&req.genre)
        .bind(req.release_year)
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
impl RentalRepository for PostgresRepo {
    async fn save_rental(&self, rental: NewRental) -> Result<Rental, RepoError> {
        let row: DbRental = sqlx::query_as(
            r#"INSERT INTO rentals (customer_name, movie_id, payment_method, days_rented, total_price)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING id, customer_name, movie_id, payment_method, days_rented, total_price, created_at"#,
        )
        .bind(&rental.customer_name)
        .bind(rental.movie_id.map(|id| id.get()))
        .bind(&rental.payment_method)
        .bind(rental.days_rented)
        .bind(rental.total_price.minor_units())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(row.into_domain())
    }

    async fn find_rentals_by_customer_name(
        &self,
        customer_name: &str,
    ) -> Result<Vec<Rental>, RepoError> {
        let rows: Vec<DbRental> = sqlx::query_as(
            r#"SELECT id, customer_name, movie_id, payment_method, days_rented, total_price, created_at
               FROM rentals WHERE customer_name = $1
               ORDER BY id ASC"#,
        )
        .bind(customer_name)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(DbRental::into_domain).collect())
    }
}
