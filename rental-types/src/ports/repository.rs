//! Repository port traits.
//!
//! The persistence ports of the hexagonal architecture.
//! Adapters (Postgres, SQLite) implement all three.

use crate::domain::{Customer, Movie, Rental};
use crate::dto::{CreateCustomerRequest, CreateMovieRequest, NewRental};
use crate::error::RepoError;

/// Storage for customers.
#[async_trait::async_trait]
pub trait CustomerRepository: Send + Sync + 'static {
    /// Persists a customer and returns it with its assigned identity.
    async fn save_customer(&self, req: CreateCustomerRequest) -> Result<Customer, RepoError>;

    /// Lists every stored customer, oldest first.
    async fn list_customers(&self) -> Result<Vec<Customer>, RepoError>;
}

/// Storage for movies.
#[async_trait::async_trait]
pub trait MovieRepository: Send + Sync + 'static {
    /// Persists a movie and returns it with its assigned identity.
    async fn save_movie(&self, req: CreateMovieRequest) -> Result<Movie, RepoError>;

    /// Lists every stored movie, oldest first.
    async fn list_movies(&self) -> Result<Vec<Movie>, RepoError>;
}

/// Storage for paid rentals.
#[async_trait::async_trait]
pub trait RentalRepository: Send + Sync + 'static {
    /// Persists a rental whose payment was already confirmed.
    async fn save_rental(&self, rental: NewRental) -> Result<Rental, RepoError>;

    /// Lists rentals whose customer name equals `customer_name` exactly.
    async fn find_rentals_by_customer_name(
        &self,
        customer_name: &str,
    ) -> Result<Vec<Rental>, RepoError>;
}

/// Everything the service needs from a single backing store.
pub trait MovieRentalRepository: CustomerRepository + MovieRepository + RentalRepository {}

impl<T> MovieRentalRepository for T where T: CustomerRepository + MovieRepository + RentalRepository {}
