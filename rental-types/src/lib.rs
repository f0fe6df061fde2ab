//! # Rental Types
//!
//! Domain types and port traits for the movie rental service.
//! This crate has ZERO external IO dependencies - only data structures,
//! pricing rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Customer, Movie, Rental, Money)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Repository, payment and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Customer, CustomerId, DAILY_RENTAL_RATE, Movie, MovieId, Money, Rental, RentalId,
    rental_price,
};
pub use dto::*;
pub use error::{AppError, PaymentError, RepoError};
pub use ports::{
    CustomerRepository, MovieRentalRepository, MovieRepository, PaymentProvider,
    RentalRepository,
};
