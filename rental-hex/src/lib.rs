//! # Rental Hex
//!
//! Feature services and HTTP adapter for the movie rental service.
//!
//! ## Architecture
//!
//! - `service` - One feature service per entity (customers, movies, rentals)
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! Services are generic over the repository ports, allowing
//! different repository implementations to be injected.

pub mod inbound;
pub mod openapi;
pub mod service;

#[cfg(test)]
mod service_tests;


pub use inbound::{AppState, HttpServer};
pub use service::{CustomerService, MovieService, RentalService};
