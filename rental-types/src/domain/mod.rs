//! Domain models for the movie rental service.

pub mod customer;
pub mod money;
pub mod movie;
pub mod rental;

pub use customer::{Customer, CustomerId};
pub use money::{DAILY_RENTAL_RATE, Money, rental_price};
pub use movie::{Movie, MovieId};
pub use rental::{Rental, RentalId};
