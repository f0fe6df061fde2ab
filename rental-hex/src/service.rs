//! Feature Services
//!
//! One service per entity, orchestrating the repository and payment ports.
//! Contains NO infrastructure logic - pure business orchestration.

use std::sync::Arc;

use payment_providers::PaymentRegistry;
use rental_types::{
    AppError, CreateCustomerRequest, CreateMovieRequest, CreateRentalRequest, Customer,
    CustomerRepository, Money, Movie, MovieRepository, NewRental, Rental, RentalRepository,
    rental_price,
};

// ─────────────────────────────────────────────────────────────────────────────
// Customers
// ─────────────────────────────────────────────────────────────────────────────

/// Customer feature service.
pub struct CustomerService<R: CustomerRepository> {
    repo: Arc<R>,
}

impl<R: CustomerRepository> CustomerService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Stores a customer. Duplicates are allowed.
    pub async fn save(&self, req: CreateCustomerRequest) -> Result<Customer, AppError> {
        self.repo.save_customer(req).await.map_err(Into::into)
    }

    /// Lists all customers.
    pub async fn get_all(&self) -> Result<Vec<Customer>, AppError> {
        self.repo.list_customers().await.map_err(Into::into)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Movies
// ─────────────────────────────────────────────────────────────────────────────

/// Movie feature service.
pub struct MovieService<R: MovieRepository> {
    repo: Arc<R>,
}

impl<R: MovieRepository> MovieService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Stores a movie. Duplicates are allowed.
    pub async fn save(&self, req: CreateMovieRequest) -> Result<Movie, AppError> {
        self.repo.save_movie(req).await.map_err(Into::into)
    }

    /// Lists all movies.
    pub async fn get_all(&self) -> Result<Vec<Movie>, AppError> {
        self.repo.list_movies().await.map_err(Into::into)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Rentals
// ─────────────────────────────────────────────────────────────────────────────

/// Rental feature service.
///
/// Owns the charge-then-persist flow: a rental row is written only after the
/// selected payment provider confirmed the charge.
pub struct RentalService<R: RentalRepository> {
    repo: Arc<R>,
    payments: PaymentRegistry,
}

impl<R: RentalRepository> RentalService<R> {
    pub fn new(repo: Arc<R>, payments: PaymentRegistry) -> Self {
        Self { repo, payments }
    }

    /// Persists a rental. The caller must already have collected payment.
    pub async fn save(&self, rental: NewRental) -> Result<Rental, AppError> {
        self.repo.save_rental(rental).await.map_err(Into::into)
    }

    /// Rentals recorded under exactly `customer_name`.
    pub async fn get_rentals_by_customer_name(
        &self,
        customer_name: &str,
    ) -> Result<Vec<Rental>, AppError> {
        self.repo
            .find_rentals_by_customer_name(customer_name)
            .await
            .map_err(Into::into)
    }

    /// Charges `amount` with the provider registered for `method`.
    ///
    /// Unknown methods are declined (`Ok(false)`); provider faults are errors.
    pub async fn process_payment(&self, method: &str, amount: Money) -> Result<bool, AppError> {
        self.payments.pay(method, amount).await.map_err(Into::into)
    }

    /// Charges the rental price, then records the rental.
    ///
    /// Nothing is written when the charge is declined. If the write fails
    /// after a successful charge the charge stands; it is not refunded.
    #[tracing::instrument(
        skip(self, req),
        fields(method = %req.payment_method, days = req.days_rented)
    )]
    pub async fn rent(&self, req: CreateRentalRequest) -> Result<Rental, AppError> {
        let amount = rental_price(req.days_rented);

        if !self.process_payment(&req.payment_method, amount).await? {
            tracing::warn!(%amount, "payment declined");
            return Err(AppError::PaymentDeclined);
        }

        let method = req.payment_method.clone();
        match self.save(NewRental::paid(req, amount)).await {
            Ok(rental) => {
                tracing::info!(rental_id = %rental.id, %amount, "rental recorded");
                Ok(rental)
            }
            Err(e) => {
                tracing::error!(%amount, %method, error = %e, "charged but rental was not recorded");
                Err(e)
            }
        }
    }
}
