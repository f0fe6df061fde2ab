//! Feature service unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Arc;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, Ordering};

    use async_trait::async_trait;
    use chrono::Utc;

    use payment_providers::PaymentRegistry;
    use rental_types::{
        AppError, CreateCustomerRequest, CreateMovieRequest, CreateRentalRequest, Customer,
        CustomerId, CustomerRepository, Money, Movie, MovieId, MovieRepository, NewRental,
        PaymentError, PaymentProvider, Rental, RentalId, RentalRepository, RepoError,
    };

    use crate::{CustomerService, MovieService, RentalService};

    /// Simple in-memory repository for testing the service layer.
    #[derive(Default)]
    pub struct MockRepo {
        customers: Mutex<Vec<Customer>>,
        movies: Mutex<Vec<Movie>>,
        rentals: Mutex<Vec<Rental>>,
        failing: AtomicBool,
    }

    impl MockRepo {
        pub fn new() -> Self {
            Self::default()
        }

        /// Repository whose every call fails.
        pub fn failing() -> Self {
            let repo = Self::new();
            repo.set_failing(true);
            repo
        }

        /// Every call fails with a database error while set.
        pub fn set_failing(&self, failing: bool) {
            self.failing.store(failing, Ordering::SeqCst);
        }

        pub fn rental_count(&self) -> usize {
            self.rentals.lock().unwrap().len()
        }

        fn check(&self) -> Result<(), RepoError> {
            if self.failing.load(Ordering::SeqCst) {
                return Err(RepoError::Database("connection refused".to_string()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl CustomerRepository for MockRepo {
        async fn save_customer(&self, req: CreateCustomerRequest) -> Result<Customer, RepoError> {
            self.check()?;
            let mut customers = self.customers.lock().unwrap();
            let customer = Customer::from_parts(
                CustomerId::new(customers.len() as i64 + 1),
                req.name,
                req.email,
                req.phone,
                Utc::now(),
            );
            customers.push(customer.clone());
            Ok(customer)
        }

        async fn list_customers(&self) -> Result<Vec<Customer>, RepoError> {
            self.check()?;
            Ok(self.customers.lock().unwrap().clone())
        }
    }

    #[async_trait]
    impl MovieRepository for MockRepo {
        async fn save_movie(&self, req: CreateMovieRequest) -> Result<Movie, RepoError> {
            self.check()?;
            let mut movies = self.movies.lock().unwrap();
            let movie = Movie::from_parts(
                MovieId::new(movies.len() as i64 + 1),
                req.title,
                req.genre,
                req.release_year,
                Utc::now(),
            );
            movies.push(movie.clone());
            Ok(movie)
        }

        async fn list_movies(&self) -> Result<Vec<Movie>, RepoError> {
            self.check()?;
            Ok(self.movies.lock().unwrap().clone())
        }
    }

    #[async_trait]
    impl RentalRepository for MockRepo {
        async fn save_rental(&self, rental: NewRental) -> Result<Rental, RepoError> {
            self.check()?;
            let mut rentals = self.rentals.lock().unwrap();
            let saved = Rental::from_parts(
                RentalId::new(rentals.len() as i64 + 1),
                rental.customer_name,
                rental.movie_id,
                rental.payment_method,
                rental.days_rented,
                rental.total_price,
                Utc::now(),
            );
            rentals.push(saved.clone());
            Ok(saved)
        }

        async fn find_rentals_by_customer_name(
            &self,
            customer_name: &str,
        ) -> Result<Vec<Rental>, RepoError> {
            self.check()?;
            Ok(self
                .rentals
                .lock()
                .unwrap()
                .iter()
                .filter(|r| r.customer_name == customer_name)
                .cloned()
                .collect())
        }
    }

    /// How a [`RecordingProvider`] answers a charge.
    #[derive(Clone, Copy)]
    pub enum Outcome {
        Approve,
        Decline,
        Fault,
    }

    /// Payment provider that records every amount it was asked to charge.
    pub struct RecordingProvider {
        method: &'static str,
        outcome: Outcome,
        charges: Mutex<Vec<Money>>,
    }

    impl RecordingProvider {
        pub fn new(method: &'static str, outcome: Outcome) -> Arc<Self> {
            Arc::new(Self {
                method,
                outcome,
                charges: Mutex::new(Vec::new()),
            })
        }

        pub fn charges(&self) -> Vec<Money> {
            self.charges.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PaymentProvider for RecordingProvider {
        fn method(&self) -> &str {
            self.method
        }

        async fn pay(&self, amount: Money) -> Result<bool, PaymentError> {
            self.charges.lock().unwrap().push(amount);
            match self.outcome {
                Outcome::Approve => Ok(true),
                Outcome::Decline => Ok(false),
                Outcome::Fault => Err(PaymentError::Unavailable("gateway timeout".to_string())),
            }
        }
    }

    fn rental_request(customer: &str, method: &str, days: i32) -> CreateRentalRequest {
        CreateRentalRequest {
            customer_name: customer.to_string(),
            movie_id: None,
            payment_method: method.to_string(),
            days_rented: days,
        }
    }

    fn rental_service(
        outcome: Outcome,
    ) -> (RentalService<MockRepo>, Arc<MockRepo>, Arc<RecordingProvider>) {
        let repo = Arc::new(MockRepo::new());
        let provider = RecordingProvider::new("MbWay", outcome);
        let payments = PaymentRegistry::new().register(provider.clone());
        (RentalService::new(repo.clone(), payments), repo, provider)
    }

    #[tokio::test]
    async fn test_rent_charges_daily_rate_and_records_rental() {
        let (service, repo, provider) = rental_service(Outcome::Approve);

        let rental = service
            .rent(rental_request("Alice", "MbWay", 3))
            .await
            .unwrap();

        assert_eq!(provider.charges(), vec![Money::from_minor(1500)]);
        assert_eq!(rental.customer_name, "Alice");
        assert_eq!(rental.payment_method, "MbWay");
        assert_eq!(rental.days_rented, 3);
        assert_eq!(rental.total_price, Money::from_minor(1500));
        assert_eq!(repo.rental_count(), 1);
    }

    #[tokio::test]
    async fn test_rent_with_unknown_method_is_declined() {
        let (service, repo, provider) = rental_service(Outcome::Approve);

        let result = service.rent(rental_request("Alice", "Bitcoin", 2)).await;

        assert!(matches!(result, Err(AppError::PaymentDeclined)));
        assert!(provider.charges().is_empty());
        assert_eq!(repo.rental_count(), 0);
    }

    #[tokio::test]
    async fn test_method_lookup_is_case_sensitive() {
        let (service, repo, provider) = rental_service(Outcome::Approve);

        let result = service.rent(rental_request("Alice", "mbway", 2)).await;

        assert!(matches!(result, Err(AppError::PaymentDeclined)));
        assert!(provider.charges().is_empty());
        assert_eq!(repo.rental_count(), 0);
    }

    #[tokio::test]
    async fn test_declined_charge_records_nothing() {
        let (service, repo, provider) = rental_service(Outcome::Decline);

        let result = service.rent(rental_request("Alice", "MbWay", 2)).await;

        assert!(matches!(result, Err(AppError::PaymentDeclined)));
        assert_eq!(provider.charges().len(), 1);
        assert_eq!(repo.rental_count(), 0);
    }

    #[tokio::test]
    async fn test_provider_fault_is_internal_and_records_nothing() {
        let (service, repo, _provider) = rental_service(Outcome::Fault);

        let result = service.rent(rental_request("Alice", "MbWay", 2)).await;

        assert!(matches!(result, Err(AppError::Internal(_))));
        assert_eq!(repo.rental_count(), 0);
    }

    #[tokio::test]
    async fn test_store_fault_after_charge_is_internal() {
        let (service, repo, provider) = rental_service(Outcome::Approve);
        repo.set_failing(true);

        let result = service.rent(rental_request("Alice", "MbWay", 4)).await;

        assert!(matches!(result, Err(AppError::Internal(_))));
        assert_eq!(provider.charges(), vec![Money::from_minor(2000)]);
        repo.set_failing(false);
        assert_eq!(repo.rental_count(), 0);
    }

    #[tokio::test]
    async fn test_zero_days_charges_nothing_but_still_records() {
        let (service, repo, provider) = rental_service(Outcome::Approve);

        let rental = service
            .rent(rental_request("Alice", "MbWay", 0))
            .await
            .unwrap();

        assert_eq!(provider.charges(), vec![Money::zero()]);
        assert_eq!(rental.total_price, Money::zero());
        assert_eq!(repo.rental_count(), 1);
    }

    #[tokio::test]
    async fn test_rentals_recorded_match_successful_payments() {
        let repo = Arc::new(MockRepo::new());
        let mbway = RecordingProvider::new("MbWay", Outcome::Approve);
        let paypal = RecordingProvider::new("PayPal", Outcome::Decline);
        let payments = PaymentRegistry::new()
            .register(mbway.clone())
            .register(paypal.clone());
        let service = RentalService::new(repo.clone(), payments);

        let _ = service.rent(rental_request("Alice", "MbWay", 1)).await;
        let _ = service.rent(rental_request("Alice", "PayPal", 1)).await;
        let _ = service.rent(rental_request("Bob", "MbWay", 2)).await;
        let _ = service.rent(rental_request("Bob", "Cash", 2)).await;

        assert_eq!(mbway.charges().len(), 2);
        assert_eq!(paypal.charges().len(), 1);
        assert_eq!(repo.rental_count(), 2);
    }

    #[tokio::test]
    async fn test_process_payment_reports_outcome() {
        let (service, _repo, _provider) = rental_service(Outcome::Approve);

        assert!(
            service
                .process_payment("MbWay", Money::from_minor(500))
                .await
                .unwrap()
        );
        assert!(
            !service
                .process_payment("PayPal", Money::from_minor(500))
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_rentals_by_customer_name() {
        let (service, _repo, _provider) = rental_service(Outcome::Approve);

        service
            .rent(rental_request("Alice", "MbWay", 1))
            .await
            .unwrap();
        service
            .rent(rental_request("Bob", "MbWay", 2))
            .await
            .unwrap();
        service
            .rent(rental_request("Alice", "MbWay", 3))
            .await
            .unwrap();

        let alice = service.get_rentals_by_customer_name("Alice").await.unwrap();
        let nobody = service.get_rentals_by_customer_name("alice").await.unwrap();

        assert_eq!(alice.len(), 2);
        assert!(alice.iter().all(|r| r.customer_name == "Alice"));
        assert!(nobody.is_empty());
    }

    #[tokio::test]
    async fn test_save_persists_without_charging() {
        let (service, repo, provider) = rental_service(Outcome::Approve);

        let rental = service
            .save(NewRental::paid(
                rental_request("Carol", "PayPal", 2),
                Money::from_minor(1000),
            ))
            .await
            .unwrap();

        assert_eq!(rental.customer_name, "Carol");
        assert!(provider.charges().is_empty());
        assert_eq!(repo.rental_count(), 1);
    }

    #[tokio::test]
    async fn test_customers_allow_duplicates() {
        let service = CustomerService::new(Arc::new(MockRepo::new()));
        let req = CreateCustomerRequest {
            name: "Alice".to_string(),
            email: None,
            phone: None,
        };

        let first = service.save(req.clone()).await.unwrap();
        let second = service.save(req).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(service.get_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_customer_store_fault_is_internal() {
        let repo = Arc::new(MockRepo::new());
        repo.set_failing(true);
        let service = CustomerService::new(repo);

        let result = service.get_all().await;

        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[tokio::test]
    async fn test_movies_save_and_list() {
        let service = MovieService::new(Arc::new(MockRepo::new()));

        let movie = service
            .save(CreateMovieRequest {
                title: "Alien".to_string(),
                genre: Some("Horror".to_string()),
                release_year: Some(1979),
            })
            .await
            .unwrap();

        assert_eq!(movie.title, "Alien");
        assert_eq!(service.get_all().await.unwrap(), vec![movie]);
    }
}
