//! Payment method registry.

use std::collections::HashMap;
use std::sync::Arc;

use rental_types::{Money, PaymentError, PaymentProvider};

use crate::gateway::ChargeGateway;
use crate::mbway::MbWayProvider;
use crate::paypal::PayPalProvider;

/// Maps payment method names to providers.
///
/// Lookup is exact and case-sensitive. A method with no registered provider
/// is a declined payment, not an error.
#[derive(Clone, Default)]
pub struct PaymentRegistry {
    providers: HashMap<String, Arc<dyn PaymentProvider>>,
}

impl PaymentRegistry {
    /// Creates an empty registry; every method is declined.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the `MbWay` and `PayPal` providers.
    pub fn with_defaults(mbway: ChargeGateway, paypal: ChargeGateway) -> Self {
        Self::new()
            .register(Arc::new(MbWayProvider::new(mbway)))
            .register(Arc::new(PayPalProvider::new(paypal)))
    }

    /// Adds a provider under its own method name, replacing any previous one.
    pub fn register(mut self, provider: Arc<dyn PaymentProvider>) -> Self {
        self.providers
            .insert(provider.method().to_string(), provider);
        self
    }

    /// Registered method names, sorted.
    pub fn methods(&self) -> Vec<&str> {
        let mut methods: Vec<&str> = self.providers.keys().map(String::as_str).collect();
        methods.sort_unstable();
        methods
    }

    /// Charges `amount` with the provider registered for `method`.
    pub async fn pay(&self, method: &str, amount: Money) -> Result<bool, PaymentError> {
        match self.providers.get(method) {
            Some(provider) => provider.pay(amount).await,
            None => {
                tracing::warn!(method, "unrecognized payment method, declining");
                Ok(false)
            }
        }
    }
}
