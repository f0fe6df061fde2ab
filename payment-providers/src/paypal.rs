//! PayPal adapter.
//!
//! Redirect-style payment: an order is created with a capture intent and the
//! provider reports whether the capture went through.

use async_trait::async_trait;
use serde::Serialize;

use rental_types::{Money, PaymentError, PaymentProvider};

use crate::gateway::ChargeGateway;

#[derive(Debug, Serialize)]
struct PayPalAmount {
    currency_code: &'static str,
    /// Decimal string, e.g. `15.00`
    value: String,
}

/// Order request sent to PayPal.
#[derive(Debug, Serialize)]
struct PayPalOrder {
    intent: &'static str,
    amount: PayPalAmount,
}

impl PayPalOrder {
    fn capture(amount: Money) -> Self {
        Self {
            intent: "CAPTURE",
            amount: PayPalAmount {
                currency_code: "EUR",
                value: amount.to_string(),
            },
        }
    }
}

pub struct PayPalProvider {
    gateway: ChargeGateway,
}

impl PayPalProvider {
    pub const METHOD: &'static str = "PayPal";

    pub fn new(gateway: ChargeGateway) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl PaymentProvider for PayPalProvider {
    fn method(&self) -> &str {
        Self::METHOD
    }

    #[tracing::instrument(skip(self, amount), fields(amount = %amount))]
    async fn pay(&self, amount: Money) -> Result<bool, PaymentError> {
        let order = PayPalOrder::capture(amount);
        let approved = self.gateway.charge(&order).await?;
        tracing::debug!(approved, "PayPal capture answered");
        Ok(approved)
    }
}
