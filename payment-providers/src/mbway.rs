//! MB WAY adapter.
//!
//! Wallet-style payment: the customer approves the charge on their phone, the
//! provider answers once the wallet accepted or rejected it.

use async_trait::async_trait;
use serde::Serialize;

use rental_types::{Money, PaymentError, PaymentProvider};

use crate::gateway::ChargeGateway;

/// Charge request sent to MB WAY.
#[derive(Debug, Serialize)]
struct MbWayCharge {
    /// Amount in cents
    amount: i64,
    channel: &'static str,
}

pub struct MbWayProvider {
    gateway: ChargeGateway,
}

impl MbWayProvider {
    /// Method name clients select this provider with.
    pub const METHOD: &'static str = "MbWay";

    pub fn new(gateway: ChargeGateway) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl PaymentProvider for MbWayProvider {
    fn method(&self) -> &str {
        Self::METHOD
    }

    #[tracing::instrument(skip(self, amount), fields(amount = %amount))]
    async fn pay(&self, amount: Money) -> Result<bool, PaymentError> {
        let charge = MbWayCharge {
            amount: amount.minor_units(),
            channel: "mbway",
        };
        let approved = self.gateway.charge(&charge).await?;
        tracing::debug!(approved, "MB WAY charge answered");
        Ok(approved)
    }
}
