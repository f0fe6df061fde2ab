//! Transport shared by the payment adapters.

use reqwest::StatusCode;
use serde::Serialize;

use rental_types::PaymentError;

/// Where a provider sends its charge requests.
#[derive(Debug, Clone)]
pub enum ChargeGateway {
    /// No network call; every charge gets the configured answer.
    Simulated { approve: bool },
    /// One JSON `POST` per charge to `endpoint`.
    Http {
        client: reqwest::Client,
        endpoint: String,
    },
}

impl ChargeGateway {
    /// A gateway that approves every charge.
    pub fn simulated() -> Self {
        ChargeGateway::Simulated { approve: true }
    }

    /// A gateway that declines every charge.
    pub fn declining() -> Self {
        ChargeGateway::Simulated { approve: false }
    }

    /// A gateway posting to a real provider endpoint.
    pub fn http(endpoint: impl Into<String>) -> Self {
        ChargeGateway::Http {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Submits a single charge. No retry and no timeout.
    pub async fn charge<B: Serialize + ?Sized>(&self, body: &B) -> Result<bool, PaymentError> {
        match self {
            ChargeGateway::Simulated { approve } => Ok(*approve),
            ChargeGateway::Http { client, endpoint } => {
                let resp = client
                    .post(endpoint)
                    .json(body)
                    .send()
                    .await
                    .map_err(|e| PaymentError::Unavailable(e.to_string()))?;

                classify(resp.status())
            }
        }
    }
}

/// 2xx charged, 4xx declined, anything else is a provider fault.
fn classify(status: StatusCode) -> Result<bool, PaymentError> {
    if status.is_success() {
        Ok(true)
    } else if status.is_client_error() {
        Ok(false)
    } else {
        Err(PaymentError::Provider(format!("HTTP {}", status)))
    }
}
