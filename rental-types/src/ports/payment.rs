//! Payment provider port.
//!
//! One implementation per payment method. Implementations wrap a
//! network-bound charge against an external provider.

use crate::domain::Money;
use crate::error::PaymentError;

/// Port trait for payment providers.
#[async_trait::async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Name clients use to select this provider, e.g. `MbWay`.
    fn method(&self) -> &str;

    /// Attempts a single charge of `amount`.
    ///
    /// Returns `Ok(true)` when charged and `Ok(false)` when declined.
    /// No retry is attempted.
    async fn pay(&self, amount: Money) -> Result<bool, PaymentError>;
}
