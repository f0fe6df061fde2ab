//! # Payment Providers
//!
//! Adapters implementing the `PaymentProvider` port for each supported
//! payment method, plus the registry that selects one by name.
//!
//! ```ignore
//! use payment_providers::{ChargeGateway, PaymentRegistry};
//!
//! let registry = PaymentRegistry::with_defaults(
//!     ChargeGateway::http("https://mbway.example/charges"),
//!     ChargeGateway::simulated(),
//! );
//! let charged = registry.pay("MbWay", amount).await?;
//! ```

mod gateway;
mod mbway;
mod paypal;
mod registry;

pub use gateway::ChargeGateway;
pub use mbway::MbWayProvider;
pub use paypal::PayPalProvider;
pub use registry::PaymentRegistry;
