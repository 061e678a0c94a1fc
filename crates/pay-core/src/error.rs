//! # Payment Error Types
//!
//! Typed error handling for payment strategies.
//! Every strategy operation returns `Result<T, PaymentError>`.

use std::fmt;
use thiserror::Error;

/// Which piece of checkout data was missing when it was needed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingDataKind {
    /// Payment method (or its client token) not loaded
    PaymentMethod,
    /// Store configuration not loaded
    CheckoutConfig,
    /// Checkout not loaded, or no consignment with a selected shipping option
    Checkout,
    /// Cart not loaded
    Cart,
    /// Billing address not set
    BillingAddress,
    /// Shipping address not set
    ShippingAddress,
}

impl MissingDataKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MissingDataKind::PaymentMethod => "payment method",
            MissingDataKind::CheckoutConfig => "checkout config",
            MissingDataKind::Checkout => "checkout",
            MissingDataKind::Cart => "cart",
            MissingDataKind::BillingAddress => "billing address",
            MissingDataKind::ShippingAddress => "shipping address",
        }
    }
}

impl fmt::Display for MissingDataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Core error type for all payment strategy operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaymentError {
    /// Required checkout data is not available in the host state
    #[error("Missing data: {0}")]
    MissingData(MissingDataKind),

    /// The provider script could not be loaded
    #[error("Script load failed: {0}")]
    ScriptLoad(String),

    /// The strategy was used before it was initialized
    #[error("Payment strategy has not been initialized")]
    NotInitialized,

    /// The order payload is missing required payment fields
    #[error("Invalid payment argument: {}", .fields.join(", "))]
    PaymentArgumentInvalid { fields: Vec<String> },

    /// The shopper cancelled or closed the provider checkout
    #[error("Payment method cancelled by the shopper")]
    PaymentMethodCancelled,

    /// The payment method has no separate finalization step
    #[error("Order finalization is not required for this payment method")]
    OrderFinalizationNotRequired,

    /// Error raised by the host checkout framework
    #[error("Host error: {0}")]
    Host(String),

    /// Configuration errors (invalid provider config)
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl PaymentError {
    /// Shorthand for a missing-data error
    pub fn missing(kind: MissingDataKind) -> Self {
        PaymentError::MissingData(kind)
    }

    /// Shorthand for an invalid-argument error naming the missing fields
    pub fn invalid_argument<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PaymentError::PaymentArgumentInvalid {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if the host should skip the step rather than fail the checkout
    pub fn is_skip_signal(&self) -> bool {
        matches!(self, PaymentError::OrderFinalizationNotRequired)
    }

    /// Returns true if the shopper backed out of the provider checkout
    pub fn is_cancellation(&self) -> bool {
        matches!(self, PaymentError::PaymentMethodCancelled)
    }
}

/// Result type alias for payment operations
pub type PaymentResult<T> = Result<T, PaymentError>;
