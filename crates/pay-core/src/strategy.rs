//! # Payment Strategy Trait
//!
//! Core Strategy pattern trait for payment methods.
//! Implementations: Affirm, and whatever else the host registers.
//!
//! ## Lifecycle
//!
//! ```text
//! Uninitialized ──initialize──▶ Initialized ──execute──▶ Initialized
//!                                    │                         │
//!                                    └──────deinitialize───────┴──▶ Deinitialized
//! ```
//!
//! `initialize` and `deinitialize` may be called again at any point.
//! `finalize` is only meaningful for methods with a deferred capture step.

use crate::checkout::CheckoutState;
use crate::error::PaymentResult;
use crate::order::{OrderRequestBody, PaymentInitializeOptions, PaymentRequestOptions};
use async_trait::async_trait;
use std::collections::HashMap;

/// Core trait for payment method implementations.
///
/// Every operation resolves with the host checkout state after it completes.
/// Receivers are `&mut self` since strategies own per-checkout state.
#[async_trait]
pub trait PaymentStrategy: Send + Sync {
    /// Prepare the payment method (load scripts, fetch keys).
    async fn initialize(
        &mut self,
        options: &PaymentInitializeOptions,
    ) -> PaymentResult<CheckoutState>;

    /// Place the order and collect payment.
    async fn execute(
        &mut self,
        payload: &OrderRequestBody,
        options: Option<&PaymentRequestOptions>,
    ) -> PaymentResult<CheckoutState>;

    /// Release whatever `initialize` acquired.
    async fn deinitialize(
        &mut self,
        options: Option<&PaymentRequestOptions>,
    ) -> PaymentResult<CheckoutState>;

    /// Complete an order after an off-site redirect.
    async fn finalize(
        &mut self,
        options: Option<&PaymentRequestOptions>,
    ) -> PaymentResult<CheckoutState>;

    /// Provider name, also the method id the strategy is registered under.
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a boxed payment strategy (dynamic dispatch)
pub type BoxedPaymentStrategy = Box<dyn PaymentStrategy>;

/// Strategies keyed by provider name
#[derive(Default)]
pub struct PaymentStrategyRegistry {
    strategies: HashMap<String, BoxedPaymentStrategy>,
}

impl PaymentStrategyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a payment strategy, replacing any with the same name
    pub fn register(&mut self, strategy: BoxedPaymentStrategy) {
        let name = strategy.provider_name().to_string();
        self.strategies.insert(name, strategy);
    }

    /// Register with builder pattern
    pub fn with_strategy(mut self, strategy: BoxedPaymentStrategy) -> Self {
        self.register(strategy);
        self
    }

    /// Get a strategy by provider name
    pub fn get_mut(&mut self, provider: &str) -> Option<&mut BoxedPaymentStrategy> {
        self.strategies.get_mut(provider)
    }

    /// List all registered providers
    pub fn providers(&self) -> Vec<&str> {
        self.strategies.keys().map(|s| s.as_str()).collect()
    }

    /// Check if a provider is registered
    pub fn has_provider(&self, provider: &str) -> bool {
        self.strategies.contains_key(provider)
    }
}
