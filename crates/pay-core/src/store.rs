//! # Checkout Store
//!
//! The host framework's state store and action dispatch, as seen by a
//! payment strategy. Implemented by the host; strategies only consume it.

use crate::checkout::CheckoutState;
use crate::error::PaymentResult;
use crate::order::{OrderSubmission, PaymentRequestOptions};
use crate::payment::Payment;
use async_trait::async_trait;
use std::sync::Arc;

/// Host checkout store and its action creators.
///
/// Each async method dispatches one host action and resolves with the state
/// after the action settles. Host failures surface as `PaymentError`s and
/// are passed through by strategies untouched.
#[async_trait]
pub trait CheckoutStore: Send + Sync {
    /// Current snapshot, read synchronously
    fn state(&self) -> CheckoutState;

    /// (Re)load a payment method descriptor
    async fn load_payment_method(&self, method_id: &str) -> PaymentResult<CheckoutState>;

    /// Create the order ahead of payment
    async fn submit_order(
        &self,
        order: OrderSubmission,
        options: Option<&PaymentRequestOptions>,
    ) -> PaymentResult<CheckoutState>;

    /// Submit payment for the created order
    async fn submit_payment(&self, payment: Payment) -> PaymentResult<CheckoutState>;
}

/// Shared handle to the host store
pub type SharedCheckoutStore = Arc<dyn CheckoutStore>;
