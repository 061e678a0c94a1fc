//! # Affirm Payment Strategy
//!
//! Pay-over-time checkout through Affirm's modal:
//!
//! 1. `initialize` loads the payment method and injects `affirm.js`
//! 2. `execute` submits the order, configures and opens the modal, waits
//!    for the shopper, then submits the payment with Affirm's checkout token
//! 3. `deinitialize` drops the script handle
//!
//! Affirm has no deferred capture step, so `finalize` always reports
//! `OrderFinalizationNotRequired`.

use crate::affirm::AffirmHandle;
use crate::loader::ScriptLoader;
use crate::modal;
use crate::request::build_checkout_request;
use async_trait::async_trait;
use pay_core::{
    CheckoutState, MissingDataKind, OrderRequestBody, OrderSubmission, Payment, PaymentError,
    PaymentInitializeOptions, PaymentRequestOptions, PaymentResult, PaymentStrategy,
    SharedCheckoutStore,
};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Provider name, also the method id Affirm is configured under
pub const PROVIDER_NAME: &str = "affirm";

/// Field reported when the order payload names no payment method
const PAYMENT_METHOD_ID_FIELD: &str = "payment.methodId";

pub struct AffirmPaymentStrategy {
    store: SharedCheckoutStore,
    script_loader: Arc<dyn ScriptLoader>,
    affirm: Option<AffirmHandle>,
}

impl AffirmPaymentStrategy {
    pub fn new(store: SharedCheckoutStore, script_loader: Arc<dyn ScriptLoader>) -> Self {
        Self {
            store,
            script_loader,
            affirm: None,
        }
    }

    /// Whether a loaded script is currently held
    pub fn is_initialized(&self) -> bool {
        self.affirm.is_some()
    }

    fn affirm(&self) -> PaymentResult<AffirmHandle> {
        self.affirm.clone().ok_or(PaymentError::NotInitialized)
    }
}

#[async_trait]
impl PaymentStrategy for AffirmPaymentStrategy {
    #[instrument(skip(self, options), fields(method_id = %options.method_id))]
    async fn initialize(
        &mut self,
        options: &PaymentInitializeOptions,
    ) -> PaymentResult<CheckoutState> {
        let state = self.store.load_payment_method(&options.method_id).await?;

        let payment_method = state
            .payment_method(&options.method_id)
            .ok_or(PaymentError::missing(MissingDataKind::PaymentMethod))?;
        let public_key = payment_method
            .client_token()
            .ok_or(PaymentError::missing(MissingDataKind::PaymentMethod))?;
        let test_mode = payment_method.config.test_mode;

        let affirm = self.script_loader.load(Some(public_key), test_mode).await?;
        self.affirm = Some(affirm);

        info!("Affirm initialized (test_mode={})", test_mode.unwrap_or(false));

        Ok(self.store.state())
    }

    #[instrument(skip(self, payload, options), fields(use_store_credit = payload.use_store_credit))]
    async fn execute(
        &mut self,
        payload: &OrderRequestBody,
        options: Option<&PaymentRequestOptions>,
    ) -> PaymentResult<CheckoutState> {
        if payload.payment_method_id().is_none() {
            return Err(PaymentError::invalid_argument([PAYMENT_METHOD_ID_FIELD]));
        }
        let use_store_credit = payload.use_store_credit;

        self.store
            .submit_order(OrderSubmission { use_store_credit }, options)
            .await?;

        let affirm = self.affirm()?;
        let request = build_checkout_request(&self.store.state(), use_store_credit)?;
        debug!(
            "Configuring Affirm checkout: {} items, total={}",
            request.items.len(),
            request.total
        );
        affirm.checkout(&request);

        let affirm = self.affirm()?;
        let result = modal::open_checkout(affirm.as_ref()).await?;
        debug!(created_at = ?result.created_at(), "Received Affirm checkout token");

        // A missing options argument surfaces as NotInitialized.
        let options = options.ok_or(PaymentError::NotInitialized)?;

        self.store
            .submit_payment(Payment::with_nonce(
                options.method_id.clone(),
                result.checkout_token,
            ))
            .await
    }

    async fn deinitialize(
        &mut self,
        _options: Option<&PaymentRequestOptions>,
    ) -> PaymentResult<CheckoutState> {
        if self.affirm.take().is_some() {
            debug!("Released Affirm script handle");
        }

        Ok(self.store.state())
    }

    async fn finalize(
        &mut self,
        _options: Option<&PaymentRequestOptions>,
    ) -> PaymentResult<CheckoutState> {
        Err(PaymentError::OrderFinalizationNotRequired)
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }
}
