//! Recording fakes for the host store, browser window and Affirm script.

#![allow(dead_code)]

use async_trait::async_trait;
use pay_affirm::affirm::EventCallback;
use pay_affirm::{
    Affirm, AffirmHandle, AffirmHostWindow, AffirmModalOptions, AffirmPaymentStrategy,
    AffirmRequestData, AffirmScriptLoader, SuccessAffirm,
};
use pay_core::{
    CheckoutState, CheckoutStore, OrderSubmission, Payment, PaymentError, PaymentMethod,
    PaymentRequestOptions, PaymentResult,
};
use serde_json::json;
use std::sync::{Arc, Mutex};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// =============================================================================
// Host store
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    LoadPaymentMethod(String),
    SubmitOrder(OrderSubmission, Option<PaymentRequestOptions>),
    SubmitPayment(Payment),
}

pub struct MockCheckoutStore {
    state: Mutex<CheckoutState>,
    calls: Mutex<Vec<StoreCall>>,
    submit_order_error: Mutex<Option<PaymentError>>,
}

impl MockCheckoutStore {
    pub fn new(state: CheckoutState) -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(state),
            calls: Mutex::new(Vec::new()),
            submit_order_error: Mutex::new(None),
        })
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn submitted_orders(&self) -> Vec<StoreCall> {
        self.calls()
            .into_iter()
            .filter(|call| matches!(call, StoreCall::SubmitOrder(..)))
            .collect()
    }

    pub fn submitted_payments(&self) -> Vec<Payment> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                StoreCall::SubmitPayment(payment) => Some(payment),
                _ => None,
            })
            .collect()
    }

    pub fn update(&self, f: impl FnOnce(&mut CheckoutState)) {
        f(&mut self.state.lock().unwrap());
    }

    pub fn fail_submit_order(&self, error: PaymentError) {
        *self.submit_order_error.lock().unwrap() = Some(error);
    }

    fn record(&self, call: StoreCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl CheckoutStore for MockCheckoutStore {
    fn state(&self) -> CheckoutState {
        self.state.lock().unwrap().clone()
    }

    async fn load_payment_method(&self, method_id: &str) -> PaymentResult<CheckoutState> {
        self.record(StoreCall::LoadPaymentMethod(method_id.to_string()));
        Ok(self.state())
    }

    async fn submit_order(
        &self,
        order: OrderSubmission,
        options: Option<&PaymentRequestOptions>,
    ) -> PaymentResult<CheckoutState> {
        self.record(StoreCall::SubmitOrder(order, options.cloned()));
        if let Some(error) = self.submit_order_error.lock().unwrap().take() {
            return Err(error);
        }
        Ok(self.state())
    }

    async fn submit_payment(&self, payment: Payment) -> PaymentResult<CheckoutState> {
        self.record(StoreCall::SubmitPayment(payment));
        Ok(self.state())
    }
}

// =============================================================================
// Affirm script
// =============================================================================

/// What the shopper does once the modal opens
pub enum ModalBehavior {
    Succeed(SuccessAffirm),
    Fail,
    Close,
}

pub struct FakeAffirm {
    behavior: ModalBehavior,
    checkouts: Mutex<Vec<AffirmRequestData>>,
    opened: Mutex<usize>,
    ui_error_events: Mutex<Vec<String>>,
    held_options: Mutex<Option<AffirmModalOptions>>,
}

impl FakeAffirm {
    pub fn new(behavior: ModalBehavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            checkouts: Mutex::new(Vec::new()),
            opened: Mutex::new(0),
            ui_error_events: Mutex::new(Vec::new()),
            held_options: Mutex::new(None),
        })
    }

    pub fn succeeding(token: &str) -> Arc<Self> {
        Self::new(ModalBehavior::Succeed(SuccessAffirm {
            checkout_token: token.to_string(),
            created: "2019-06-20T18:02:19Z".to_string(),
        }))
    }

    pub fn checkouts(&self) -> Vec<AffirmRequestData> {
        self.checkouts.lock().unwrap().clone()
    }

    pub fn times_opened(&self) -> usize {
        *self.opened.lock().unwrap()
    }

    pub fn ui_error_events(&self) -> Vec<String> {
        self.ui_error_events.lock().unwrap().clone()
    }
}

impl Affirm for FakeAffirm {
    fn checkout(&self, request: &AffirmRequestData) {
        self.checkouts.lock().unwrap().push(request.clone());
    }

    fn open(&self, options: AffirmModalOptions) {
        *self.opened.lock().unwrap() += 1;
        match &self.behavior {
            ModalBehavior::Succeed(result) => (options.on_success)(result.clone()),
            ModalBehavior::Fail => (options.on_fail)(),
            ModalBehavior::Close => *self.held_options.lock().unwrap() = Some(options),
        }
    }

    fn on_ui_error(&self, event: &str, callback: EventCallback) {
        self.ui_error_events.lock().unwrap().push(event.to_string());
        if matches!(self.behavior, ModalBehavior::Close) && event == "close" {
            callback();
        }
    }
}

// =============================================================================
// Browser window
// =============================================================================

/// Window whose snippet registers `affirm` on injection
pub struct FakeWindow {
    script: Option<AffirmHandle>,
    slot: Mutex<Option<AffirmHandle>>,
    injections: Mutex<Vec<(Option<String>, String)>>,
}

impl FakeWindow {
    pub fn new(script: Option<AffirmHandle>) -> Arc<Self> {
        Arc::new(Self {
            script,
            slot: Mutex::new(None),
            injections: Mutex::new(Vec::new()),
        })
    }

    pub fn injections(&self) -> Vec<(Option<String>, String)> {
        self.injections.lock().unwrap().clone()
    }
}

impl AffirmHostWindow for FakeWindow {
    fn load_affirm_js(&self, api_key: Option<&str>, script_uri: &str) {
        self.injections
            .lock()
            .unwrap()
            .push((api_key.map(String::from), script_uri.to_string()));
        *self.slot.lock().unwrap() = self.script.clone();
    }

    fn affirm(&self) -> Option<AffirmHandle> {
        self.slot.lock().unwrap().clone()
    }
}

// =============================================================================
// Fixtures
// =============================================================================

pub const CLIENT_TOKEN: &str = "ABCDEFGHIJ1234567890";

pub fn affirm_method() -> PaymentMethod {
    PaymentMethod {
        gateway: Some("affirm".to_string()),
        ..PaymentMethod::new("affirm", Some(CLIENT_TOKEN)).with_test_mode(false)
    }
}

/// A complete checkout with one item of every category
pub fn checkout_state() -> CheckoutState {
    serde_json::from_value(json!({
        "checkout": {
            "id": "b20deef40f9699e48671bbc3fef6ca44dc80e3c7",
            "orderId": 295,
            "grandTotal": 190,
            "shippingCostTotal": 15,
            "taxTotal": 3,
            "customer": { "id": 4, "email": "test@bigcommerce.com", "storeCredit": 100 }
        },
        "config": {
            "links": { "checkoutLink": "https://store-k1drp8k8.bcapp.dev/checkout" }
        },
        "consignments": [{
            "id": "55c96cda6f04c",
            "selectedShippingOption": {
                "id": "0:61d4bb52f746477e1d4fb411221318c3",
                "description": "Flat Rate",
                "type": "shipping_flatrate",
                "cost": 15
            }
        }],
        "billingAddress": {
            "firstName": "Test",
            "lastName": "Tester",
            "address1": "12345 Testing Way",
            "city": "Some City",
            "stateOrProvinceCode": "CA",
            "postalCode": "95555",
            "countryCode": "US",
            "phone": "555-555-5555",
            "email": "test@bigcommerce.com"
        },
        "shippingAddress": {
            "firstName": "Test",
            "lastName": "Tester",
            "address1": "12345 Testing Way",
            "city": "Some City",
            "stateOrProvinceCode": "CA",
            "postalCode": "95555",
            "countryCode": "US",
            "phone": "555-555-5555"
        },
        "cart": {
            "id": "b20deef40f9699e48671bbc3fef6ca44dc80e3c7",
            "lineItems": {
                "physicalItems": [{
                    "id": "666",
                    "name": "Canvas Laundry Cart",
                    "sku": "CLC",
                    "salePrice": 200,
                    "quantity": 1,
                    "imageUrl": "/images/canvas-laundry-cart.jpg",
                    "url": "/canvas-laundry-cart/"
                }],
                "digitalItems": [{
                    "id": "667",
                    "name": "Digital Book",
                    "sku": "DB",
                    "salePrice": 20,
                    "quantity": 1,
                    "imageUrl": "/images/digital-book.jpg",
                    "url": "/digital-book/"
                }],
                "customItems": [{
                    "id": "55e11c8f",
                    "name": "Custom Item",
                    "sku": "CI",
                    "listPrice": 10,
                    "quantity": 1
                }],
                "giftCertificates": [{
                    "id": "bd391ead-8c58-4105-b00e-d75d233b429a",
                    "name": "$100 Gift Certificate",
                    "amount": 100
                }]
            },
            "coupons": [{
                "code": "savebig2015",
                "displayName": "20% off each item",
                "discountedAmount": 5
            }],
            "discounts": [{
                "id": "12e11c8f-7dce-4da3-9413-b649533f8bad",
                "discountedAmount": 10
            }]
        },
        "paymentMethods": [affirm_method()]
    }))
    .expect("fixture must deserialize")
}

/// Strategy wired to a fresh store and a window that registers `affirm`
pub struct Harness {
    pub store: Arc<MockCheckoutStore>,
    pub window: Arc<FakeWindow>,
    pub affirm: Arc<FakeAffirm>,
    pub strategy: AffirmPaymentStrategy,
}

impl Harness {
    pub fn new(affirm: Arc<FakeAffirm>) -> Self {
        Self::with_state(checkout_state(), affirm)
    }

    pub fn with_state(state: CheckoutState, affirm: Arc<FakeAffirm>) -> Self {
        init_tracing();

        let store = MockCheckoutStore::new(state);
        let window = FakeWindow::new(Some(affirm.clone()));
        let loader = AffirmScriptLoader::new(window.clone());
        let strategy = AffirmPaymentStrategy::new(store.clone(), Arc::new(loader));

        Self {
            store,
            window,
            affirm,
            strategy,
        }
    }
}
