//! # Order Types
//!
//! Order request payloads and the per-call options passed to strategies.

use serde::{Deserialize, Serialize};

/// Payment section of an order request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPaymentRequestBody {
    #[serde(default)]
    pub method_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway_id: Option<String>,
}

/// Order request submitted by the shopper
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequestBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment: Option<OrderPaymentRequestBody>,
    #[serde(default)]
    pub use_store_credit: bool,
}

impl OrderRequestBody {
    /// Order request paying with the given method
    pub fn with_payment(method_id: impl Into<String>) -> Self {
        Self {
            payment: Some(OrderPaymentRequestBody {
                method_id: method_id.into(),
                gateway_id: None,
            }),
            use_store_credit: false,
        }
    }

    /// Builder: apply store credit
    pub fn with_store_credit(mut self, use_store_credit: bool) -> Self {
        self.use_store_credit = use_store_credit;
        self
    }

    /// Payment method id, if one was given
    pub fn payment_method_id(&self) -> Option<&str> {
        self.payment
            .as_ref()
            .map(|p| p.method_id.as_str())
            .filter(|id| !id.is_empty())
    }
}

/// Order creation payload sent to the host ahead of payment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSubmission {
    pub use_store_credit: bool,
}

/// Identifies which payment method a strategy call is for
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequestOptions {
    pub method_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway_id: Option<String>,
}

impl PaymentRequestOptions {
    pub fn new(method_id: impl Into<String>) -> Self {
        Self {
            method_id: method_id.into(),
            gateway_id: None,
        }
    }

    /// Builder: set gateway id
    pub fn with_gateway(mut self, gateway_id: impl Into<String>) -> Self {
        self.gateway_id = Some(gateway_id.into());
        self
    }
}

/// Options passed to `PaymentStrategy::initialize`
pub type PaymentInitializeOptions = PaymentRequestOptions;
