//! # Payment Types
//!
//! Payment method descriptors loaded from the host, and the payment
//! submission payload strategies hand back to it.

use serde::{Deserialize, Serialize};

/// Provider-specific settings attached to a payment method
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodConfig {
    /// Sandbox vs production; absent means production
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_mode: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// A payment method as configured in the store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,
    /// Public key handed to the provider script
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(default)]
    pub config: PaymentMethodConfig,
}

impl PaymentMethod {
    pub fn new(id: impl Into<String>, client_token: Option<&str>) -> Self {
        Self {
            id: id.into(),
            client_token: client_token.map(String::from),
            ..Default::default()
        }
    }

    /// Builder: set test mode
    pub fn with_test_mode(mut self, test_mode: bool) -> Self {
        self.config.test_mode = Some(test_mode);
        self
    }

    /// Client token, treating an empty string as absent
    pub fn client_token(&self) -> Option<&str> {
        self.client_token.as_deref().filter(|token| !token.is_empty())
    }
}

/// Provider result forwarded to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentData {
    pub nonce: String,
}

/// Payment submission payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub method_id: String,
    pub payment_data: PaymentData,
}

impl Payment {
    pub fn with_nonce(method_id: impl Into<String>, nonce: impl Into<String>) -> Self {
        Self {
            method_id: method_id.into(),
            payment_data: PaymentData {
                nonce: nonce.into(),
            },
        }
    }
}
