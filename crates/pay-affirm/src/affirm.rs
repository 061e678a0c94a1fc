//! # Affirm Script Surface
//!
//! The parts of the browser-loaded Affirm script (`affirm.js`) the strategy
//! talks to, plus the request/response shapes its API documents.
//! Field names follow Affirm's wire format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Handler for a successful modal checkout
pub type SuccessCallback = Box<dyn Fn(SuccessAffirm) + Send + Sync>;

/// Handler for a failed or abandoned modal checkout
pub type FailCallback = Box<dyn Fn() + Send + Sync>;

/// Handler for UI error-channel events
pub type EventCallback = Box<dyn Fn() + Send + Sync>;

/// The loaded Affirm script (`window.affirm`)
pub trait Affirm: Send + Sync {
    /// `affirm.checkout(data)`: configure the checkout
    fn checkout(&self, request: &AffirmRequestData);

    /// `affirm.checkout.open(options)`: show the modal
    fn open(&self, options: AffirmModalOptions);

    /// `affirm.ui.error.on(event, handler)`
    fn on_ui_error(&self, event: &str, callback: EventCallback);
}

/// Handle to a loaded script, owned by the strategy between initialize and deinitialize
pub type AffirmHandle = Arc<dyn Affirm>;

/// Host environment the script is injected into (the browser window)
pub trait AffirmHostWindow: Send + Sync {
    /// Inject the Affirm snippet for `api_key` from `script_uri`
    fn load_affirm_js(&self, api_key: Option<&str>, script_uri: &str);

    /// The script's global slot, once it has registered itself
    fn affirm(&self) -> Option<AffirmHandle>;
}

/// Callbacks handed to `affirm.checkout.open`
pub struct AffirmModalOptions {
    pub on_success: SuccessCallback,
    pub on_fail: FailCallback,
}

/// Payload passed to `onSuccess`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessAffirm {
    pub checkout_token: String,
    pub created: String,
}

impl SuccessAffirm {
    /// Creation time, if Affirm sent an RFC 3339 timestamp
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.created)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Merchant callback URLs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AffirmMerchant {
    pub user_confirmation_url: String,
    pub user_cancel_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_confirmation_url_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AffirmName {
    pub first: String,
    pub last: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AffirmAddressLines {
    pub line1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    pub city: String,
    pub state: String,
    pub zipcode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Billing or shipping contact block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AffirmAddress {
    pub name: AffirmName,
    pub address: AffirmAddressLines,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AffirmItem {
    pub display_name: String,
    pub sku: String,
    pub unit_price: f64,
    pub qty: u32,
    pub item_image_url: String,
    pub item_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AffirmDiscountLine {
    pub discount_amount: f64,
    pub discount_display_name: String,
}

/// Discounts keyed by coupon code or discount id
pub type AffirmDiscount = HashMap<String, AffirmDiscountLine>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AffirmMetadata {
    pub shipping_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

/// Argument to `affirm.checkout(data)`. Totals are in minor units.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AffirmRequestData {
    pub merchant: AffirmMerchant,
    pub shipping: AffirmAddress,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing: Option<AffirmAddress>,
    pub items: Vec<AffirmItem>,
    pub discounts: AffirmDiscount,
    pub metadata: AffirmMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    pub shipping_amount: f64,
    pub tax_amount: f64,
    pub total: f64,
}
