//! # Checkout State
//!
//! Point-in-time snapshot of the host checkout: totals, cart, addresses,
//! consignments, store config, and loaded payment methods.
//! Strategies read it, they never own or mutate it.

use crate::cart::Cart;
use crate::payment::PaymentMethod;
use serde::{Deserialize, Serialize};

/// Shopper account details relevant to payment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub email: String,
    /// Store credit available to the shopper (major units)
    #[serde(default)]
    pub store_credit: f64,
}

/// Checkout totals (major units)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checkout {
    pub id: String,
    /// Set once the order has been created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,
    pub grand_total: f64,
    #[serde(default)]
    pub shipping_cost_total: f64,
    #[serde(default)]
    pub tax_total: f64,
    #[serde(default)]
    pub customer: Customer,
}

impl Checkout {
    /// Grand total, optionally reduced by the shopper's store credit.
    /// Can go negative; callers clamp as needed.
    pub fn grand_total_with_credit(&self, use_store_credit: bool) -> f64 {
        if use_store_credit {
            self.grand_total - self.customer.store_credit
        } else {
            self.grand_total
        }
    }
}

/// Storefront links
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreLinks {
    /// e.g. "https://store.example.com/checkout"
    pub checkout_link: String,
    #[serde(default)]
    pub cart_link: String,
}

/// Store-wide configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    pub links: StoreLinks,
}

/// A shipping option the shopper picked for a consignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingOption {
    pub id: String,
    #[serde(default)]
    pub description: String,
    /// Carrier or method type, e.g. "shipping_flatrate"
    #[serde(rename = "type")]
    pub option_type: String,
    #[serde(default)]
    pub cost: f64,
}

/// A group of items shipped to one address
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consignment {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_shipping_option: Option<ShippingOption>,
}

/// Billing or shipping address
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub first_name: String,
    pub last_name: String,
    pub address1: String,
    #[serde(default)]
    pub address2: String,
    pub city: String,
    #[serde(default)]
    pub state_or_province_code: String,
    pub postal_code: String,
    pub country_code: String,
    #[serde(default)]
    pub phone: String,
    /// Only billing addresses carry an email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Read-only snapshot of the host checkout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutState {
    #[serde(default)]
    pub checkout: Option<Checkout>,
    #[serde(default)]
    pub config: Option<StoreConfig>,
    #[serde(default)]
    pub consignments: Option<Vec<Consignment>>,
    #[serde(default)]
    pub billing_address: Option<Address>,
    #[serde(default)]
    pub shipping_address: Option<Address>,
    #[serde(default)]
    pub cart: Option<Cart>,
    #[serde(default)]
    pub payment_methods: Vec<PaymentMethod>,
}

impl CheckoutState {
    pub fn checkout(&self) -> Option<&Checkout> {
        self.checkout.as_ref()
    }

    pub fn store_config(&self) -> Option<&StoreConfig> {
        self.config.as_ref()
    }

    pub fn consignments(&self) -> Option<&[Consignment]> {
        self.consignments.as_deref()
    }

    pub fn billing_address(&self) -> Option<&Address> {
        self.billing_address.as_ref()
    }

    pub fn shipping_address(&self) -> Option<&Address> {
        self.shipping_address.as_ref()
    }

    pub fn cart(&self) -> Option<&Cart> {
        self.cart.as_ref()
    }

    /// Look up a loaded payment method by id
    pub fn payment_method(&self, method_id: &str) -> Option<&PaymentMethod> {
        self.payment_methods.iter().find(|m| m.id == method_id)
    }
}
