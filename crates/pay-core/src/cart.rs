//! # Cart Types
//!
//! Read model of the shopper's cart as exposed by the host checkout.
//! Amounts are in major currency units (e.g. dollars), as the host reports them.

use serde::{Deserialize, Serialize};

/// A physical or digital product in the cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub sku: String,
    /// Price per unit after sale adjustments
    pub sale_price: f64,
    pub quantity: u32,
    #[serde(default)]
    pub image_url: String,
    /// Product page URL
    #[serde(default)]
    pub url: String,
}

/// A merchant-defined item without a catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub sku: String,
    pub list_price: f64,
    pub quantity: u32,
}

/// A gift certificate being purchased
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftCertificateItem {
    pub id: String,
    pub name: String,
    pub amount: f64,
}

/// Cart contents grouped by item category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemMap {
    #[serde(default)]
    pub physical_items: Vec<LineItem>,
    #[serde(default)]
    pub digital_items: Vec<LineItem>,
    /// Not every store exposes custom items
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_items: Option<Vec<CustomItem>>,
    #[serde(default)]
    pub gift_certificates: Vec<GiftCertificateItem>,
}

impl LineItemMap {
    /// Number of entries across all categories
    pub fn len(&self) -> usize {
        self.physical_items.len()
            + self.digital_items.len()
            + self.custom_items.as_ref().map_or(0, Vec::len)
            + self.gift_certificates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A coupon applied to the cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    pub code: String,
    pub display_name: String,
    pub discounted_amount: f64,
}

/// A cart-level discount (automatic promotion)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discount {
    pub id: String,
    pub discounted_amount: f64,
}

/// The shopper's cart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub id: String,
    #[serde(default)]
    pub line_items: LineItemMap,
    #[serde(default)]
    pub coupons: Vec<Coupon>,
    #[serde(default)]
    pub discounts: Vec<Discount>,
}
