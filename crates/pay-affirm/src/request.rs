//! # Checkout Request Mapping
//!
//! Builds the `affirm.checkout(...)` payload from a host checkout snapshot.
//! Pure functions: they only read the state they are given.

use crate::affirm::{
    AffirmAddress, AffirmAddressLines, AffirmDiscount, AffirmDiscountLine, AffirmItem,
    AffirmMerchant, AffirmMetadata, AffirmName, AffirmRequestData,
};
use pay_core::{Address, Cart, CheckoutState, MissingDataKind, PaymentError, PaymentResult};

/// Query appended to the store's checkout link for Affirm's redirects
const EXTERNAL_CHECKOUT_QUERY: &str = ".php?action=set_external_checkout&provider=affirm";

/// Affirm POSTs the checkout token back to the confirmation URL
const CONFIRMATION_URL_ACTION: &str = "POST";

/// The strategy always uses the in-page modal, never a redirect
const CHECKOUT_MODE: &str = "modal";

/// Major currency units to Affirm's minor units. Plain scaling, no rounding.
pub fn to_minor_units(amount: f64) -> f64 {
    amount * 100.0
}

/// Assemble the full checkout request
pub fn build_checkout_request(
    state: &CheckoutState,
    use_store_credit: bool,
) -> PaymentResult<AffirmRequestData> {
    let config = state
        .store_config()
        .ok_or(PaymentError::missing(MissingDataKind::CheckoutConfig))?;
    let checkout = state
        .checkout()
        .ok_or(PaymentError::missing(MissingDataKind::Checkout))?;
    let shipping_option = state
        .consignments()
        .and_then(|consignments| consignments.first())
        .and_then(|consignment| consignment.selected_shipping_option.as_ref())
        .ok_or(PaymentError::missing(MissingDataKind::Checkout))?;

    let checkout_link = &config.links.checkout_link;
    let grand_total = checkout.grand_total_with_credit(use_store_credit);

    Ok(AffirmRequestData {
        merchant: AffirmMerchant {
            user_confirmation_url: format!(
                "{}{}&status=success",
                checkout_link, EXTERNAL_CHECKOUT_QUERY
            ),
            user_cancel_url: format!(
                "{}{}&status=cancelled",
                checkout_link, EXTERNAL_CHECKOUT_QUERY
            ),
            user_confirmation_url_action: Some(CONFIRMATION_URL_ACTION.to_string()),
            name: None,
        },
        shipping: shipping_address(state)?,
        billing: Some(billing_address(state)?),
        items: items(state)?,
        discounts: discounts(state)?,
        metadata: AffirmMetadata {
            shipping_type: shipping_option.option_type.clone(),
            mode: Some(CHECKOUT_MODE.to_string()),
        },
        order_id: Some(
            checkout
                .order_id
                .filter(|id| *id != 0)
                .map(|id| id.to_string())
                .unwrap_or_default(),
        ),
        shipping_amount: to_minor_units(checkout.shipping_cost_total),
        tax_amount: to_minor_units(checkout.tax_total),
        total: to_minor_units(grand_total.max(0.0)),
    })
}

/// Billing contact block, including email
pub fn billing_address(state: &CheckoutState) -> PaymentResult<AffirmAddress> {
    let address = state
        .billing_address()
        .ok_or(PaymentError::missing(MissingDataKind::BillingAddress))?;

    Ok(AffirmAddress {
        email: address.email.clone(),
        ..map_address(address)
    })
}

/// Shipping contact block
pub fn shipping_address(state: &CheckoutState) -> PaymentResult<AffirmAddress> {
    state
        .shipping_address()
        .map(map_address)
        .ok_or(PaymentError::missing(MissingDataKind::ShippingAddress))
}

fn map_address(address: &Address) -> AffirmAddress {
    AffirmAddress {
        name: AffirmName {
            first: address.first_name.clone(),
            last: address.last_name.clone(),
            full: Some(format!("{} {}", address.first_name, address.last_name)),
        },
        address: AffirmAddressLines {
            line1: address.address1.clone(),
            line2: Some(address.address2.clone()),
            city: address.city.clone(),
            state: address.state_or_province_code.clone(),
            zipcode: address.postal_code.clone(),
            country: Some(address.country_code.clone()),
        },
        phone_number: Some(address.phone.clone()),
        email: None,
    }
}

fn cart(state: &CheckoutState) -> PaymentResult<&Cart> {
    state
        .cart()
        .ok_or(PaymentError::missing(MissingDataKind::Cart))
}

/// Flatten the cart: physical, digital, custom, then gift certificates
pub fn items(state: &CheckoutState) -> PaymentResult<Vec<AffirmItem>> {
    let line_items = &cart(state)?.line_items;
    let mut items = Vec::with_capacity(line_items.len());

    for item in line_items
        .physical_items
        .iter()
        .chain(line_items.digital_items.iter())
    {
        items.push(AffirmItem {
            display_name: item.name.clone(),
            sku: item.sku.clone(),
            unit_price: item.sale_price,
            qty: item.quantity,
            item_image_url: item.image_url.clone(),
            item_url: item.url.clone(),
        });
    }

    for item in line_items.custom_items.iter().flatten() {
        items.push(AffirmItem {
            display_name: item.name.clone(),
            sku: item.sku.clone(),
            unit_price: item.list_price,
            qty: item.quantity,
            item_image_url: String::new(),
            item_url: String::new(),
        });
    }

    for certificate in &line_items.gift_certificates {
        items.push(AffirmItem {
            display_name: certificate.name.clone(),
            sku: String::new(),
            unit_price: certificate.amount,
            qty: 1,
            item_image_url: String::new(),
            item_url: String::new(),
        });
    }

    Ok(items)
}

/// Coupons keyed by code, then cart discounts keyed by id (overwriting on collision)
pub fn discounts(state: &CheckoutState) -> PaymentResult<AffirmDiscount> {
    let cart = cart(state)?;
    let mut discounts = AffirmDiscount::new();

    for coupon in &cart.coupons {
        discounts.insert(
            coupon.code.clone(),
            AffirmDiscountLine {
                discount_amount: coupon.discounted_amount,
                discount_display_name: coupon.display_name.clone(),
            },
        );
    }

    for discount in &cart.discounts {
        discounts.insert(
            discount.id.clone(),
            AffirmDiscountLine {
                discount_amount: discount.discounted_amount,
                discount_display_name: discount.id.clone(),
            },
        );
    }

    Ok(discounts)
}
