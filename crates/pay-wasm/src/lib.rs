//! # pay-wasm
//!
//! WebAssembly bindings for the Affirm checkout mapping.
//!
//! Lets storefront JavaScript build the exact `affirm.checkout(...)` payload
//! the Rust strategy would send, from the same checkout state JSON.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { script_uri, build_checkout_request } from 'pay-wasm';
//!
//! await init();
//!
//! loadAffirmJs(publicKey, script_uri(paymentMethod.config.testMode));
//! affirm.checkout(build_checkout_request(checkoutState, useStoreCredit));
//! affirm.checkout.open({ onSuccess, onFail });
//! ```
//!
//! ## Building
//!
//! ```bash
//! wasm-pack build --target web
//! ```

use pay_affirm::AffirmConfig;
use pay_core::CheckoutState;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Affirm script URL for the given mode
#[wasm_bindgen]
pub fn script_uri(test_mode: bool) -> String {
    AffirmConfig::default().script_uri(Some(test_mode)).to_string()
}

/// Map a host checkout state object to Affirm's checkout payload
#[wasm_bindgen]
pub fn build_checkout_request(state: JsValue, use_store_credit: bool) -> Result<JsValue, JsValue> {
    let state: CheckoutState = serde_wasm_bindgen::from_value(state)
        .map_err(|e| JsValue::from_str(&format!("Invalid checkout state: {}", e)))?;

    let request = pay_affirm::build_checkout_request(&state, use_store_credit).map_err(|e| {
        let message = JsValue::from_str(&e.to_string());
        web_sys::console::warn_1(&message);
        message
    })?;

    // Plain objects, not JS `Map`s, for the discount table
    request
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Get library version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
