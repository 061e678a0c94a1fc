//! # pay-affirm
//!
//! Affirm payment strategy for the host checkout.
//!
//! Affirm runs as a browser script (`affirm.js`). This crate drives it
//! through two seams the embedding environment implements:
//!
//! - [`AffirmHostWindow`]: injects the script and exposes `window.affirm`
//! - [`Affirm`]: the loaded script's checkout and modal calls
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pay_affirm::{AffirmPaymentStrategy, AffirmScriptLoader};
//! use pay_core::{OrderRequestBody, PaymentRequestOptions, PaymentStrategy};
//!
//! let loader = AffirmScriptLoader::new(window);
//! let mut strategy = AffirmPaymentStrategy::new(store, Arc::new(loader));
//!
//! let options = PaymentRequestOptions::new("affirm");
//! strategy.initialize(&options).await?;
//!
//! // Submits the order, opens the Affirm modal, then submits the payment
//! let state = strategy
//!     .execute(&OrderRequestBody::with_payment("affirm"), Some(&options))
//!     .await?;
//! ```

pub mod affirm;
pub mod config;
pub mod loader;
pub mod modal;
pub mod request;
pub mod strategy;

// Re-exports
pub use affirm::{
    Affirm, AffirmAddress, AffirmDiscount, AffirmDiscountLine, AffirmHandle, AffirmHostWindow,
    AffirmItem, AffirmModalOptions, AffirmRequestData, SuccessAffirm,
};
pub use config::{AffirmConfig, PRODUCTION_SCRIPT_URI, SANDBOX_SCRIPT_URI};
pub use loader::{AffirmScriptLoader, ScriptLoader};
pub use request::build_checkout_request;
pub use strategy::{AffirmPaymentStrategy, PROVIDER_NAME};
