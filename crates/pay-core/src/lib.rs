//! # pay-core
//!
//! Host checkout contracts shared by payment strategies.
//!
//! This crate provides:
//! - `CheckoutState` and the cart/address/consignment read model
//! - `OrderRequestBody`, `PaymentRequestOptions`, and `Payment` payloads
//! - `CheckoutStore` trait, implemented by the host framework
//! - `PaymentStrategy` trait and `PaymentStrategyRegistry`
//! - `PaymentError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use pay_core::{OrderRequestBody, PaymentRequestOptions, PaymentStrategyRegistry};
//!
//! let mut registry = PaymentStrategyRegistry::new().with_strategy(Box::new(strategy));
//! let strategy = registry.get_mut("affirm").unwrap();
//!
//! let options = PaymentRequestOptions::new("affirm");
//! strategy.initialize(&options).await?;
//! let state = strategy
//!     .execute(&OrderRequestBody::with_payment("affirm"), Some(&options))
//!     .await?;
//! ```

pub mod cart;
pub mod checkout;
pub mod error;
pub mod order;
pub mod payment;
pub mod store;
pub mod strategy;

// Re-exports for convenience
pub use cart::{Cart, Coupon, CustomItem, Discount, GiftCertificateItem, LineItem, LineItemMap};
pub use checkout::{
    Address, Checkout, CheckoutState, Consignment, Customer, ShippingOption, StoreConfig,
    StoreLinks,
};
pub use error::{MissingDataKind, PaymentError, PaymentResult};
pub use order::{
    OrderPaymentRequestBody, OrderRequestBody, OrderSubmission, PaymentInitializeOptions,
    PaymentRequestOptions,
};
pub use payment::{Payment, PaymentData, PaymentMethod, PaymentMethodConfig};
pub use store::{CheckoutStore, SharedCheckoutStore};
pub use strategy::{BoxedPaymentStrategy, PaymentStrategy, PaymentStrategyRegistry};
