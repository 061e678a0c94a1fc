//! # Modal Checkout Bridge
//!
//! Turns the Affirm modal's three callbacks (`onSuccess`, `onFail`, and the
//! UI error channel's `close`) into a single future. Whichever fires first
//! decides the outcome; later calls are ignored.

use crate::affirm::{Affirm, AffirmModalOptions, SuccessAffirm};
use pay_core::{PaymentError, PaymentResult};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;
use tracing::{debug, info};

/// A value that can be settled at most once, from any number of clones.
pub struct SettleOnce<T> {
    slot: Arc<Mutex<Option<oneshot::Sender<T>>>>,
}

impl<T> SettleOnce<T> {
    /// Create the settle side and the receiver that observes it
    pub fn new() -> (Self, oneshot::Receiver<T>) {
        let (tx, rx) = oneshot::channel();
        let settle = Self {
            slot: Arc::new(Mutex::new(Some(tx))),
        };
        (settle, rx)
    }

    /// Settle with `value`. Returns false if already settled.
    pub fn settle(&self, value: T) -> bool {
        let sender = match self.slot.lock() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };

        match sender {
            // A dropped receiver still counts as settled.
            Some(tx) => {
                let _ = tx.send(value);
                true
            }
            None => false,
        }
    }

    pub fn is_settled(&self) -> bool {
        match self.slot.lock() {
            Ok(guard) => guard.is_none(),
            Err(poisoned) => poisoned.into_inner().is_none(),
        }
    }
}

impl<T> Clone for SettleOnce<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

/// Open the Affirm modal and wait for the shopper.
///
/// No timeout: resolves only when a callback fires. If the script drops
/// every handler without calling one, the checkout counts as cancelled.
pub async fn open_checkout(affirm: &dyn Affirm) -> PaymentResult<SuccessAffirm> {
    let (settle, outcome) = SettleOnce::<PaymentResult<SuccessAffirm>>::new();

    let on_success = settle.clone();
    let on_fail = settle.clone();
    affirm.open(AffirmModalOptions {
        on_success: Box::new(move |result| {
            if on_success.settle(Ok(result)) {
                info!("Affirm checkout completed");
            }
        }),
        on_fail: Box::new(move || {
            if on_fail.settle(Err(PaymentError::PaymentMethodCancelled)) {
                info!("Affirm checkout failed or was cancelled");
            }
        }),
    });

    let on_close = settle;
    affirm.on_ui_error(
        "close",
        Box::new(move || {
            if on_close.settle(Err(PaymentError::PaymentMethodCancelled)) {
                info!("Affirm modal closed");
            }
        }),
    );

    outcome.await.unwrap_or_else(|_| {
        debug!("Affirm released its handlers without settling");
        Err(PaymentError::PaymentMethodCancelled)
    })
}
