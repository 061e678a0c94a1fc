//! # Affirm Script Loader
//!
//! Injects `affirm.js` into the host window and hands back the global it
//! registers. One attempt per call: no retries, no caching.

use crate::affirm::{AffirmHandle, AffirmHostWindow};
use crate::config::AffirmConfig;
use async_trait::async_trait;
use pay_core::{PaymentError, PaymentResult};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Loads the Affirm script. Abstracted so strategies can be driven without a browser.
#[async_trait]
pub trait ScriptLoader: Send + Sync {
    async fn load(
        &self,
        api_key: Option<&str>,
        test_mode: Option<bool>,
    ) -> PaymentResult<AffirmHandle>;
}

/// Loader backed by a host window
pub struct AffirmScriptLoader {
    window: Arc<dyn AffirmHostWindow>,
    config: AffirmConfig,
}

impl AffirmScriptLoader {
    /// Create a loader using the default CDN locations
    pub fn new(window: Arc<dyn AffirmHostWindow>) -> Self {
        Self::with_config(window, AffirmConfig::default())
    }

    pub fn with_config(window: Arc<dyn AffirmHostWindow>, config: AffirmConfig) -> Self {
        Self { window, config }
    }

    pub fn config(&self) -> &AffirmConfig {
        &self.config
    }
}

#[async_trait]
impl ScriptLoader for AffirmScriptLoader {
    #[instrument(skip(self, api_key))]
    async fn load(
        &self,
        api_key: Option<&str>,
        test_mode: Option<bool>,
    ) -> PaymentResult<AffirmHandle> {
        let script_uri = self.config.script_uri(test_mode);

        debug!("Injecting Affirm script from {}", script_uri);
        self.window.load_affirm_js(api_key, script_uri);

        // The snippet registers `window.affirm` synchronously.
        self.window.affirm().ok_or_else(|| {
            warn!("Affirm script did not register after injection: {}", script_uri);
            PaymentError::ScriptLoad(format!("affirm global missing after loading {}", script_uri))
        })
    }
}
