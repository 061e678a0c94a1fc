//! # Affirm Configuration
//!
//! Where the Affirm script is fetched from. Defaults point at the Affirm CDN;
//! a TOML document can override them (e.g. for a staging CDN).
//!
//! ```toml
//! production_script_uri = "//cdn1.affirm.com/js/v2/affirm.js"
//! sandbox_script_uri = "//cdn1-sandbox.affirm.com/js/v2/affirm.js"
//! ```

use pay_core::PaymentError;
use serde::Deserialize;

/// Production script URL
pub const PRODUCTION_SCRIPT_URI: &str = "//cdn1.affirm.com/js/v2/affirm.js";

/// Sandbox script URL
pub const SANDBOX_SCRIPT_URI: &str = "//cdn1-sandbox.affirm.com/js/v2/affirm.js";

/// Affirm script locations
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AffirmConfig {
    /// Script loaded for live stores
    pub production_script_uri: String,

    /// Script loaded when the payment method is in test mode
    pub sandbox_script_uri: String,
}

impl AffirmConfig {
    /// Parse from a TOML document; omitted keys keep their defaults
    pub fn from_toml_str(source: &str) -> Result<Self, PaymentError> {
        toml::from_str(source)
            .map_err(|e| PaymentError::Configuration(format!("Invalid Affirm config: {}", e)))
    }

    /// Builder: override both script URLs
    pub fn with_script_uris(
        mut self,
        production: impl Into<String>,
        sandbox: impl Into<String>,
    ) -> Self {
        self.production_script_uri = production.into();
        self.sandbox_script_uri = sandbox.into();
        self
    }

    /// Script URL for the given mode; absent means production
    pub fn script_uri(&self, test_mode: Option<bool>) -> &str {
        if test_mode.unwrap_or(false) {
            &self.sandbox_script_uri
        } else {
            &self.production_script_uri
        }
    }
}

impl Default for AffirmConfig {
    fn default() -> Self {
        Self {
            production_script_uri: PRODUCTION_SCRIPT_URI.to_string(),
            sandbox_script_uri: SANDBOX_SCRIPT_URI.to_string(),
        }
    }
}
