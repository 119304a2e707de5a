use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Copper is not quoted by the spot price API; this fixed USD/oz figure is used instead.
pub const DEFAULT_COPPER_PRICE: f64 = 1.99;

/// Runtime settings for the spot price providers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Optional API keys for providers that require them.
    /// Keys: provider name (e.g., "goldapi").
    /// Values: the API key string.
    #[serde(default)]
    pub api_keys: HashMap<String, String>,

    /// Copper spot price in USD per ounce.
    #[serde(default = "default_copper_price")]
    pub copper_price: f64,
}

fn default_copper_price() -> f64 {
    DEFAULT_COPPER_PRICE
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_keys: HashMap::new(),
            copper_price: DEFAULT_COPPER_PRICE,
        }
    }
}

impl Settings {
    /// Settings with a single API key registered under `provider`.
    pub fn with_api_key(provider: impl Into<String>, key: impl Into<String>) -> Self {
        let mut settings = Self::default();
        settings.api_keys.insert(provider.into(), key.into());
        settings
    }
}
