use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

use crate::errors::CoreError;
use super::traits::SpotPriceProvider;

const BASE_URL: &str = "https://www.goldapi.io/api";

/// goldapi.io provider for gold and silver spot prices.
///
/// - **Requires**: API key (set via settings as "goldapi"), sent as `x-access-token`.
/// - **Coverage**: Gold (XAU), Silver (XAG), Platinum (XPT), Palladium (XPD).
/// - **Endpoint**: `/{symbol}/USD` returning `{ "price": ... }`.
pub struct GoldApiProvider {
    client: Client,
    api_key: String,
    base_url: String,
    /// Map from metal name (gold) to goldapi symbol (XAU)
    symbol_map: HashMap<String, String>,
}

impl GoldApiProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, BASE_URL)
    }

    /// Point the provider at a different host (used by tests).
    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        let mut symbol_map = HashMap::new();
        symbol_map.insert("gold".to_string(), "XAU".to_string());
        symbol_map.insert("silver".to_string(), "XAG".to_string());
        symbol_map.insert("platinum".to_string(), "XPT".to_string());
        symbol_map.insert("palladium".to_string(), "XPD".to_string());

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            symbol_map,
        }
    }

    pub fn resolve_symbol(&self, metal: &str) -> Result<String, CoreError> {
        let lower = metal.trim().to_lowercase();
        self.symbol_map
            .get(&lower)
            .cloned()
            .ok_or_else(|| CoreError::Api {
                provider: "goldapi.io".into(),
                message: format!("Unknown metal: {metal}. Supported: gold, silver, platinum, palladium"),
            })
    }
}

// ── goldapi.io response types ───────────────────────────────────────

#[derive(Deserialize)]
struct QuoteResponse {
    price: f64,
}

#[async_trait]
impl SpotPriceProvider for GoldApiProvider {
    fn name(&self) -> &str {
        "goldapi.io"
    }

    async fn get_spot_price(&self, metal: &str) -> Result<f64, CoreError> {
        let symbol = self.resolve_symbol(metal)?;
        let url = format!("{}/{symbol}/USD", self.base_url);

        let resp = self
            .client
            .get(&url)
            .header("x-access-token", &self.api_key)
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CoreError::Api {
                provider: "goldapi.io".into(),
                message: format!("response not ok (status {status}) for {symbol}"),
            });
        }

        let quote: QuoteResponse = resp.json().await.map_err(|e| CoreError::Api {
            provider: "goldapi.io".into(),
            message: format!("Failed to parse quote for {symbol}: {e}"),
        })?;

        Ok(quote.price)
    }
}
