use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

use super::settings::DEFAULT_COPPER_PRICE;

/// Latest known spot prices in USD per troy ounce.
///
/// Persisted to `spotPrices.json` so the last successful fetch can stand in
/// when the price API is unreachable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpotPrices {
    pub gold: f64,
    pub silver: f64,
    pub copper: f64,
    /// When these prices were fetched; `None` if they were never fetched.
    pub last_updated: Option<DateTime<Utc>>,
}

impl Default for SpotPrices {
    fn default() -> Self {
        Self {
            gold: 0.0,
            silver: 0.0,
            copper: DEFAULT_COPPER_PRICE,
            last_updated: None,
        }
    }
}

impl SpotPrices {
    /// Spot price for a metal name (case-insensitive). Unknown metals are worth 0.
    pub fn price_of(&self, metal: &str) -> f64 {
        match metal.trim().to_lowercase().as_str() {
            "gold" | "xau" => self.gold,
            "silver" | "xag" => self.silver,
            "copper" => self.copper,
            _ => 0.0,
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        for (name, value) in [("gold", self.gold), ("silver", self.silver), ("copper", self.copper)] {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::ValidationError(format!(
                    "{name} price must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}
