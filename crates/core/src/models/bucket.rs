use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// The four asset buckets tracked by the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BucketKind {
    /// Physical cash kept at home
    Vault,
    /// Bank accounts
    Banks,
    /// Precious metals (coins, bars)
    Metals,
    /// Brokerage / platform investments
    Investments,
}

impl BucketKind {
    pub const ALL: [BucketKind; 4] = [
        BucketKind::Vault,
        BucketKind::Banks,
        BucketKind::Metals,
        BucketKind::Investments,
    ];

    /// Registry name of the bucket.
    pub fn name(&self) -> &'static str {
        match self {
            BucketKind::Vault => "vault",
            BucketKind::Banks => "banks",
            BucketKind::Metals => "metals",
            BucketKind::Investments => "investments",
        }
    }
}

impl std::fmt::Display for BucketKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn require_text(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::ValidationError(format!("{field} must not be empty")));
    }
    Ok(())
}

fn require_finite(field: &str, value: f64) -> Result<(), CoreError> {
    if !value.is_finite() {
        return Err(CoreError::ValidationError(format!("{field} must be a number")));
    }
    Ok(())
}

// ── Vault ───────────────────────────────────────────────────────────

/// A stack of bills of one denomination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultEntry {
    pub denomination: f64,
    pub quantity: u32,
    /// Series year printed on the bill; `null` means assorted.
    #[serde(default)]
    pub year: Option<i32>,
}

impl VaultEntry {
    pub fn new(denomination: f64, quantity: u32, year: Option<i32>) -> Self {
        Self {
            denomination,
            quantity,
            year,
        }
    }

    /// Cash value of this entry.
    pub fn value(&self) -> f64 {
        self.denomination * f64::from(self.quantity)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        require_finite("denomination", self.denomination)?;
        if self.denomination < 0.0 {
            return Err(CoreError::ValidationError(
                "denomination must not be negative".into(),
            ));
        }
        if self.quantity == 0 {
            return Err(CoreError::ValidationError("quantity must be greater than 0".into()));
        }
        Ok(())
    }
}

/// On-disk layout of `vault.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VaultDocument {
    #[serde(default)]
    pub vault: Vec<VaultEntry>,
}

// ── Banks ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    pub bank: String,
    /// Account type as entered by the user (checking, savings, ...).
    #[serde(rename = "type")]
    pub account_type: String,
    pub amount: f64,
}

impl BankAccount {
    pub fn new(bank: impl Into<String>, account_type: impl Into<String>, amount: f64) -> Self {
        Self {
            bank: bank.into(),
            account_type: account_type.into(),
            amount,
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        require_text("bank", &self.bank)?;
        require_text("type", &self.account_type)?;
        require_finite("amount", self.amount)?;
        if self.amount <= 0.0 {
            return Err(CoreError::ValidationError("amount must be greater than 0".into()));
        }
        Ok(())
    }
}

/// On-disk layout of `banks.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BanksDocument {
    #[serde(default)]
    pub accounts: Vec<BankAccount>,
}

// ── Metals ──────────────────────────────────────────────────────────

/// Coins or bars of one metal and design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetalHolding {
    /// Metal name as used for spot lookup ("gold", "silver", "copper").
    pub metals: String,
    /// Troy ounces per piece.
    pub weight: f64,
    pub quantity: u32,
    /// Purchase price per ounce.
    pub buy_price: f64,
    #[serde(default)]
    pub design: String,
}

impl MetalHolding {
    pub fn new(
        metal: impl Into<String>,
        weight: f64,
        quantity: u32,
        buy_price: f64,
        design: impl Into<String>,
    ) -> Self {
        Self {
            metals: metal.into(),
            weight,
            quantity,
            buy_price,
            design: design.into(),
        }
    }

    /// Total troy ounces held.
    pub fn ounces(&self) -> f64 {
        self.weight * f64::from(self.quantity)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        require_text("metals", &self.metals)?;
        require_finite("weight", self.weight)?;
        require_finite("buyPrice", self.buy_price)?;
        if self.weight <= 0.0 {
            return Err(CoreError::ValidationError("weight must be greater than 0".into()));
        }
        if self.quantity == 0 {
            return Err(CoreError::ValidationError("quantity must be greater than 0".into()));
        }
        if self.buy_price < 0.0 {
            return Err(CoreError::ValidationError("buyPrice must not be negative".into()));
        }
        Ok(())
    }
}

/// On-disk layout of `metals.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetalsDocument {
    #[serde(default)]
    pub holdings: Vec<MetalHolding>,
}

// ── Investments ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Investment {
    pub platform: String,
    pub asset: String,
    pub value: f64,
}

impl Investment {
    pub fn new(platform: impl Into<String>, asset: impl Into<String>, value: f64) -> Self {
        Self {
            platform: platform.into(),
            asset: asset.into(),
            value,
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        require_text("platform", &self.platform)?;
        require_text("asset", &self.asset)?;
        require_finite("value", self.value)?;
        if self.value < 0.0 {
            return Err(CoreError::ValidationError("value must not be negative".into()));
        }
        Ok(())
    }
}

/// On-disk layout of `investments.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvestmentsDocument {
    #[serde(default)]
    pub investments: Vec<Investment>,
}
