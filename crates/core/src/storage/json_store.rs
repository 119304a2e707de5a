use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::errors::CoreError;
use crate::models::bucket::{
    BankAccount, BanksDocument, Investment, InvestmentsDocument, MetalHolding, MetalsDocument,
    VaultDocument, VaultEntry,
};
use crate::models::profile::Profile;
use crate::models::spot::SpotPrices;

use super::traits::AssetStore;

pub const VAULT_FILE: &str = "vault.json";
pub const BANKS_FILE: &str = "banks.json";
pub const METALS_FILE: &str = "metals.json";
pub const INVESTMENTS_FILE: &str = "investments.json";
pub const SPOT_PRICES_FILE: &str = "spotPrices.json";
pub const PROFILE_FILE: &str = "profile.json";

/// Flat-file storage: one pretty-printed JSON document per bucket plus the
/// profile and spot price cache, all inside a single data directory.
///
/// Plain loads never fail. A missing file is created with its empty document
/// and an unreadable one is logged and replaced by the empty document in
/// memory (the file itself is left untouched for inspection).
///
/// Appends and removals are read-modify-write under an internal lock and
/// refuse to touch a file they cannot parse. Every write, including the
/// creation of a missing file, happens under that lock.
#[derive(Debug)]
pub struct JsonStore {
    data_dir: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Create the data directory if needed and return a store over it.
    pub async fn open(data_dir: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let store = Self::new(data_dir);
        tokio::fs::create_dir_all(&store.data_dir).await?;
        Ok(store)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path_of(&self, file: &str) -> PathBuf {
        self.data_dir.join(file)
    }

    /// Read a document, falling back to `T::default()`.
    pub async fn read_document<T>(&self, file: &str) -> T
    where
        T: DeserializeOwned + Serialize + Default,
    {
        match self.try_read(file).await {
            Ok(Some(doc)) => doc,
            Ok(None) => self.create_default(file).await,
            Err(e) => {
                warn!(file, error = %e, "Unreadable data file, using defaults");
                T::default()
            }
        }
    }

    /// Read a document for modification.
    ///
    /// A missing file yields `T::default()`; an unreadable or malformed one
    /// is an error so the caller never overwrites data it could not parse.
    pub async fn read_document_strict<T>(&self, file: &str) -> Result<T, CoreError>
    where
        T: DeserializeOwned + Default,
    {
        Ok(self.try_read(file).await?.unwrap_or_default())
    }

    /// Serialize and write a document, replacing the file atomically.
    pub async fn write_document<T: Serialize>(&self, file: &str, doc: &T) -> Result<(), CoreError> {
        let _guard = self.write_lock.lock().await;
        self.persist(file, doc).await
    }

    async fn try_read<T: DeserializeOwned>(&self, file: &str) -> Result<Option<T>, CoreError> {
        let text = match tokio::fs::read_to_string(self.path_of(file)).await {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        serde_json::from_str(&text)
            .map(Some)
            .map_err(|e| CoreError::Deserialization(format!("{file}: {e}")))
    }

    async fn create_default<T>(&self, file: &str) -> T
    where
        T: DeserializeOwned + Serialize + Default,
    {
        let _guard = self.write_lock.lock().await;
        // an append may have created the file while we waited
        match self.try_read(file).await {
            Ok(Some(doc)) => return doc,
            Ok(None) => {}
            Err(e) => {
                warn!(file, error = %e, "Unreadable data file, using defaults");
                return T::default();
            }
        }

        debug!(file, "Data file missing, creating it with defaults");
        let fallback = T::default();
        if let Err(e) = self.persist(file, &fallback).await {
            warn!(file, error = %e, "Could not create data file");
        }
        fallback
    }

    /// Caller must hold `write_lock`.
    async fn persist<T: Serialize>(&self, file: &str, doc: &T) -> Result<(), CoreError> {
        let json = serde_json::to_string_pretty(doc)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize {file}: {e}")))?;

        let path = self.path_of(file);
        let tmp = self.path_of(&format!("{file}.tmp"));
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &path).await?;
        debug!(file, "Wrote data file");
        Ok(())
    }

    // ── Appends ─────────────────────────────────────────────────────

    pub async fn add_vault_entry(&self, entry: VaultEntry) -> Result<(), CoreError> {
        entry.validate()?;
        let _guard = self.write_lock.lock().await;
        let mut doc: VaultDocument = self.read_document_strict(VAULT_FILE).await?;
        doc.vault.push(entry);
        self.persist(VAULT_FILE, &doc).await
    }

    pub async fn add_bank_account(&self, account: BankAccount) -> Result<(), CoreError> {
        account.validate()?;
        let _guard = self.write_lock.lock().await;
        let mut doc: BanksDocument = self.read_document_strict(BANKS_FILE).await?;
        doc.accounts.push(account);
        self.persist(BANKS_FILE, &doc).await
    }

    pub async fn add_metal_holding(&self, holding: MetalHolding) -> Result<(), CoreError> {
        holding.validate()?;
        let _guard = self.write_lock.lock().await;
        let mut doc: MetalsDocument = self.read_document_strict(METALS_FILE).await?;
        doc.holdings.push(holding);
        self.persist(METALS_FILE, &doc).await
    }

    /// Remove the metal holding at `index` (position in `metals.json`).
    pub async fn remove_metal_holding(&self, index: usize) -> Result<MetalHolding, CoreError> {
        let _guard = self.write_lock.lock().await;
        let mut doc: MetalsDocument = self.read_document_strict(METALS_FILE).await?;
        if index >= doc.holdings.len() {
            return Err(CoreError::NotFound(format!("metal holding at index {index}")));
        }
        let removed = doc.holdings.remove(index);
        self.persist(METALS_FILE, &doc).await?;
        Ok(removed)
    }

    pub async fn add_investment(&self, investment: Investment) -> Result<(), CoreError> {
        investment.validate()?;
        let _guard = self.write_lock.lock().await;
        let mut doc: InvestmentsDocument = self.read_document_strict(INVESTMENTS_FILE).await?;
        doc.investments.push(investment);
        self.persist(INVESTMENTS_FILE, &doc).await
    }
}

#[async_trait]
impl AssetStore for JsonStore {
    async fn load_vault(&self) -> Result<Vec<VaultEntry>, CoreError> {
        let doc: VaultDocument = self.read_document(VAULT_FILE).await;
        Ok(doc.vault)
    }

    async fn load_banks(&self) -> Result<Vec<BankAccount>, CoreError> {
        let doc: BanksDocument = self.read_document(BANKS_FILE).await;
        Ok(doc.accounts)
    }

    async fn load_metals(&self) -> Result<Vec<MetalHolding>, CoreError> {
        let doc: MetalsDocument = self.read_document(METALS_FILE).await;
        Ok(doc.holdings)
    }

    async fn load_investments(&self) -> Result<Vec<Investment>, CoreError> {
        let doc: InvestmentsDocument = self.read_document(INVESTMENTS_FILE).await;
        Ok(doc.investments)
    }

    async fn load_spot_prices(&self) -> Result<SpotPrices, CoreError> {
        Ok(self.read_document(SPOT_PRICES_FILE).await)
    }

    async fn save_spot_prices(&self, prices: &SpotPrices) -> Result<(), CoreError> {
        prices.validate()?;
        self.write_document(SPOT_PRICES_FILE, prices).await
    }

    async fn load_profile(&self) -> Result<Profile, CoreError> {
        Ok(self.read_document(PROFILE_FILE).await)
    }

    async fn save_profile(&self, profile: &Profile) -> Result<(), CoreError> {
        profile.validate()?;
        self.write_document(PROFILE_FILE, profile).await
    }
}
