use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

use crate::errors::CoreError;
use crate::models::bucket::{
    BankAccount, BanksDocument, Investment, InvestmentsDocument, MetalHolding, MetalsDocument,
    VaultDocument, VaultEntry,
};
use crate::models::profile::Profile;
use crate::models::spot::SpotPrices;

use super::traits::AssetStore;

const PROVIDER: &str = "money-map";

/// `AssetStore` backed by a running Money Map server.
///
/// Talks to the same `/api/*` routes the web UI uses, so the core
/// calculators can run in a separate process from the JSON files.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// `base_url` is the server root, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{path}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CoreError> {
        debug!(path, "GET");
        let resp = self.client.get(self.url(path)).send().await?;
        let resp = check_status(resp).await?;
        resp.json().await.map_err(|e| CoreError::Api {
            provider: PROVIDER.into(),
            message: format!("Failed to parse /api/{path}: {e}"),
        })
    }

    async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), CoreError> {
        debug!(path, "POST");
        let resp = self.client.post(self.url(path)).json(body).send().await?;
        check_status(resp).await?;
        Ok(())
    }

    // ── Appends ─────────────────────────────────────────────────────

    pub async fn add_vault_entry(&self, entry: &VaultEntry) -> Result<(), CoreError> {
        entry.validate()?;
        self.post_json("vault", entry).await
    }

    pub async fn add_bank_account(&self, account: &BankAccount) -> Result<(), CoreError> {
        account.validate()?;
        self.post_json("banks", account).await
    }

    pub async fn add_metal_holding(&self, holding: &MetalHolding) -> Result<(), CoreError> {
        holding.validate()?;
        self.post_json("metals", holding).await
    }

    pub async fn remove_metal_holding(&self, index: usize) -> Result<(), CoreError> {
        let resp = self
            .client
            .delete(self.url(&format!("metals/{index}")))
            .send()
            .await?;
        check_status(resp).await?;
        Ok(())
    }

    pub async fn add_investment(&self, investment: &Investment) -> Result<(), CoreError> {
        investment.validate()?;
        self.post_json("investments", investment).await
    }
}

async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, CoreError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    if status == reqwest::StatusCode::BAD_REQUEST {
        return Err(CoreError::ValidationError(body));
    }
    Err(CoreError::Api {
        provider: PROVIDER.into(),
        message: format!("HTTP {status}: {body}"),
    })
}

#[async_trait]
impl AssetStore for ApiClient {
    async fn load_vault(&self) -> Result<Vec<VaultEntry>, CoreError> {
        let doc: VaultDocument = self.get_json("vault").await?;
        Ok(doc.vault)
    }

    async fn load_banks(&self) -> Result<Vec<BankAccount>, CoreError> {
        let doc: BanksDocument = self.get_json("banks").await?;
        Ok(doc.accounts)
    }

    async fn load_metals(&self) -> Result<Vec<MetalHolding>, CoreError> {
        let doc: MetalsDocument = self.get_json("metals").await?;
        Ok(doc.holdings)
    }

    async fn load_investments(&self) -> Result<Vec<Investment>, CoreError> {
        let doc: InvestmentsDocument = self.get_json("investments").await?;
        Ok(doc.investments)
    }

    async fn load_spot_prices(&self) -> Result<SpotPrices, CoreError> {
        self.get_json("spot-prices").await
    }

    async fn save_spot_prices(&self, prices: &SpotPrices) -> Result<(), CoreError> {
        self.post_json("spot-prices", prices).await
    }

    async fn load_profile(&self) -> Result<Profile, CoreError> {
        self.get_json("profile").await
    }

    async fn save_profile(&self, profile: &Profile) -> Result<(), CoreError> {
        profile.validate()?;
        self.post_json("profile", profile).await
    }
}
