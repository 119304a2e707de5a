use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use money_map_core::models::bucket::{
    BankAccount, BanksDocument, Investment, InvestmentsDocument, MetalHolding, MetalsDocument,
    VaultDocument, VaultEntry,
};
use money_map_core::models::spot::SpotPrices;
use money_map_core::storage::traits::AssetStore;
use serde_json::Value;
use std::sync::Arc;

use crate::error::{success, ApiResult};
use crate::state::AppState;

// ── Vault ───────────────────────────────────────────────────────────

pub async fn get_vault(State(state): State<Arc<AppState>>) -> ApiResult<Json<VaultDocument>> {
    let vault = state.store.load_vault().await?;
    Ok(Json(VaultDocument { vault }))
}

pub async fn add_vault_entry(
    State(state): State<Arc<AppState>>,
    body: Result<Json<VaultEntry>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(entry) = body?;
    state.store.add_vault_entry(entry).await?;
    Ok(success())
}

// ── Banks ───────────────────────────────────────────────────────────

pub async fn get_banks(State(state): State<Arc<AppState>>) -> ApiResult<Json<BanksDocument>> {
    let accounts = state.store.load_banks().await?;
    Ok(Json(BanksDocument { accounts }))
}

pub async fn add_bank_account(
    State(state): State<Arc<AppState>>,
    body: Result<Json<BankAccount>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(account) = body?;
    state.store.add_bank_account(account).await?;
    Ok(success())
}

// ── Investments ─────────────────────────────────────────────────────

pub async fn get_investments(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<InvestmentsDocument>> {
    let investments = state.store.load_investments().await?;
    Ok(Json(InvestmentsDocument { investments }))
}

pub async fn add_investment(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Investment>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(investment) = body?;
    state.store.add_investment(investment).await?;
    Ok(success())
}

// ── Metals ──────────────────────────────────────────────────────────

pub async fn get_metals(State(state): State<Arc<AppState>>) -> ApiResult<Json<MetalsDocument>> {
    let holdings = state.store.load_metals().await?;
    Ok(Json(MetalsDocument { holdings }))
}

pub async fn add_metal_holding(
    State(state): State<Arc<AppState>>,
    body: Result<Json<MetalHolding>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(holding) = body?;
    state.store.add_metal_holding(holding).await?;
    Ok(success())
}

pub async fn remove_metal_holding(
    State(state): State<Arc<AppState>>,
    index: Result<Path<usize>, PathRejection>,
) -> ApiResult<Json<Value>> {
    let Path(index) = index?;
    state.store.remove_metal_holding(index).await?;
    Ok(success())
}

// ── Spot prices ─────────────────────────────────────────────────────

pub async fn get_spot_prices(State(state): State<Arc<AppState>>) -> Json<SpotPrices> {
    Json(state.spot_prices.cached().await)
}

pub async fn save_spot_prices(
    State(state): State<Arc<AppState>>,
    body: Result<Json<SpotPrices>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(prices) = body?;
    state.store.save_spot_prices(&prices).await?;
    Ok(success())
}

/// Fetch live prices (falling back to the cache) and return what was used.
pub async fn refresh_spot_prices(State(state): State<Arc<AppState>>) -> Json<SpotPrices> {
    Json(state.spot_prices.refresh().await)
}
