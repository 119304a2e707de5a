mod holdings;
mod insights;
mod profile;

use axum::routing::{delete, get, post};
use axum::Router;
use std::sync::Arc;

use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/profile", get(profile::get_profile).post(profile::save_profile))
        .route("/api/vault", get(holdings::get_vault).post(holdings::add_vault_entry))
        .route("/api/banks", get(holdings::get_banks).post(holdings::add_bank_account))
        .route(
            "/api/investments",
            get(holdings::get_investments).post(holdings::add_investment),
        )
        .route("/api/metals", get(holdings::get_metals).post(holdings::add_metal_holding))
        .route("/api/metals/summary", get(insights::metals_summary))
        .route("/api/metals/:index", delete(holdings::remove_metal_holding))
        .route(
            "/api/spot-prices",
            get(holdings::get_spot_prices).post(holdings::save_spot_prices),
        )
        .route("/api/spot-prices/refresh", post(holdings::refresh_spot_prices))
        .route("/api/summary", get(insights::summary))
        .route("/api/emergency-fund", get(insights::emergency_fund))
        .route("/api/goal", get(insights::goal))
        .route("/api/allocation", get(insights::allocation))
}
