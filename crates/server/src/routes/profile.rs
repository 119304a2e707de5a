use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use money_map_core::models::profile::Profile;
use std::sync::Arc;

use crate::error::{success, ApiResult};
use crate::state::AppState;

pub async fn get_profile(State(state): State<Arc<AppState>>) -> Json<Profile> {
    Json(state.money_map.profile().await)
}

/// Replace the profile wholesale.
pub async fn save_profile(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Profile>, JsonRejection>,
) -> ApiResult<Json<serde_json::Value>> {
    let Json(profile) = body?;
    state.money_map.save_profile(profile).await?;
    Ok(success())
}
