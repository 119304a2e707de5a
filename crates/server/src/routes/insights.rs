use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use money_map_core::models::analytics::{FinancialSummary, MetalPosition};
use money_map_core::models::emergency::EmergencyFundSnapshot;
use money_map_core::models::focus::Allocation;
use money_map_core::models::goal::GoalProjection;
use serde::Deserialize;
use std::sync::Arc;

use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalQuery {
    down_payment: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationQuery {
    mode: String,
    /// Defaults to the profile's income minus expenses.
    net_income: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct MetalsQuery {
    metal: Option<String>,
}

pub async fn summary(
    State(state): State<Arc<AppState>>,
    query: Result<Query<GoalQuery>, QueryRejection>,
) -> ApiResult<Json<FinancialSummary>> {
    let Query(query) = query?;
    Ok(Json(state.money_map.summary(query.down_payment).await))
}

pub async fn emergency_fund(State(state): State<Arc<AppState>>) -> Json<EmergencyFundSnapshot> {
    Json(state.money_map.calculate_emergency_fund().await)
}

pub async fn goal(
    State(state): State<Arc<AppState>>,
    query: Result<Query<GoalQuery>, QueryRejection>,
) -> ApiResult<Json<GoalProjection>> {
    let Query(query) = query?;
    Ok(Json(state.money_map.calculate_months_to_goal(query.down_payment).await))
}

/// `null` for an unknown mode: the UI keeps its previous display.
pub async fn allocation(
    State(state): State<Arc<AppState>>,
    query: Result<Query<AllocationQuery>, QueryRejection>,
) -> ApiResult<Json<Option<Allocation>>> {
    let Query(query) = query?;
    let net_income = match query.net_income {
        Some(amount) => amount,
        None => state.money_map.profile().await.net_income(),
    };
    Ok(Json(state.money_map.allocate(&query.mode, net_income)))
}

pub async fn metals_summary(
    State(state): State<Arc<AppState>>,
    query: Result<Query<MetalsQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<MetalPosition>>> {
    let Query(query) = query?;
    let positions = state.money_map.metal_positions(query.metal.as_deref()).await?;
    Ok(Json(positions))
}
