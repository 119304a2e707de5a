use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GoalStatus {
    /// Income does not exceed expenses; nothing can be saved.
    NoSurplus,
    /// Savings beyond the emergency reserve already reach the goal.
    AlreadyCovered,
    /// The goal is reachable in `months_to_goal` months.
    OnTrack,
}

/// Months-to-goal projection for a down-payment target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProjection {
    pub months_to_goal: u32,
    pub status: GoalStatus,
    pub status_message: String,
}

impl GoalProjection {
    pub fn no_surplus() -> Self {
        Self {
            months_to_goal: 0,
            status: GoalStatus::NoSurplus,
            status_message: "no surplus available".to_string(),
        }
    }

    pub fn already_covered() -> Self {
        Self {
            months_to_goal: 0,
            status: GoalStatus::AlreadyCovered,
            status_message: "goal already covered".to_string(),
        }
    }

    pub fn on_track(months: u32) -> Self {
        let unit = if months == 1 { "month" } else { "months" };
        Self {
            months_to_goal: months,
            status: GoalStatus::OnTrack,
            status_message: format!("{months} {unit} to goal"),
        }
    }
}

/// Price range the user can afford for the selected savings sub-goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Affordability {
    /// Monthly income × 36.
    pub affordable_price: f64,
    /// Share of the affordable price to put down (10% car, 20% house).
    pub down_payment_target: f64,
}
