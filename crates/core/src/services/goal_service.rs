use serde::{Deserialize, Serialize};

use crate::models::goal::{Affordability, GoalProjection};
use crate::models::profile::SavingsSubgoal;

use super::emergency_service::sanitize;

/// Share of the monthly surplus set aside for the goal.
pub const SAVINGS_RATE: f64 = 0.5;

/// Affordable purchase price as a multiple of monthly income.
pub const AFFORDABILITY_MONTHS: f64 = 36.0;

pub const CAR_DOWN_PAYMENT_RATE: f64 = 0.10;
pub const HOUSE_DOWN_PAYMENT_RATE: f64 = 0.20;

/// Everything the goal timeline depends on.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalInputs {
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub vault_total: f64,
    pub bank_total: f64,
    pub down_payment_target: f64,
    /// From the emergency fund calculation; reserved, never counted as savings.
    pub emergency_target: f64,
}

impl GoalInputs {
    /// Cash beyond the emergency reserve: max(vault + banks − target, 0).
    pub fn usable_savings(&self) -> f64 {
        let cash = sanitize(self.vault_total) + sanitize(self.bank_total);
        (cash - sanitize(self.emergency_target)).max(0.0)
    }
}

/// Months until the down payment is saved.
///
/// Half of the monthly surplus goes toward the goal, after the emergency
/// reserve is taken out of existing cash. Returns 0 months with a
/// `NoSurplus` status when income does not exceed expenses, and 0 months
/// with `AlreadyCovered` when usable savings already reach the target.
pub fn months_to_goal(inputs: &GoalInputs) -> GoalProjection {
    let surplus = sanitize(inputs.monthly_income) - sanitize(inputs.monthly_expenses);
    if surplus <= 0.0 {
        return GoalProjection::no_surplus();
    }

    let savings_per_month = surplus * SAVINGS_RATE;
    let remaining = (sanitize(inputs.down_payment_target) - inputs.usable_savings()).max(0.0);
    if remaining == 0.0 {
        return GoalProjection::already_covered();
    }

    // float-to-int `as` saturates at u32::MAX
    let months = (remaining / savings_per_month).ceil() as u32;
    GoalProjection::on_track(months)
}

/// Purchase price the income supports and the down payment it calls for.
/// `SavingsSubgoal::None` has no estimate.
pub fn affordability(monthly_income: f64, subgoal: SavingsSubgoal) -> Option<Affordability> {
    let rate = match subgoal {
        SavingsSubgoal::Car => CAR_DOWN_PAYMENT_RATE,
        SavingsSubgoal::House => HOUSE_DOWN_PAYMENT_RATE,
        SavingsSubgoal::None => return None,
    };
    let affordable_price = sanitize(monthly_income) * AFFORDABILITY_MONTHS;
    Some(Affordability {
        affordable_price,
        down_payment_target: affordable_price * rate,
    })
}
