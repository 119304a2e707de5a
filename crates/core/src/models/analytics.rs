use serde::{Deserialize, Serialize};

use super::emergency::EmergencyFundSnapshot;
use super::focus::Allocation;
use super::goal::{Affordability, GoalProjection};
use super::profile::FocusMode;

/// Total value of one bucket at query time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketTotal {
    pub name: String,
    pub total: f64,
}

/// Result of querying every registered bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetBreakdown {
    /// Successful buckets, sorted by name.
    pub buckets: Vec<BucketTotal>,
    /// Sum of all successful bucket totals.
    pub total: f64,
    /// Names of buckets whose query failed and were left out of `total`.
    pub failed: Vec<String>,
}

impl AssetBreakdown {
    /// Total of a single bucket, if it was queried successfully.
    pub fn total_of(&self, name: &str) -> Option<f64> {
        self.buckets.iter().find(|b| b.name == name).map(|b| b.total)
    }

    /// Each bucket's share of the grand total in percent (0 when the total is 0).
    pub fn shares(&self) -> Vec<BucketShare> {
        self.buckets
            .iter()
            .map(|b| BucketShare {
                name: b.name.clone(),
                total: b.total,
                percent: if self.total > 0.0 {
                    b.total / self.total * 100.0
                } else {
                    0.0
                },
            })
            .collect()
    }
}

/// One slice of the portfolio allocation view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketShare {
    pub name: String,
    pub total: f64,
    pub percent: f64,
}

/// Metal holdings of one (metal, design) pair valued at spot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetalPosition {
    pub metal: String,
    pub design: String,
    pub ounces: f64,
    /// Ounce-weighted average purchase price.
    pub avg_buy_price: f64,
    pub spot_price: f64,
    pub market_value: f64,
    pub gain_loss: f64,
}

/// How next month's net income would be split under the active focus mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeFlow {
    pub focus_mode: FocusMode,
    pub net_income: f64,
    pub allocation: Allocation,
}

/// Every derived view, computed in dependency order from one set of reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub breakdown: AssetBreakdown,
    pub allocation: Vec<BucketShare>,
    pub emergency_fund: EmergencyFundSnapshot,
    pub emergency_message: String,
    pub affordability: Option<Affordability>,
    pub down_payment_target: f64,
    pub goal: GoalProjection,
    pub income_flow: Option<IncomeFlow>,
}
