use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Named strategy determining how new income is split across buckets.
///
/// Serialized as a lowercase string. The empty string and any unrecognized
/// name deserialize to `None`, so a stale or hand-edited profile never fails
/// to load because of this field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FocusMode {
    Growth,
    Savings,
    Protection,
    #[default]
    None,
}

impl FocusMode {
    /// Parse a strategy name. Returns `None` for names that are not one of
    /// the three strategies (including the explicit "none").
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "growth" => Some(FocusMode::Growth),
            "savings" => Some(FocusMode::Savings),
            "protection" => Some(FocusMode::Protection),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FocusMode::Growth => "growth",
            FocusMode::Savings => "savings",
            FocusMode::Protection => "protection",
            FocusMode::None => "none",
        }
    }
}

impl std::fmt::Display for FocusMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for FocusMode {
    fn from(s: String) -> Self {
        Self::from_name(&s).unwrap_or(FocusMode::None)
    }
}

impl From<FocusMode> for String {
    fn from(mode: FocusMode) -> Self {
        mode.as_str().to_string()
    }
}

/// What the user is saving toward while in the `savings` focus mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SavingsSubgoal {
    Car,
    House,
    #[default]
    None,
}

impl SavingsSubgoal {
    pub fn as_str(&self) -> &'static str {
        match self {
            SavingsSubgoal::Car => "car",
            SavingsSubgoal::House => "house",
            SavingsSubgoal::None => "none",
        }
    }
}

impl std::fmt::Display for SavingsSubgoal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for SavingsSubgoal {
    fn from(s: String) -> Self {
        match s.trim().to_lowercase().as_str() {
            "car" => SavingsSubgoal::Car,
            "house" => SavingsSubgoal::House,
            _ => SavingsSubgoal::None,
        }
    }
}

impl From<SavingsSubgoal> for String {
    fn from(goal: SavingsSubgoal) -> Self {
        goal.as_str().to_string()
    }
}

/// The single user profile record (`profile.json`).
///
/// Replaced wholesale on save; there are no partial updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    /// How many months of expenses the emergency reserve should cover.
    pub emergency_months: u32,
    pub focus_mode: FocusMode,
    pub savings_subgoal: SavingsSubgoal,
    pub loan_amount: f64,
    pub down_payment: f64,
    /// Derived: refreshed from the goal timeline whenever the profile is saved.
    pub months_to_goal: u32,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            monthly_income: 0.0,
            monthly_expenses: 0.0,
            emergency_months: 6,
            focus_mode: FocusMode::None,
            savings_subgoal: SavingsSubgoal::None,
            loan_amount: 0.0,
            down_payment: 0.0,
            months_to_goal: 0,
        }
    }
}

impl Profile {
    /// Income left after expenses; may be negative.
    pub fn net_income(&self) -> f64 {
        self.monthly_income - self.monthly_expenses
    }

    /// Reject non-finite or negative monetary fields before persisting.
    pub fn validate(&self) -> Result<(), CoreError> {
        let fields = [
            ("monthlyIncome", self.monthly_income),
            ("monthlyExpenses", self.monthly_expenses),
            ("loanAmount", self.loan_amount),
            ("downPayment", self.down_payment),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::ValidationError(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}
