use serde::{Deserialize, Serialize};

/// Which of the emergency-fund display states applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EmergencyStatus {
    /// Target is 0: the user has not set an emergency policy.
    NotConfigured,
    /// Vault holds at least the full target.
    FullyCovered,
    /// A target exists but the vault is empty.
    Empty,
    /// Some, but not all, of the target is funded.
    Partial,
}

/// Derived emergency-fund state. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyFundSnapshot {
    pub monthly_expenses: f64,
    pub emergency_months: u32,
    /// monthly_expenses × emergency_months
    pub target: f64,
    pub vault_total: f64,
    /// vault_total / monthly_expenses (0 when expenses are 0)
    pub months_covered: f64,
    /// Always within [0, 100].
    pub percent_funded: f64,
    pub status: EmergencyStatus,
}

impl EmergencyFundSnapshot {
    pub fn is_configured(&self) -> bool {
        self.status != EmergencyStatus::NotConfigured
    }

    /// User-facing status line.
    pub fn status_message(&self) -> String {
        match self.status {
            EmergencyStatus::NotConfigured => {
                "Set aside at least 1 month expenses! Settings - Emergency Fund.".to_string()
            }
            EmergencyStatus::FullyCovered => {
                format!("Emergency Funds: {} months covered", self.emergency_months)
            }
            EmergencyStatus::Empty => {
                "Save at least 1 month expenses for an Emergency.".to_string()
            }
            EmergencyStatus::Partial => {
                let covered = format!("{:.1}", self.months_covered);
                let unit = if covered == "1.0" { "month" } else { "months" };
                format!(
                    "Emergency Funds: {covered} {unit} covered. Goal: {:.0}% Funded",
                    self.percent_funded
                )
            }
        }
    }
}
