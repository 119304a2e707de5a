use crate::models::emergency::{EmergencyFundSnapshot, EmergencyStatus};

/// Replace negative or non-finite inputs with 0.
pub(crate) fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Emergency-fund coverage for a vault total.
///
/// - target = expenses × months
/// - months covered = vault / expenses (0 when expenses are 0)
/// - percent funded = vault / target × 100, clamped to [0, 100] (0 when target is 0)
///
/// A target of 0 means no emergency policy is set, which is reported as
/// `NotConfigured` rather than as "0% funded" or "fully covered".
pub fn calculate(monthly_expenses: f64, emergency_months: u32, vault_total: f64) -> EmergencyFundSnapshot {
    let monthly_expenses = sanitize(monthly_expenses);
    let vault_total = sanitize(vault_total);

    let target = monthly_expenses * f64::from(emergency_months);
    let months_covered = if monthly_expenses > 0.0 {
        vault_total / monthly_expenses
    } else {
        0.0
    };
    let percent_funded = if target > 0.0 {
        (vault_total / target * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };

    let status = if target == 0.0 {
        EmergencyStatus::NotConfigured
    } else if percent_funded >= 100.0 {
        EmergencyStatus::FullyCovered
    } else if vault_total == 0.0 {
        EmergencyStatus::Empty
    } else {
        EmergencyStatus::Partial
    };

    EmergencyFundSnapshot {
        monthly_expenses,
        emergency_months,
        target,
        vault_total,
        months_covered,
        percent_funded,
        status,
    }
}
