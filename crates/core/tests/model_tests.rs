// ═══════════════════════════════════════════════════════════════════
// Model Tests — Profile, bucket entries, SpotPrices, FocusSplit
// ═══════════════════════════════════════════════════════════════════

use money_map_core::errors::CoreError;
use money_map_core::models::bucket::{
    BankAccount, BanksDocument, BucketKind, Investment, MetalHolding, MetalsDocument, VaultEntry,
};
use money_map_core::models::emergency::{EmergencyFundSnapshot, EmergencyStatus};
use money_map_core::models::goal::{GoalProjection, GoalStatus};
use money_map_core::models::profile::{FocusMode, Profile, SavingsSubgoal};
use money_map_core::models::spot::SpotPrices;
use serde_json::json;

// ═══════════════════════════════════════════════════════════════════
//  Profile
// ═══════════════════════════════════════════════════════════════════

mod profile {
    use super::*;

    #[test]
    fn default_matches_stored_fallback() {
        let p = Profile::default();
        assert_eq!(p.monthly_income, 0.0);
        assert_eq!(p.monthly_expenses, 0.0);
        assert_eq!(p.emergency_months, 6);
        assert_eq!(p.focus_mode, FocusMode::None);
        assert_eq!(p.savings_subgoal, SavingsSubgoal::None);
        assert_eq!(p.months_to_goal, 0);
    }

    #[test]
    fn deserializes_camel_case_record() {
        let p: Profile = serde_json::from_value(json!({
            "monthlyIncome": 5000,
            "monthlyExpenses": 3000,
            "emergencyMonths": 4,
            "focusMode": "savings",
            "savingsSubgoal": "house",
            "loanAmount": 250000,
            "downPayment": 50000,
            "monthsToGoal": 12
        }))
        .unwrap();
        assert_eq!(p.monthly_income, 5000.0);
        assert_eq!(p.monthly_expenses, 3000.0);
        assert_eq!(p.emergency_months, 4);
        assert_eq!(p.focus_mode, FocusMode::Savings);
        assert_eq!(p.savings_subgoal, SavingsSubgoal::House);
        assert_eq!(p.loan_amount, 250000.0);
        assert_eq!(p.down_payment, 50000.0);
        assert_eq!(p.months_to_goal, 12);
    }

    #[test]
    fn empty_strings_mean_none() {
        let p: Profile = serde_json::from_value(json!({
            "focusMode": "",
            "savingsSubgoal": ""
        }))
        .unwrap();
        assert_eq!(p.focus_mode, FocusMode::None);
        assert_eq!(p.savings_subgoal, SavingsSubgoal::None);
    }

    #[test]
    fn unknown_focus_mode_loads_as_none() {
        let p: Profile = serde_json::from_value(json!({ "focusMode": "yolo" })).unwrap();
        assert_eq!(p.focus_mode, FocusMode::None);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let p: Profile = serde_json::from_value(json!({ "monthlyIncome": 100 })).unwrap();
        assert_eq!(p.monthly_income, 100.0);
        assert_eq!(p.emergency_months, 6);
    }

    #[test]
    fn serializes_enums_as_lowercase_strings() {
        let p = Profile {
            focus_mode: FocusMode::Growth,
            savings_subgoal: SavingsSubgoal::Car,
            ..Profile::default()
        };
        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(v["focusMode"], "growth");
        assert_eq!(v["savingsSubgoal"], "car");
        assert_eq!(v["emergencyMonths"], 6);
    }

    #[test]
    fn non_numeric_income_is_rejected() {
        let result: Result<Profile, _> =
            serde_json::from_value(json!({ "monthlyIncome": "lots" }));
        assert!(result.is_err());
    }

    #[test]
    fn validate_rejects_negative_money() {
        let p = Profile {
            monthly_expenses: -1.0,
            ..Profile::default()
        };
        assert!(matches!(p.validate(), Err(CoreError::ValidationError(_))));
    }

    #[test]
    fn validate_rejects_infinite_money() {
        let p = Profile {
            down_payment: f64::INFINITY,
            ..Profile::default()
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn net_income() {
        let p = Profile {
            monthly_income: 5000.0,
            monthly_expenses: 3200.0,
            ..Profile::default()
        };
        assert_eq!(p.net_income(), 1800.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  FocusMode
// ═══════════════════════════════════════════════════════════════════

mod focus_mode {
    use super::*;

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(FocusMode::from_name("Growth"), Some(FocusMode::Growth));
        assert_eq!(FocusMode::from_name(" PROTECTION "), Some(FocusMode::Protection));
        assert_eq!(FocusMode::from_name("savings"), Some(FocusMode::Savings));
    }

    #[test]
    fn from_name_rejects_none_and_unknown() {
        assert_eq!(FocusMode::from_name("none"), None);
        assert_eq!(FocusMode::from_name(""), None);
        assert_eq!(FocusMode::from_name("aggressive"), None);
    }

    #[test]
    fn display() {
        assert_eq!(FocusMode::Growth.to_string(), "growth");
        assert_eq!(FocusMode::None.to_string(), "none");
        assert_eq!(SavingsSubgoal::House.to_string(), "house");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Bucket entries
// ═══════════════════════════════════════════════════════════════════

mod entries {
    use super::*;

    #[test]
    fn bucket_kind_names() {
        let names: Vec<&str> = BucketKind::ALL.iter().map(|b| b.name()).collect();
        assert_eq!(names, vec!["vault", "banks", "metals", "investments"]);
    }

    #[test]
    fn vault_entry_value() {
        assert_eq!(VaultEntry::new(20.0, 15, Some(2017)).value(), 300.0);
    }

    #[test]
    fn vault_entry_year_defaults_to_null() {
        let e: VaultEntry = serde_json::from_value(json!({ "denomination": 100, "quantity": 3 })).unwrap();
        assert_eq!(e.year, None);
        let v = serde_json::to_value(&e).unwrap();
        assert!(v["year"].is_null());
    }

    #[test]
    fn vault_entry_zero_quantity_is_invalid() {
        assert!(VaultEntry::new(20.0, 0, None).validate().is_err());
    }

    #[test]
    fn vault_entry_negative_denomination_is_invalid() {
        assert!(VaultEntry::new(-5.0, 1, None).validate().is_err());
    }

    #[test]
    fn vault_entry_negative_quantity_fails_to_parse() {
        let result: Result<VaultEntry, _> =
            serde_json::from_value(json!({ "denomination": 10, "quantity": -2 }));
        assert!(result.is_err());
    }

    #[test]
    fn bank_account_uses_type_key() {
        let a: BankAccount =
            serde_json::from_value(json!({ "bank": "Chase", "type": "checking", "amount": 1200.5 }))
                .unwrap();
        assert_eq!(a.account_type, "checking");
        let v = serde_json::to_value(&a).unwrap();
        assert_eq!(v["type"], "checking");
    }

    #[test]
    fn bank_account_validation() {
        assert!(BankAccount::new("Chase", "checking", 10.0).validate().is_ok());
        assert!(BankAccount::new("", "checking", 10.0).validate().is_err());
        assert!(BankAccount::new("Chase", " ", 10.0).validate().is_err());
        assert!(BankAccount::new("Chase", "checking", 0.0).validate().is_err());
        assert!(BankAccount::new("Chase", "checking", f64::NAN).validate().is_err());
    }

    #[test]
    fn metal_holding_camel_case_and_ounces() {
        let h: MetalHolding = serde_json::from_value(json!({
            "metals": "silver", "weight": 1, "quantity": 10, "buyPrice": 24.5, "design": "Eagle"
        }))
        .unwrap();
        assert_eq!(h.buy_price, 24.5);
        assert_eq!(h.ounces(), 10.0);
    }

    #[test]
    fn metal_holding_design_is_optional() {
        let h: MetalHolding = serde_json::from_value(json!({
            "metals": "gold", "weight": 0.1, "quantity": 1, "buyPrice": 200
        }))
        .unwrap();
        assert_eq!(h.design, "");
    }

    #[test]
    fn metal_holding_validation() {
        assert!(MetalHolding::new("gold", 1.0, 1, 0.0, "Bar").validate().is_ok());
        assert!(MetalHolding::new("", 1.0, 1, 0.0, "Bar").validate().is_err());
        assert!(MetalHolding::new("gold", 0.0, 1, 0.0, "Bar").validate().is_err());
        assert!(MetalHolding::new("gold", 1.0, 0, 0.0, "Bar").validate().is_err());
        assert!(MetalHolding::new("gold", 1.0, 1, -1.0, "Bar").validate().is_err());
    }

    #[test]
    fn investment_validation() {
        assert!(Investment::new("Vanguard", "VTI", 1000.0).validate().is_ok());
        assert!(Investment::new("Vanguard", "VTI", 0.0).validate().is_ok());
        assert!(Investment::new("", "VTI", 1.0).validate().is_err());
        assert!(Investment::new("Vanguard", "", 1.0).validate().is_err());
        assert!(Investment::new("Vanguard", "VTI", -1.0).validate().is_err());
    }

    #[test]
    fn documents_default_to_empty_collections() {
        let banks: BanksDocument = serde_json::from_str("{}").unwrap();
        assert!(banks.accounts.is_empty());
        let metals: MetalsDocument = serde_json::from_str(r#"{"holdings": []}"#).unwrap();
        assert!(metals.holdings.is_empty());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  SpotPrices
// ═══════════════════════════════════════════════════════════════════

mod spot_prices {
    use super::*;

    #[test]
    fn default_has_fixed_copper() {
        let s = SpotPrices::default();
        assert_eq!(s.gold, 0.0);
        assert_eq!(s.silver, 0.0);
        assert_eq!(s.copper, 1.99);
        assert!(s.last_updated.is_none());
    }

    #[test]
    fn empty_object_parses_to_default() {
        let s: SpotPrices = serde_json::from_str("{}").unwrap();
        assert_eq!(s, SpotPrices::default());
    }

    #[test]
    fn price_of_is_case_insensitive() {
        let s = SpotPrices {
            gold: 2300.0,
            silver: 28.0,
            ..SpotPrices::default()
        };
        assert_eq!(s.price_of("Gold"), 2300.0);
        assert_eq!(s.price_of("SILVER"), 28.0);
        assert_eq!(s.price_of("copper"), 1.99);
        assert_eq!(s.price_of("unobtainium"), 0.0);
    }

    #[test]
    fn last_updated_round_trips_as_camel_case() {
        let v = json!({ "gold": 1, "silver": 2, "copper": 3, "lastUpdated": "2026-01-02T03:04:05Z" });
        let s: SpotPrices = serde_json::from_value(v).unwrap();
        assert!(s.last_updated.is_some());
        let back = serde_json::to_value(&s).unwrap();
        assert!(back["lastUpdated"].is_string());
    }

    #[test]
    fn validate_rejects_negative() {
        let s = SpotPrices {
            silver: -1.0,
            ..SpotPrices::default()
        };
        assert!(s.validate().is_err());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Derived snapshots
// ═══════════════════════════════════════════════════════════════════

mod derived {
    use super::*;

    fn snapshot(status: EmergencyStatus) -> EmergencyFundSnapshot {
        EmergencyFundSnapshot {
            monthly_expenses: 1000.0,
            emergency_months: 6,
            target: 6000.0,
            vault_total: 1500.0,
            months_covered: 1.5,
            percent_funded: 25.0,
            status,
        }
    }

    #[test]
    fn emergency_messages() {
        assert!(snapshot(EmergencyStatus::NotConfigured)
            .status_message()
            .starts_with("Set aside at least 1 month"));
        assert_eq!(
            snapshot(EmergencyStatus::FullyCovered).status_message(),
            "Emergency Funds: 6 months covered"
        );
        assert_eq!(
            snapshot(EmergencyStatus::Empty).status_message(),
            "Save at least 1 month expenses for an Emergency."
        );
        assert_eq!(
            snapshot(EmergencyStatus::Partial).status_message(),
            "Emergency Funds: 1.5 months covered. Goal: 25% Funded"
        );
    }

    #[test]
    fn partial_message_is_singular_for_one_month() {
        let one = EmergencyFundSnapshot {
            vault_total: 1000.0,
            months_covered: 1.0,
            percent_funded: 100.0 / 6.0,
            ..snapshot(EmergencyStatus::Partial)
        };
        assert_eq!(
            one.status_message(),
            "Emergency Funds: 1.0 month covered. Goal: 17% Funded"
        );

        let under = EmergencyFundSnapshot {
            months_covered: 0.5,
            ..snapshot(EmergencyStatus::Partial)
        };
        assert!(under.status_message().starts_with("Emergency Funds: 0.5 months covered"));
    }

    #[test]
    fn not_configured_is_not_configured() {
        assert!(!snapshot(EmergencyStatus::NotConfigured).is_configured());
        assert!(snapshot(EmergencyStatus::Empty).is_configured());
    }

    #[test]
    fn goal_projection_constructors() {
        assert_eq!(GoalProjection::no_surplus().status, GoalStatus::NoSurplus);
        assert_eq!(GoalProjection::no_surplus().status_message, "no surplus available");
        assert_eq!(GoalProjection::already_covered().status_message, "goal already covered");
        assert_eq!(GoalProjection::on_track(1).status_message, "1 month to goal");
        assert_eq!(GoalProjection::on_track(20).status_message, "20 months to goal");
    }

    #[test]
    fn goal_projection_serializes_camel_case() {
        let v = serde_json::to_value(GoalProjection::on_track(3)).unwrap();
        assert_eq!(v["monthsToGoal"], 3);
        assert_eq!(v["status"], "onTrack");
    }
}
