use crate::models::analytics::IncomeFlow;
use crate::models::focus::{Allocation, FocusSplit};
use crate::models::profile::{FocusMode, Profile};

const GROWTH: FocusSplit = FocusSplit {
    vault: 10,
    banks: 15,
    metals: 15,
    investments: 60,
};

const SAVINGS: FocusSplit = FocusSplit {
    vault: 50,
    banks: 25,
    metals: 10,
    investments: 15,
};

const PROTECTION: FocusSplit = FocusSplit {
    vault: 30,
    banks: 15,
    metals: 40,
    investments: 15,
};

/// Fixed split for a strategy; `FocusMode::None` has none.
pub fn split_for(mode: FocusMode) -> Option<FocusSplit> {
    match mode {
        FocusMode::Growth => Some(GROWTH),
        FocusMode::Savings => Some(SAVINGS),
        FocusMode::Protection => Some(PROTECTION),
        FocusMode::None => None,
    }
}

/// Apply a split to an income. A non-finite income is treated as 0.
pub fn apply(split: FocusSplit, net_income: f64) -> Allocation {
    let net_income = if net_income.is_finite() { net_income } else { 0.0 };
    let share = |percent: u8| f64::from(percent) * net_income / 100.0;
    Allocation {
        vault: share(split.vault),
        banks: share(split.banks),
        metals: share(split.metals),
        investments: share(split.investments),
    }
}

/// Split `net_income` according to the named strategy.
///
/// Unknown names and "none" return `None`: callers leave whatever they
/// displayed before in place.
pub fn allocate(mode: &str, net_income: f64) -> Option<Allocation> {
    let split = split_for(FocusMode::from_name(mode)?)?;
    Some(apply(split, net_income))
}

/// Where next month's surplus goes under the profile's focus mode.
/// Nothing when there is no surplus or no focus mode is set.
pub fn income_flow(profile: &Profile) -> Option<IncomeFlow> {
    let net_income = profile.net_income();
    if !net_income.is_finite() || net_income <= 0.0 {
        return None;
    }
    let split = split_for(profile.focus_mode)?;
    Some(IncomeFlow {
        focus_mode: profile.focus_mode,
        net_income,
        allocation: apply(split, net_income),
    })
}
