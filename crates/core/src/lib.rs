pub mod buckets;
pub mod errors;
pub mod models;
pub mod providers;
pub mod services;
pub mod storage;

use buckets::registry::AssetRegistry;
use models::{
    analytics::{AssetBreakdown, FinancialSummary, MetalPosition},
    bucket::BucketKind,
    emergency::EmergencyFundSnapshot,
    focus::Allocation,
    goal::GoalProjection,
    profile::Profile,
    spot::SpotPrices,
};
use services::{emergency_service, focus_service, goal_service, metals_service};
use std::sync::Arc;
use storage::traits::AssetStore;
use tracing::warn;

use errors::CoreError;

/// Main entry point for the Money Map core library.
///
/// Owns the bucket registry and the store it reads from, and computes every
/// derived view. Nothing derived is cached: each call reads fresh inputs.
#[must_use]
pub struct MoneyMap {
    store: Arc<dyn AssetStore>,
    registry: AssetRegistry,
}

impl std::fmt::Debug for MoneyMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MoneyMap")
            .field("buckets", &self.registry.names())
            .finish()
    }
}

impl MoneyMap {
    /// Tracker over `store` with the four standard buckets registered.
    pub fn new(store: Arc<dyn AssetStore>) -> Self {
        let registry = AssetRegistry::new_with_defaults(Arc::clone(&store));
        Self { store, registry }
    }

    /// Tracker with a caller-built registry (custom or extra buckets).
    pub fn with_registry(store: Arc<dyn AssetStore>, registry: AssetRegistry) -> Self {
        Self { store, registry }
    }

    pub fn registry(&self) -> &AssetRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut AssetRegistry {
        &mut self.registry
    }

    pub fn store(&self) -> &Arc<dyn AssetStore> {
        &self.store
    }

    // ── Profile ─────────────────────────────────────────────────────

    /// Stored profile, or the default profile if it cannot be read.
    pub async fn profile(&self) -> Profile {
        match self.store.load_profile().await {
            Ok(profile) => profile,
            Err(e) => {
                warn!(error = %e, "Profile unavailable, using defaults");
                Profile::default()
            }
        }
    }

    /// Validate and replace the stored profile.
    ///
    /// `monthsToGoal` is derived, so whatever the caller sent for it is
    /// replaced by the projection for the new profile.
    pub async fn save_profile(&self, mut profile: Profile) -> Result<Profile, CoreError> {
        profile.validate()?;
        let breakdown = self.registry.breakdown().await;
        let emergency = self.emergency_for(&profile, &breakdown);
        let down_payment = resolve_down_payment(&profile, None);
        profile.months_to_goal = self
            .project_goal(&profile, &breakdown, &emergency, down_payment)
            .months_to_goal;
        self.store.save_profile(&profile).await?;
        Ok(profile)
    }

    // ── Totals ──────────────────────────────────────────────────────

    /// Grand total of every bucket that could be queried.
    pub async fn aggregate(&self) -> f64 {
        self.registry.aggregate().await
    }

    /// Per-bucket totals plus the grand total.
    pub async fn breakdown(&self) -> AssetBreakdown {
        self.registry.breakdown().await
    }

    // ── Calculators ─────────────────────────────────────────────────

    /// Emergency-fund coverage from the profile and the vault bucket.
    pub async fn calculate_emergency_fund(&self) -> EmergencyFundSnapshot {
        let profile = self.profile().await;
        let vault_total = self.bucket_total_or_zero(BucketKind::Vault).await;
        emergency_service::calculate(profile.monthly_expenses, profile.emergency_months, vault_total)
    }

    /// Months until `down_payment` (or the profile's own target) is saved.
    ///
    /// The vault and bank totals and the emergency target are read first;
    /// the projection is always computed from those fresh values.
    pub async fn calculate_months_to_goal(&self, down_payment: Option<f64>) -> GoalProjection {
        let profile = self.profile().await;
        let breakdown = self.registry.breakdown().await;
        let emergency = self.emergency_for(&profile, &breakdown);
        let target = resolve_down_payment(&profile, down_payment);
        self.project_goal(&profile, &breakdown, &emergency, target)
    }

    /// Split `net_income` by the named focus mode; `None` for unknown modes.
    #[must_use]
    pub fn allocate(&self, mode: &str, net_income: f64) -> Option<Allocation> {
        focus_service::allocate(mode, net_income)
    }

    /// Metal positions valued at the cached spot prices.
    pub async fn metal_positions(&self, filter: Option<&str>) -> Result<Vec<MetalPosition>, CoreError> {
        let holdings = self.store.load_metals().await?;
        let spot = match self.store.load_spot_prices().await {
            Ok(spot) => spot,
            Err(e) => {
                warn!(error = %e, "Spot price cache unavailable, using defaults");
                SpotPrices::default()
            }
        };
        Ok(metals_service::positions(&holdings, &spot, filter))
    }

    /// Every derived view from a single round of reads.
    ///
    /// Order matters: bucket totals first, then the emergency fund (needs
    /// the vault total), then the goal timeline (needs the emergency target).
    pub async fn summary(&self, down_payment: Option<f64>) -> FinancialSummary {
        let profile = self.profile().await;
        let breakdown = self.registry.breakdown().await;
        let emergency = self.emergency_for(&profile, &breakdown);
        let affordability = goal_service::affordability(profile.monthly_income, profile.savings_subgoal);
        let down_payment_target = resolve_down_payment(&profile, down_payment);
        let goal = self.project_goal(&profile, &breakdown, &emergency, down_payment_target);

        FinancialSummary {
            allocation: breakdown.shares(),
            emergency_message: emergency.status_message(),
            emergency_fund: emergency,
            affordability,
            down_payment_target,
            goal,
            income_flow: focus_service::income_flow(&profile),
            breakdown,
        }
    }

    // ── Internal helpers ────────────────────────────────────────────

    async fn bucket_total_or_zero(&self, bucket: BucketKind) -> f64 {
        match self.registry.total_of(bucket.name()).await {
            Ok(total) => total,
            Err(e) => {
                warn!(bucket = bucket.name(), error = %e, "Bucket unavailable, counting it as 0");
                0.0
            }
        }
    }

    fn emergency_for(&self, profile: &Profile, breakdown: &AssetBreakdown) -> EmergencyFundSnapshot {
        let vault_total = breakdown.total_of(BucketKind::Vault.name()).unwrap_or(0.0);
        emergency_service::calculate(profile.monthly_expenses, profile.emergency_months, vault_total)
    }

    fn project_goal(
        &self,
        profile: &Profile,
        breakdown: &AssetBreakdown,
        emergency: &EmergencyFundSnapshot,
        down_payment_target: f64,
    ) -> GoalProjection {
        goal_service::months_to_goal(&goal_service::GoalInputs {
            monthly_income: profile.monthly_income,
            monthly_expenses: profile.monthly_expenses,
            vault_total: emergency.vault_total,
            bank_total: breakdown.total_of(BucketKind::Banks.name()).unwrap_or(0.0),
            down_payment_target,
            emergency_target: emergency.target,
        })
    }
}

/// Down payment to plan for: the explicit request, else the profile's own
/// target, else the affordability estimate for its savings sub-goal.
fn resolve_down_payment(profile: &Profile, requested: Option<f64>) -> f64 {
    if let Some(amount) = requested.filter(|a| a.is_finite() && *a >= 0.0) {
        return amount;
    }
    if profile.down_payment > 0.0 {
        return profile.down_payment;
    }
    goal_service::affordability(profile.monthly_income, profile.savings_subgoal)
        .map(|a| a.down_payment_target)
        .unwrap_or(0.0)
}
