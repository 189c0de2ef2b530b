//! Pricing plans and account rosters.
//!
//! Simple CRUD records with no invariants beyond unique IDs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a pricing plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlanId(Uuid);

impl PlanId {
    /// Create a new unique plan ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PlanId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PlanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a contractor or admin account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(Uuid);

impl AccountId {
    /// Create a new unique account ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Billing cadence of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingInterval {
    /// Billed monthly.
    Monthly,
    /// Billed yearly.
    Yearly,
}

/// A subscription plan shown on the pricing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingPlan {
    /// Unique identifier.
    pub id: PlanId,
    /// Plan name.
    pub name: String,
    /// Price in dollars per interval.
    pub price: f64,
    /// Billing cadence.
    pub interval: BillingInterval,
    /// Marketing feature bullets.
    pub features: Vec<String>,
    /// Highlighted as the recommended plan.
    pub recommended: bool,
}

impl PricingPlan {
    /// Create a plan with a fresh ID.
    #[must_use]
    pub fn new(name: impl Into<String>, price: f64, interval: BillingInterval) -> Self {
        Self {
            id: PlanId::new(),
            name: name.into(),
            price,
            interval,
            features: Vec::new(),
            recommended: false,
        }
    }
}

/// Lifecycle status of a contractor account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    /// Paying and active.
    Active,
    /// Access suspended.
    Suspended,
}

/// A contractor account managed from the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractorAccount {
    /// Unique identifier.
    pub id: AccountId,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Name of the subscribed plan.
    pub plan: String,
    /// Lifecycle status.
    pub status: AccountStatus,
}

impl ContractorAccount {
    /// Create an active account with a fresh ID.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, plan: impl Into<String>) -> Self {
        Self {
            id: AccountId::new(),
            name: name.into(),
            email: email.into(),
            plan: plan.into(),
            status: AccountStatus::Active,
        }
    }
}

/// Admin tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminRole {
    /// Full-access administrator.
    Super,
    /// Restricted administrator.
    Sub,
}

/// Per-admin capability switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminPermissions {
    /// May manage contractor accounts.
    pub manage_contractors: bool,
    /// May manage other admins.
    pub manage_admins: bool,
}

/// An administrator account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUser {
    /// Unique identifier.
    pub id: AccountId,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Admin tier.
    pub role: AdminRole,
    /// Capability switches.
    pub permissions: AdminPermissions,
}

impl AdminUser {
    /// Create a sub-admin with no capabilities and a fresh ID.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: AccountId::new(),
            name: name.into(),
            email: email.into(),
            role: AdminRole::Sub,
            permissions: AdminPermissions::default(),
        }
    }
}
