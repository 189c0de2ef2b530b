//! Application context: root-owned state passed by reference.
//!
//! The root owns one [`AppContext`]; views receive read access plus the
//! narrow mutators below. Nothing here is ambient or global.

use reno_core::{
    AccountId, AdminPermissions, AdminRole, AdminUser, BillingInterval, ContractorAccount,
    Material, MaterialCatalog, PlanId, PricingPlan, ProjectStatus, ProjectStore, Route,
    SiteContent, UserRole,
};

/// The signed-in contractor's profile.
#[derive(Debug, Clone, Default)]
pub struct ContractorProfile {
    /// Display name.
    pub name: String,
    /// Avatar image location.
    pub avatar_url: String,
}

/// The signed-in administrator's profile.
#[derive(Debug, Clone, Default)]
pub struct AdminProfile {
    /// Display name.
    pub name: String,
    /// Avatar image location.
    pub avatar_url: String,
}

/// Application-wide state: role, profiles, catalogs, content, and rosters.
#[derive(Debug, Clone)]
pub struct AppContext {
    role: UserRole,
    /// Contractor profile (settings screen).
    pub contractor: ContractorProfile,
    /// Admin profile (admin settings screen).
    pub admin: AdminProfile,
    /// Shared materials library.
    pub materials: MaterialCatalog,
    job_tags: Vec<String>,
    /// Typed marketing-site content.
    pub content: SiteContent,
    /// In-memory project collection.
    pub projects: ProjectStore,
    plans: Vec<PricingPlan>,
    contractors: Vec<ContractorAccount>,
    admins: Vec<AdminUser>,
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppContext {
    /// Create a context with default content and empty collections.
    #[must_use]
    pub fn new() -> Self {
        Self {
            role: UserRole::Visitor,
            contractor: ContractorProfile::default(),
            admin: AdminProfile {
                name: "Administrator".to_string(),
                avatar_url: String::new(),
            },
            materials: MaterialCatalog::new(),
            job_tags: vec![
                ProjectStatus::OpenQuote.label().to_string(),
                ProjectStatus::OpenJob.label().to_string(),
                ProjectStatus::Complete.label().to_string(),
            ],
            content: SiteContent::default(),
            projects: ProjectStore::new(),
            plans: Vec::new(),
            contractors: Vec::new(),
            admins: Vec::new(),
        }
    }

    /// Create a context seeded with demo data.
    #[must_use]
    pub fn sample() -> Self {
        let mut context = Self::new();
        context.contractor = ContractorProfile {
            name: "Mike Builder".to_string(),
            avatar_url: "https://cdn.renoviz.app/avatars/mike.jpg".to_string(),
        };

        for material in [
            Material::new(
                "Natural Oak Wide Plank",
                "Flooring",
                "Hardwood",
                "6-inch wide natural oak planks with a matte finish.",
                "https://cdn.renoviz.app/materials/oak.jpg",
            ),
            Material::new(
                "Calacatta Gold",
                "Countertops",
                "Quartz",
                "White quartz with bold grey and gold veining.",
                "https://cdn.renoviz.app/materials/calacatta.jpg",
            ),
            Material::new(
                "Classic White Subway",
                "Tile",
                "Ceramic",
                "3x6 inch glossy white ceramic subway tile.",
                "https://cdn.renoviz.app/materials/subway.jpg",
            ),
            Material::new(
                "Repose Gray",
                "Paint",
                "Sherwin-Williams",
                "A warm gray neutral paint color.",
                "https://cdn.renoviz.app/materials/repose.jpg",
            ),
            Material::new(
                "Hale Navy",
                "Paint",
                "Benjamin Moore",
                "A deeply saturated classic navy blue.",
                "https://cdn.renoviz.app/materials/hale.jpg",
            ),
        ] {
            context.materials.add(material);
        }

        let mut starter = PricingPlan::new("Starter", 29.0, BillingInterval::Monthly);
        starter.features = vec![
            "10 visualizations / month".to_string(),
            "1K resolution".to_string(),
        ];
        let mut pro = PricingPlan::new("Pro", 79.0, BillingInterval::Monthly);
        pro.features = vec![
            "Unlimited visualizations".to_string(),
            "Up to 4K resolution".to_string(),
            "Proposal export".to_string(),
        ];
        pro.recommended = true;
        context.plans = vec![starter, pro];

        context.contractors = vec![
            ContractorAccount::new("Mike Builder", "mike@example.com", "Pro"),
            ContractorAccount::new("Dana Ortiz", "dana@example.com", "Starter"),
        ];

        let mut main_admin = AdminUser::new("Main Admin", "admin@renoviz.app");
        main_admin.role = AdminRole::Super;
        main_admin.permissions = AdminPermissions {
            manage_contractors: true,
            manage_admins: true,
        };
        context.admins = vec![main_admin, AdminUser::new("Support Rep", "support@renoviz.app")];

        context
    }

    /// The current role.
    #[must_use]
    pub fn role(&self) -> UserRole {
        self.role
    }

    /// Sign in as the given role.
    pub fn sign_in(&mut self, role: UserRole) {
        tracing::info!("Signed in as {role:?}");
        self.role = role;
    }

    /// Sign out back to visitor.
    pub fn sign_out(&mut self) {
        self.role = UserRole::Visitor;
    }

    /// Resolve a requested route against the current role. The single
    /// access check of the application.
    #[must_use]
    pub fn resolve_route(&self, requested: Route) -> Route {
        self.role.dispatch(requested)
    }

    /// Job status tags, in display order.
    #[must_use]
    pub fn job_tags(&self) -> &[String] {
        &self.job_tags
    }

    /// Add a job tag. Returns `false` when the tag already exists or is
    /// blank.
    pub fn add_job_tag(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        let trimmed = tag.trim();
        if trimmed.is_empty() || self.job_tags.iter().any(|t| t == trimmed) {
            return false;
        }
        self.job_tags.push(trimmed.to_string());
        true
    }

    /// Remove a job tag. Returns `false` when it was not present.
    pub fn remove_job_tag(&mut self, tag: &str) -> bool {
        let before = self.job_tags.len();
        self.job_tags.retain(|t| t != tag);
        self.job_tags.len() != before
    }

    /// Pricing plans, in display order.
    #[must_use]
    pub fn plans(&self) -> &[PricingPlan] {
        &self.plans
    }

    /// Insert or update a plan, matched by ID.
    pub fn upsert_plan(&mut self, plan: PricingPlan) {
        match self.plans.iter_mut().find(|p| p.id == plan.id) {
            Some(slot) => *slot = plan,
            None => self.plans.push(plan),
        }
    }

    /// Remove a plan by ID. Returns `false` when it was not present.
    pub fn remove_plan(&mut self, id: PlanId) -> bool {
        let before = self.plans.len();
        self.plans.retain(|p| p.id != id);
        self.plans.len() != before
    }

    /// Contractor accounts, in display order.
    #[must_use]
    pub fn contractors(&self) -> &[ContractorAccount] {
        &self.contractors
    }

    /// Insert or update a contractor account, matched by ID.
    pub fn upsert_contractor(&mut self, account: ContractorAccount) {
        match self.contractors.iter_mut().find(|c| c.id == account.id) {
            Some(slot) => *slot = account,
            None => self.contractors.push(account),
        }
    }

    /// Remove a contractor account by ID. Returns `false` when absent.
    pub fn remove_contractor(&mut self, id: AccountId) -> bool {
        let before = self.contractors.len();
        self.contractors.retain(|c| c.id != id);
        self.contractors.len() != before
    }

    /// Admin users, in display order.
    #[must_use]
    pub fn admins(&self) -> &[AdminUser] {
        &self.admins
    }

    /// Insert or update an admin user, matched by ID.
    pub fn upsert_admin(&mut self, admin: AdminUser) {
        match self.admins.iter_mut().find(|a| a.id == admin.id) {
            Some(slot) => *slot = admin,
            None => self.admins.push(admin),
        }
    }

    /// Remove an admin user by ID. Returns `false` when absent.
    pub fn remove_admin(&mut self, id: AccountId) -> bool {
        let before = self.admins.len();
        self.admins.retain(|a| a.id != id);
        self.admins.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_job_tags_match_statuses() {
        let context = AppContext::new();
        assert_eq!(
            context.job_tags(),
            &["Open Quote", "Open Job", "Complete"]
        );
    }

    #[test]
    fn test_job_tags_are_unique() {
        let mut context = AppContext::new();
        assert!(context.add_job_tag("On Hold"));
        assert!(!context.add_job_tag("On Hold"));
        assert!(!context.add_job_tag("   "));
        assert!(context.remove_job_tag("On Hold"));
        assert!(!context.remove_job_tag("On Hold"));
    }

    #[test]
    fn test_route_dispatch_follows_role() {
        let mut context = AppContext::new();
        assert_eq!(context.resolve_route(Route::Dashboard), Route::Login);

        context.sign_in(UserRole::Contractor);
        assert_eq!(context.resolve_route(Route::Dashboard), Route::Dashboard);

        context.sign_out();
        assert_eq!(context.resolve_route(Route::Dashboard), Route::Login);
    }

    #[test]
    fn test_plan_upsert_and_remove() {
        let mut context = AppContext::new();
        let mut plan = PricingPlan::new("Starter", 29.0, BillingInterval::Monthly);
        let id = plan.id;

        context.upsert_plan(plan.clone());
        assert_eq!(context.plans().len(), 1);

        plan.price = 39.0;
        context.upsert_plan(plan);
        assert_eq!(context.plans().len(), 1);
        assert!((context.plans()[0].price - 39.0).abs() < f64::EPSILON);

        assert!(context.remove_plan(id));
        assert!(context.plans().is_empty());
    }

    #[test]
    fn test_sample_context_is_seeded() {
        let context = AppContext::sample();
        assert!(!context.materials.is_empty());
        assert_eq!(context.plans().len(), 2);
        assert_eq!(context.contractors().len(), 2);
        assert_eq!(context.admins().len(), 2);
    }
}
