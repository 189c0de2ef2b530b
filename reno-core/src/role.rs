//! Roles and route dispatch.
//!
//! Access decisions happen once, at the routing boundary, by dispatching over
//! the closed role set instead of re-checking the role inside each view.

use serde::{Deserialize, Serialize};

/// Application roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Anonymous marketing-site visitor.
    Visitor,
    /// Signed-in contractor.
    Contractor,
    /// Signed-in administrator.
    Admin,
}

/// Top-level routes of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    /// Public marketing page.
    Marketing,
    /// Login form.
    Login,
    /// Signup form.
    Signup,
    /// Contractor dashboard (projects, wizard, settings).
    Dashboard,
    /// Admin dashboard (content, users, plans, tags).
    Admin,
}

impl UserRole {
    /// The routes this role may enter.
    #[must_use]
    pub const fn allowed_routes(self) -> &'static [Route] {
        match self {
            Self::Visitor => &[Route::Marketing, Route::Login, Route::Signup],
            Self::Contractor => &[Route::Marketing, Route::Login, Route::Signup, Route::Dashboard],
            Self::Admin => &[Route::Marketing, Route::Login, Route::Signup, Route::Admin],
        }
    }

    /// Whether this role may enter the given route.
    #[must_use]
    pub fn can_access(self, route: Route) -> bool {
        self.allowed_routes().contains(&route)
    }

    /// Resolve a requested route: the route itself when allowed, otherwise
    /// the login redirect.
    #[must_use]
    pub fn dispatch(self, requested: Route) -> Route {
        if self.can_access(requested) {
            requested
        } else {
            tracing::debug!("{self:?} denied {requested:?}, redirecting to login");
            Route::Login
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visitor_cannot_reach_dashboards() {
        assert!(!UserRole::Visitor.can_access(Route::Dashboard));
        assert!(!UserRole::Visitor.can_access(Route::Admin));
        assert!(UserRole::Visitor.can_access(Route::Marketing));
    }

    #[test]
    fn test_contractor_and_admin_are_disjoint() {
        assert!(UserRole::Contractor.can_access(Route::Dashboard));
        assert!(!UserRole::Contractor.can_access(Route::Admin));
        assert!(UserRole::Admin.can_access(Route::Admin));
        assert!(!UserRole::Admin.can_access(Route::Dashboard));
    }

    #[test]
    fn test_dispatch_redirects_to_login() {
        assert_eq!(UserRole::Visitor.dispatch(Route::Dashboard), Route::Login);
        assert_eq!(
            UserRole::Contractor.dispatch(Route::Dashboard),
            Route::Dashboard
        );
    }
}
