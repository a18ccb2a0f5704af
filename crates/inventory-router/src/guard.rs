//! Route guard: decides whether a page renders or redirects.

use serde::{Deserialize, Serialize};

/// Where unauthenticated visitors are sent.
pub const LOGIN_PATH: &str = "/login";

/// Where visitors without the required role are sent.
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

/// Role assumed while there is no real session source.
pub const DEFAULT_ROLE: &str = "admin";

/// What a route demands of the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRequirement {
    pub requires_auth: bool,
    pub required_role: Option<String>,
}

impl AccessRequirement {
    /// Any visitor may render the route.
    pub fn public() -> Self {
        Self {
            requires_auth: false,
            required_role: None,
        }
    }

    /// Visitor must be signed in.
    pub fn authenticated() -> Self {
        Self {
            requires_auth: true,
            required_role: None,
        }
    }

    /// Visitor must be signed in with exactly this role.
    pub fn role(role: impl Into<String>) -> Self {
        Self {
            requires_auth: true,
            required_role: Some(role.into()),
        }
    }
}

impl Default for AccessRequirement {
    fn default() -> Self {
        Self::authenticated()
    }
}

/// The visitor's authentication state.
///
/// The default is a signed-in `admin`, which lets every route through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub user_role: String,
}

impl AuthState {
    pub fn new(is_authenticated: bool, user_role: impl Into<String>) -> Self {
        Self {
            is_authenticated,
            user_role: user_role.into(),
        }
    }

    /// A visitor who is not signed in.
    pub fn anonymous() -> Self {
        Self::new(false, DEFAULT_ROLE)
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new(true, DEFAULT_ROLE)
    }
}

/// Outcome of the guard for one render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum GuardDecision {
    /// Render the protected page.
    Open,
    /// Send the visitor to the login page, remembering where they were.
    RedirectLogin { from: String },
    /// Send the visitor to the unauthorized page.
    RedirectUnauthorized,
}

impl GuardDecision {
    pub fn is_open(&self) -> bool {
        matches!(self, GuardDecision::Open)
    }

    /// Path to redirect to, or `None` when the page renders.
    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            GuardDecision::Open => None,
            GuardDecision::RedirectLogin { .. } => Some(LOGIN_PATH),
            GuardDecision::RedirectUnauthorized => Some(UNAUTHORIZED_PATH),
        }
    }
}

/// Evaluate the guard for a visitor on `current_path`.
///
/// Checks run in order: routes that do not require auth are open,
/// unauthenticated visitors go to login, a role mismatch goes to
/// unauthorized, everything else is open. Nothing is cached; callers
/// re-evaluate on every render.
pub fn evaluate(
    requirement: &AccessRequirement,
    auth: &AuthState,
    current_path: &str,
) -> GuardDecision {
    if !requirement.requires_auth {
        return GuardDecision::Open;
    }

    if !auth.is_authenticated {
        tracing::debug!(path = current_path, "guard: not authenticated, redirecting to login");
        return GuardDecision::RedirectLogin {
            from: current_path.to_string(),
        };
    }

    if let Some(required) = requirement.required_role.as_deref() {
        if auth.user_role != required {
            tracing::debug!(
                path = current_path,
                required,
                role = %auth.user_role,
                "guard: role mismatch, redirecting to unauthorized"
            );
            return GuardDecision::RedirectUnauthorized;
        }
    }

    GuardDecision::Open
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_route_is_always_open() {
        let req = AccessRequirement {
            requires_auth: false,
            required_role: Some("manager".to_string()),
        };
        for auth in [
            AuthState::default(),
            AuthState::anonymous(),
            AuthState::new(true, "viewer"),
        ] {
            assert_eq!(evaluate(&req, &auth, "/products"), GuardDecision::Open);
        }
    }

    #[test]
    fn test_unauthenticated_redirects_to_login() {
        for req in [
            AccessRequirement::authenticated(),
            AccessRequirement::role("manager"),
            AccessRequirement::role("admin"),
        ] {
            let decision = evaluate(&req, &AuthState::anonymous(), "/products/42");
            assert_eq!(
                decision,
                GuardDecision::RedirectLogin {
                    from: "/products/42".to_string()
                }
            );
            assert_eq!(decision.redirect_target(), Some("/login"));
        }
    }

    #[test]
    fn test_role_mismatch_redirects_to_unauthorized() {
        let decision = evaluate(
            &AccessRequirement::role("manager"),
            &AuthState::new(true, "admin"),
            "/categories",
        );
        assert_eq!(decision, GuardDecision::RedirectUnauthorized);
        assert_eq!(decision.redirect_target(), Some("/unauthorized"));
    }

    #[test]
    fn test_matching_role_is_open() {
        let decision = evaluate(
            &AccessRequirement::role("admin"),
            &AuthState::default(),
            "/categories",
        );
        assert!(decision.is_open());
        assert_eq!(decision.redirect_target(), None);
    }

    #[test]
    fn test_defaults_let_everything_through() {
        let decision = evaluate(
            &AccessRequirement::default(),
            &AuthState::default(),
            "/products/new",
        );
        assert_eq!(decision, GuardDecision::Open);
    }

    #[test]
    fn test_role_comparison_is_exact() {
        let decision = evaluate(
            &AccessRequirement::role("Admin"),
            &AuthState::default(),
            "/",
        );
        assert_eq!(decision, GuardDecision::RedirectUnauthorized);
    }

    #[test]
    fn test_decision_serializes_tagged() {
        let json = serde_json::to_value(GuardDecision::RedirectLogin {
            from: "/x".to_string(),
        })
        .unwrap();
        assert_eq!(json["decision"], "redirect_login");
        assert_eq!(json["from"], "/x");
    }
}
