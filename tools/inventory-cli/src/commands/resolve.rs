//! Resolve a path the way the dashboard would.

use anyhow::Result;
use inventory_router::{
    active_entry, evaluate, AccessRequirement, AppRoute, AuthState, Breadcrumb, FormMode,
    GuardDecision, Page,
};
use serde::Serialize;

use super::ResolveArgs;
use crate::context::Context;
use crate::output::decision_badge;

/// Everything the dashboard decides for one path.
#[derive(Debug, Serialize)]
pub struct Resolution {
    pub path: String,
    pub page: Page,
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_mode: Option<FormMode>,
    pub requirement: AccessRequirement,
    pub guard: GuardDecision,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_nav: Option<&'static str>,
    pub breadcrumbs: Vec<Breadcrumb>,
}

/// Run the resolve command.
pub fn run(args: ResolveArgs, ctx: &Context) -> Result<()> {
    let auth = visitor(&args, ctx);
    let resolution = resolve(&args.path, &auth, args.require_role.as_deref());

    tracing::debug!(
        path = %resolution.path,
        page = ?resolution.page,
        authenticated = auth.is_authenticated,
        role = %auth.user_role,
        "resolved"
    );

    if ctx.output.is_json() {
        ctx.output.json(&resolution);
        return Ok(());
    }

    ctx.output.header(&format!("Resolve {}", resolution.path));
    ctx.output.kv("page", resolution.title);
    if let Some(ref mode) = resolution.form_mode {
        let mode = match mode {
            FormMode::Create => "create".to_string(),
            FormMode::Edit(id) => format!("edit {}", id),
        };
        ctx.output.kv("form", &mode);
    }
    ctx.output.kv("guard", &describe(&resolution.guard));
    ctx.output
        .kv("nav", resolution.active_nav.unwrap_or("(none)"));

    if !resolution.breadcrumbs.is_empty() {
        ctx.output.info("Breadcrumbs:");
        for crumb in &resolution.breadcrumbs {
            match crumb.href {
                Some(ref href) => ctx.output.list_item(&format!("{} ({})", crumb.label, href)),
                None => ctx.output.list_item(crumb.label),
            }
        }
    }

    if resolution.page == Page::NotFound {
        ctx.output.warn("No route matches this path");
    }

    Ok(())
}

/// The visitor: config `[auth]` adjusted by the command line flags.
fn visitor(args: &ResolveArgs, ctx: &Context) -> AuthState {
    let mut auth = AuthState::from(&ctx.config.auth);
    if args.anonymous {
        auth.is_authenticated = false;
    }
    if let Some(ref role) = args.role {
        auth.user_role = role.clone();
    }
    auth
}

/// Resolve `raw_path` for `auth`. A `required_role` applies only to routes
/// behind the guard.
pub fn resolve(raw_path: &str, auth: &AuthState, required_role: Option<&str>) -> Resolution {
    let path = strip_query(raw_path);
    let route = AppRoute::resolve(path);

    let mut requirement = route.requirement();
    if requirement.requires_auth {
        requirement.required_role = required_role.map(str::to_string);
    }
    let guard = evaluate(&requirement, auth, path);

    Resolution {
        path: path.to_string(),
        page: route.page(),
        title: route.page().title(),
        form_mode: route.form_mode(),
        requirement,
        guard,
        active_nav: active_entry(path).map(|entry| entry.label),
        breadcrumbs: route.breadcrumbs(),
    }
}

/// Drop the query string and fragment; the router matches on the path only.
fn strip_query(path: &str) -> &str {
    path.split(['?', '#']).next().unwrap_or(path)
}

fn describe(decision: &GuardDecision) -> String {
    match decision {
        GuardDecision::Open => decision_badge("open"),
        GuardDecision::RedirectLogin { from } => {
            format!("{} (from {})", decision_badge("redirect_login"), from)
        }
        GuardDecision::RedirectUnauthorized => decision_badge("redirect_unauthorized"),
    }
}
