use inventory_router::{
    evaluate, use_location, AccessRequirement, AuthState, GuardDecision, NavigateOptions,
    Redirect, LOGIN_PATH, UNAUTHORIZED_PATH,
};
use leptos::prelude::*;
use leptos_router::location::State;
use wasm_bindgen::JsValue;

use crate::logging::{log_guard_decision, use_logger};

/// Renders `children` only when the auth state satisfies the requirement,
/// otherwise replaces the current history entry with a redirect.
///
/// The auth state comes from the `auth` prop, then from context, then
/// falls back to an authenticated admin.
#[component]
pub fn ProtectedRoute(
    children: ChildrenFn,
    #[prop(default = true)] requires_auth: bool,
    #[prop(optional, into)] required_role: Option<String>,
    #[prop(optional)] auth: Option<AuthState>,
) -> impl IntoView {
    let pathname = use_location().pathname;
    let logger = use_logger("protected_route");
    let auth = auth
        .or_else(use_context::<AuthState>)
        .unwrap_or_default();
    let requirement = AccessRequirement {
        requires_auth,
        required_role,
    };

    move || {
        let decision = evaluate(&requirement, &auth, &pathname.get());
        log_guard_decision(&logger, &decision);
        render_decision(decision, &children)
    }
}

fn render_decision(decision: GuardDecision, children: &ChildrenFn) -> AnyView {
    match decision {
        GuardDecision::Open => children().into_any(),
        GuardDecision::RedirectLogin { from } => {
            let options = NavigateOptions {
                replace: true,
                state: State::new(Some(JsValue::from_str(&from))),
                ..Default::default()
            };
            view! { <Redirect path=LOGIN_PATH options=options/> }.into_any()
        }
        GuardDecision::RedirectUnauthorized => {
            let options = NavigateOptions {
                replace: true,
                ..Default::default()
            };
            view! { <Redirect path=UNAUTHORIZED_PATH options=options/> }.into_any()
        }
    }
}
