use leptos::prelude::*;

/// Shown when the visitor lacks the role a page requires.
#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <div class="unauthorized">
            <h1>"Unauthorized"</h1>
            <p>"You don't have permission to access this page."</p>
        </div>
    }
}
