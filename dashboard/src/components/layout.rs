use inventory_router::{use_location, NAV_ENTRIES};
use leptos::prelude::*;

/// Page frame: header with the logo and the primary navigation, then the
/// routed page.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <div class="layout">
            <header class="header">
                <div class="header-content">
                    <a href="/" class="logo">
                        <h1>"Product Inventory"</h1>
                    </a>
                    <nav class="nav">
                        {NAV_ENTRIES
                            .iter()
                            .map(|entry| {
                                view! {
                                    <a href=entry.href class=move || entry.class(&pathname.get())>
                                        {entry.label}
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </nav>
                </div>
            </header>
            <main class="main-content">{children()}</main>
        </div>
    }
}
