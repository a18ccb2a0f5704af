use inventory_router::{use_location, AppRoute};
use leptos::prelude::*;

/// Breadcrumb trail for the current location. Renders nothing on pages
/// without a trail.
#[component]
pub fn Breadcrumbs() -> impl IntoView {
    let pathname = use_location().pathname;

    move || {
        let crumbs = AppRoute::resolve(&pathname.get()).breadcrumbs();
        let last = crumbs.len().saturating_sub(1);

        (!crumbs.is_empty()).then(|| {
            view! {
                <div class="breadcrumb">
                    {crumbs
                        .into_iter()
                        .enumerate()
                        .map(|(i, crumb)| {
                            let separator = (i < last).then(|| view! { <span>" / "</span> });
                            match crumb.href {
                                Some(href) => view! { <a href=href>{crumb.label}</a> {separator} }.into_any(),
                                None => view! { <span>{crumb.label}</span> {separator} }.into_any(),
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            }
        })
    }
}
