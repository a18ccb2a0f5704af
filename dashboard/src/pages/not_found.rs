use inventory_router::NOT_FOUND_LINKS;
use leptos::prelude::*;

/// Fallback for any path outside the route table.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <div class="not-found-content">
                <h1>"404"</h1>
                <h2>"Page Not Found"</h2>
                <p>"The page you're looking for doesn't exist or has been moved."</p>
                <div class="not-found-actions">
                    {NOT_FOUND_LINKS
                        .iter()
                        .enumerate()
                        .map(|(i, (label, href))| {
                            let class = if i == 0 { "btn btn-primary" } else { "btn btn-secondary" };
                            view! { <a href=*href class=class>{*label}</a> }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}
