use leptos::prelude::*;

use crate::pages::record::CATEGORY;
use crate::sample::{sample_categories, SampleCategory};

/// Category list with one card per sample category.
#[component]
pub fn CategoriesPage() -> impl IntoView {
    view! {
        <div class="categories">
            <div class="page-header">
                <h1>"Categories"</h1>
                <a href=CATEGORY.new_href() class="btn btn-primary">
                    <span>"+"</span>
                    "Add Category"
                </a>
            </div>

            <div class="categories-content">
                <div class="alert alert-info">
                    <strong>"Coming Soon:"</strong>
                    " Categories list will be implemented in future tasks."
                </div>
                <div class="sample-category-links">
                    <p>"Sample navigation (will be replaced with actual data):"</p>
                    <div class="categories-grid">
                        {sample_categories()
                            .into_iter()
                            .map(|sample| view! { <CategoryLink sample/> })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn CategoryLink(sample: SampleCategory) -> impl IntoView {
    let category = sample.category;
    let count = category.product_count_label().unwrap_or_default();

    view! {
        <a href=category.href() class="category-link">
            <div class="flex items-center gap-4">
                <div class="text-2xl">{sample.icon}</div>
                <div>
                    <h4 class="font-semibold mb-1">{category.name.clone()}</h4>
                    <p class="text-sm text-secondary mb-0">{category.description.clone()}</p>
                    <span class=sample.badge_class>{count}</span>
                </div>
            </div>
        </a>
    }
}
