use inventory_core::config::AppConfig;
use leptos::prelude::*;

use crate::logging::use_logger;
use crate::pages::record::PRODUCT;
use crate::sample::{sample_products, SampleProduct, CATEGORY_FILTERS};

/// Product list: search controls and sample links until the list is
/// backed by the API.
#[component]
pub fn ProductsPage() -> impl IntoView {
    let threshold = use_context::<AppConfig>()
        .unwrap_or_default()
        .settings
        .low_stock_threshold;
    let logger = use_logger("products");

    let on_search = move |ev| {
        logger
            .debug_builder("Search input")
            .field("query", event_target_value(&ev))
            .emit();
    };

    view! {
        <div class="products">
            <div class="page-header">
                <h1>"Products"</h1>
                <a href=PRODUCT.new_href() class="btn btn-primary">
                    <span>"+"</span>
                    "Add Product"
                </a>
            </div>

            <div class="products-content">
                <div class="search-filters">
                    <div class="search-input">
                        <input
                            type="text"
                            placeholder="Search products..."
                            class="form-input"
                            on:input=on_search
                        />
                    </div>
                    <select class="form-select filter-select" aria-label="Filter by category">
                        <option value="">"All Categories"</option>
                        {CATEGORY_FILTERS
                            .iter()
                            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </div>

                <div class="products-list">
                    <div class="alert alert-info">
                        <strong>"Coming Soon:"</strong>
                        " Product list will be implemented in future tasks."
                    </div>
                    <div class="sample-product-links">
                        <p>"Sample navigation (will be replaced with actual data):"</p>
                        {sample_products(threshold)
                            .into_iter()
                            .map(|sample| view! { <ProductLink sample threshold/> })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProductLink(sample: SampleProduct, threshold: i64) -> impl IntoView {
    let status = sample.product.stock_status(threshold);

    view! {
        <a href=sample.product.href() class="product-link">
            {sample.label()}
            <span class=status.badge_class()>{status.label()}</span>
        </a>
    }
}
