use inventory_core::config::AppConfig;
use inventory_router::{use_navigate, FormMode};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::browser::go_back;
use crate::components::Breadcrumbs;
use crate::logging::use_logger;
use crate::pages::record::PRODUCT;

/// Create or edit a product.
#[component]
pub fn ProductFormPage(mode: FormMode) -> impl IntoView {
    let navigate = use_navigate();
    let logger = use_logger("product_form");
    let threshold = use_context::<AppConfig>()
        .unwrap_or_default()
        .settings
        .low_stock_threshold;

    let submit_message = PRODUCT.submit_message(&mode);
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        logger.info(&submit_message);
        navigate(PRODUCT.list_href, Default::default());
    };

    view! {
        <div class="product-form">
            <div class="page-header">
                <Breadcrumbs/>
            </div>

            <div class="form-container">
                <h1>{PRODUCT.form_heading(&mode)}</h1>

                <form on:submit=on_submit class="product-form-fields">
                    <div class="form-group">
                        <label for="name">"Product Name *"</label>
                        <input type="text" id="name" name="name" required=true placeholder="Enter product name"/>
                    </div>

                    <div class="form-group">
                        <label for="sku">"SKU *"</label>
                        <input type="text" id="sku" name="sku" required=true placeholder="Enter product SKU"/>
                    </div>

                    <div class="form-group">
                        <label for="description">"Description"</label>
                        <textarea
                            id="description"
                            name="description"
                            rows="4"
                            placeholder="Enter product description"
                        ></textarea>
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="price">"Price *"</label>
                            <input
                                type="number"
                                id="price"
                                name="price"
                                required=true
                                min="0"
                                step="0.01"
                                placeholder="0.00"
                            />
                        </div>
                        <div class="form-group">
                            <label for="category">"Category"</label>
                            <select id="category" name="category">
                                <option value="">"Select a category"</option>
                            </select>
                        </div>
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="inventoryQuantity">"Initial Inventory"</label>
                            <input type="number" id="inventoryQuantity" name="inventoryQuantity" min="0" value="0"/>
                        </div>
                        <div class="form-group">
                            <label for="lowStockThreshold">"Low Stock Threshold"</label>
                            <input
                                type="number"
                                id="lowStockThreshold"
                                name="lowStockThreshold"
                                min="0"
                                value=threshold.to_string()
                            />
                        </div>
                    </div>

                    <div class="form-actions">
                        <button type="button" class="btn-secondary" on:click=move |_| go_back()>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn-primary">
                            {PRODUCT.submit_label(&mode)}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
