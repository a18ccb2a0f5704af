use inventory_router::use_navigate;
use leptos::prelude::*;

use crate::browser::confirm;
use crate::components::Breadcrumbs;
use crate::logging::use_logger;
use crate::pages::record::PRODUCT;

/// Single product with edit and delete actions.
#[component]
pub fn ProductDetailPage(#[prop(into)] id: String) -> impl IntoView {
    let navigate = use_navigate();
    let logger = use_logger("product_detail");

    let on_edit = {
        let navigate = navigate.clone();
        let edit_href = PRODUCT.edit_href(&id);
        move |_| navigate(&edit_href, Default::default())
    };
    let delete_message = PRODUCT.delete_message(&id);
    let on_delete = move |_| {
        if confirm(PRODUCT.delete_prompt) {
            logger.info(&delete_message);
            navigate(PRODUCT.list_href, Default::default());
        }
    };

    view! {
        <div class="product-detail">
            <div class="page-header">
                <Breadcrumbs/>
                <div class="actions">
                    <button type="button" class="btn-secondary" on:click=on_edit>
                        "Edit Product"
                    </button>
                    <button type="button" class="btn-danger" on:click=on_delete>
                        "Delete Product"
                    </button>
                </div>
            </div>

            <div class="product-detail-content">
                <div class="product-info">
                    <h1>"Product Details"</h1>
                    <p>{PRODUCT.id_line(&id)}</p>
                    <p>"Product details will be loaded and displayed in future tasks."</p>
                </div>

                <div class="inventory-section">
                    <h2>"Inventory Management"</h2>
                    <div class="inventory-controls">
                        <button type="button" class="btn-secondary">"-"</button>
                        <span class="inventory-count">"Loading..."</span>
                        <button type="button" class="btn-secondary">"+"</button>
                    </div>
                </div>
            </div>
        </div>
    }
}
