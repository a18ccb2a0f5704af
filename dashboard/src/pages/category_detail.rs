use inventory_router::use_navigate;
use leptos::prelude::*;

use crate::browser::confirm;
use crate::components::Breadcrumbs;
use crate::logging::use_logger;
use crate::pages::record::{CATEGORY, PRODUCT};

/// Single category with edit and delete actions and a link to add a
/// product to it.
#[component]
pub fn CategoryDetailPage(#[prop(into)] id: String) -> impl IntoView {
    let navigate = use_navigate();
    let logger = use_logger("category_detail");

    let on_edit = {
        let navigate = navigate.clone();
        let edit_href = CATEGORY.edit_href(&id);
        move |_| navigate(&edit_href, Default::default())
    };
    let delete_message = CATEGORY.delete_message(&id);
    let on_delete = move |_| {
        if confirm(CATEGORY.delete_prompt) {
            logger.info(&delete_message);
            navigate(CATEGORY.list_href, Default::default());
        }
    };
    let add_product_href = format!("{}?category={}", PRODUCT.new_href(), id);

    view! {
        <div class="category-detail">
            <div class="page-header">
                <Breadcrumbs/>
                <div class="actions">
                    <button type="button" class="btn-secondary" on:click=on_edit>
                        "Edit Category"
                    </button>
                    <button type="button" class="btn-danger" on:click=on_delete>
                        "Delete Category"
                    </button>
                </div>
            </div>

            <div class="category-detail-content">
                <div class="category-info">
                    <h1>"Category Details"</h1>
                    <p>{CATEGORY.id_line(&id)}</p>
                    <p>"Category details will be loaded and displayed in future tasks."</p>
                </div>

                <div class="products-in-category">
                    <h2>"Products in this Category"</h2>
                    <div class="products-grid">
                        <p>"Products in this category will be displayed in future tasks."</p>
                    </div>
                    <a href=add_product_href class="btn-primary">"Add Product to Category"</a>
                </div>
            </div>
        </div>
    }
}
