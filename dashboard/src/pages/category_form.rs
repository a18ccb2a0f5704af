use inventory_router::{use_navigate, FormMode};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::browser::go_back;
use crate::components::Breadcrumbs;
use crate::logging::use_logger;
use crate::pages::record::CATEGORY;

/// Create or edit a category.
#[component]
pub fn CategoryFormPage(mode: FormMode) -> impl IntoView {
    let navigate = use_navigate();
    let logger = use_logger("category_form");

    let submit_message = CATEGORY.submit_message(&mode);
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        logger.info(&submit_message);
        navigate(CATEGORY.list_href, Default::default());
    };

    view! {
        <div class="category-form">
            <div class="page-header">
                <Breadcrumbs/>
            </div>

            <div class="form-container">
                <h1>{CATEGORY.form_heading(&mode)}</h1>

                <form on:submit=on_submit class="category-form-fields">
                    <div class="form-group">
                        <label for="name">"Category Name *"</label>
                        <input type="text" id="name" name="name" required=true placeholder="Enter category name"/>
                    </div>

                    <div class="form-group">
                        <label for="description">"Description"</label>
                        <textarea
                            id="description"
                            name="description"
                            rows="4"
                            placeholder="Enter category description"
                        ></textarea>
                    </div>

                    <div class="form-actions">
                        <button type="button" class="btn-secondary" on:click=move |_| go_back()>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn-primary">
                            {CATEGORY.submit_label(&mode)}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
