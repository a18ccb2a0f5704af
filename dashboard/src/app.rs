//! Application root: shared context, layout and route dispatch.
//!
//! Pages are picked by [`AppRoute::resolve`], the same matcher the
//! breadcrumbs and the CLI use. Whether a page sits behind the guard comes
//! from its `ROUTE_TABLE` row.

use inventory_core::config::AppConfig;
use inventory_router::{use_location, AppRoute, AuthState, FormMode, Router};
use leptos::prelude::*;
use leptos_meta::*;

use crate::components::{Layout, ProtectedRoute};
use crate::logging::app_logger;
use crate::pages::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::compiled();
    let logger = app_logger(&config);
    logger
        .debug_builder("Starting dashboard")
        .field("environment", config.environment.as_str())
        .field("api_base_url", config.api_base_url.clone())
        .emit();

    provide_context(logger);
    provide_context(config);
    provide_context(AuthState::default());

    view! {
        <Meta name="description" content="Product inventory management dashboard"/>
        <Title text="Product Inventory"/>

        <Router>
            <Layout>
                <RoutedPage/>
            </Layout>
        </Router>
    }
}

/// The page for the current location, wrapped in the guard.
#[component]
fn RoutedPage() -> impl IntoView {
    let pathname = use_location().pathname;
    let route = Memo::new(move |_| AppRoute::resolve(&pathname.get()));

    move || {
        let route = route.get();
        let requires_auth = route.requirement().requires_auth;
        let page = move || page_view(&route);
        view! { <ProtectedRoute requires_auth=requires_auth>{page.clone()}</ProtectedRoute> }
    }
}

fn page_view(route: &AppRoute) -> AnyView {
    match route {
        AppRoute::Dashboard => view! { <DashboardPage/> }.into_any(),
        AppRoute::Products => view! { <ProductsPage/> }.into_any(),
        AppRoute::ProductNew => view! { <ProductFormPage mode=FormMode::Create/> }.into_any(),
        AppRoute::ProductEdit { id } => {
            view! { <ProductFormPage mode=FormMode::Edit(id.to_string())/> }.into_any()
        }
        AppRoute::ProductDetail { id } => {
            view! { <ProductDetailPage id=id.to_string()/> }.into_any()
        }
        AppRoute::Categories => view! { <CategoriesPage/> }.into_any(),
        AppRoute::CategoryNew => view! { <CategoryFormPage mode=FormMode::Create/> }.into_any(),
        AppRoute::CategoryEdit { id } => {
            view! { <CategoryFormPage mode=FormMode::Edit(id.to_string())/> }.into_any()
        }
        AppRoute::CategoryDetail { id } => {
            view! { <CategoryDetailPage id=id.to_string()/> }.into_any()
        }
        AppRoute::Unauthorized => view! { <UnauthorizedPage/> }.into_any(),
        AppRoute::NotFound { .. } => view! { <NotFound/> }.into_any(),
    }
}
