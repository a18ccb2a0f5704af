//! One component per routed page.

mod categories;
mod category_detail;
mod category_form;
mod dashboard;
mod not_found;
mod product_detail;
mod product_form;
mod products;
pub mod record;
mod unauthorized;

pub use categories::CategoriesPage;
pub use category_detail::CategoryDetailPage;
pub use category_form::CategoryFormPage;
pub use dashboard::DashboardPage;
pub use not_found::NotFound;
pub use product_detail::ProductDetailPage;
pub use product_form::ProductFormPage;
pub use products::ProductsPage;
pub use unauthorized::UnauthorizedPage;
