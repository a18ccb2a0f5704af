//! Shared components: the page frame, breadcrumbs and the route guard.

mod breadcrumbs;
mod layout;
mod protected_route;

pub use breadcrumbs::Breadcrumbs;
pub use layout::Layout;
pub use protected_route::ProtectedRoute;
