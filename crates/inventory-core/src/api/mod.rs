//! Wire shapes of the inventory REST API.
//!
//! These are declared for the dashboard's future data layer. Nothing in the
//! workspace sends them over the network yet.

mod response;
mod search;

pub use response::{ApiError, ApiResponse, PaginatedResponse};
pub use search::{ProductSearchParams, SortDirection};
