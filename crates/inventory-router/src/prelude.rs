//! Prelude for convenient imports.
//!
//! ```rust,ignore
//! use inventory_router::prelude::*;
//! ```

pub use crate::{
    active_entry, evaluate, is_active, use_location, use_navigate, AccessRequirement, AppRoute,
    AuthState, Breadcrumb, FormMode, GuardDecision, NavEntry, NavigateOptions, Page, Redirect,
    RouteEntry, Router, NAV_ENTRIES, NOT_FOUND_LINKS, ROUTE_TABLE,
};
