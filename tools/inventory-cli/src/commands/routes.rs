//! Route table listing.

use anyhow::Result;
use inventory_router::{RouteEntry, ROUTE_TABLE};

use super::RoutesArgs;
use crate::context::Context;

/// Run the routes command.
pub fn run(args: RoutesArgs, ctx: &Context) -> Result<()> {
    let routes = select(&args);

    if ctx.output.is_json() {
        ctx.output.json(&routes);
        return Ok(());
    }

    ctx.output.header("Routes");
    ctx.output.table_row(&["PATTERN", "PAGE", "GUARDED"], &[22, 16, 7]);
    for entry in &routes {
        let guarded = if entry.guarded { "yes" } else { "no" };
        ctx.output
            .table_row(&[entry.pattern, entry.page.title(), guarded], &[22, 16, 7]);
    }

    Ok(())
}

fn select(args: &RoutesArgs) -> Vec<&'static RouteEntry> {
    ROUTE_TABLE
        .iter()
        .filter(|entry| !args.guarded || entry.guarded)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_routes_listed_in_table_order() {
        let routes = select(&RoutesArgs { guarded: false });
        assert_eq!(routes.len(), ROUTE_TABLE.len());
        assert_eq!(routes[0].pattern, "/");
        assert_eq!(routes[routes.len() - 1].pattern, "*");
    }

    #[test]
    fn test_guarded_filter_drops_public_routes() {
        let routes = select(&RoutesArgs { guarded: true });
        assert!(routes.iter().all(|e| e.guarded));
        assert!(!routes.iter().any(|e| e.pattern == "/unauthorized" || e.pattern == "*"));
        assert_eq!(routes.len(), 9);
    }
}
