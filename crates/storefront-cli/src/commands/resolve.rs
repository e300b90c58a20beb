use anyhow::{bail, Result};
use colored::Colorize;
use storefront_router::{RouteMatch, Router};

pub fn execute(router: &Router, location: &str, json: bool) -> Result<()> {
    let Some(route_match) = router.match_route(location) else {
        bail!("No route matches {:?}", location);
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&route_match)?);
    } else {
        println!("{} {}", "✓".green(), describe(&route_match));
    }

    Ok(())
}

/// Human-readable summary: view, pattern, then sorted params
fn describe(route_match: &RouteMatch) -> String {
    let mut params: Vec<_> = route_match.params.iter().collect();
    params.sort();

    let mut out = format!("{} ({})", route_match.route.view, route_match.route.path);
    for (key, value) in params {
        out.push_str(&format!(" {}={}", key, value));
    }
    out
}
