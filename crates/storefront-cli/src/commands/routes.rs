use anyhow::Result;
use colored::Colorize;
use storefront_router::Router;

pub fn execute(router: &Router, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(router.routes())?);
        return Ok(());
    }

    println!("{}", "Routes:".cyan().bold());
    for line in render(router) {
        println!("  {} {}", "→".green(), line);
    }

    Ok(())
}

/// One line per route, columns padded to the widest path
fn render(router: &Router) -> Vec<String> {
    let width = router
        .routes()
        .iter()
        .map(|route| route.path.len())
        .max()
        .unwrap_or(0);

    router
        .routes()
        .iter()
        .map(|route| {
            let name = route.name.as_deref().unwrap_or("-");
            format!("{:<width$}  {:<14}  {}", route.path, name, route.view, width = width)
        })
        .collect()
}
