use anyhow::{Context, Result};
use std::collections::HashMap;
use storefront_router::Router;

pub fn execute(router: &Router, name: &str, params: Vec<(String, String)>) -> Result<()> {
    let params: HashMap<String, String> = params.into_iter().collect();
    let url = router
        .url_for(name, &params)
        .with_context(|| format!("Cannot build URL for {:?}", name))?;
    println!("{}", url);
    Ok(())
}

/// Parses a `key=value` argument
pub fn parse_param(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got {:?}", arg)),
    }
}
