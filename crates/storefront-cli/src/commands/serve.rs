use anyhow::Result;
use colored::Colorize;
use storefront_router::{Router, ServerConfig};

#[cfg(feature = "dev-server")]
pub fn execute(router: Router, config: &ServerConfig) -> Result<()> {
    use crate::server::start_server;

    println!("{}", "Preparing storefront bundle server...".green().bold());

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async { start_server(router, config).await })
}

#[cfg(not(feature = "dev-server"))]
pub fn execute(_router: Router, _config: &ServerConfig) -> Result<()> {
    println!("{}", "⚠ Bundle server not available".yellow());
    println!();
    println!("The bundle server requires the 'dev-server' feature.");
    println!("Rebuild with: cargo build --features dev-server");
    Ok(())
}
