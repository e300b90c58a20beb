mod commands;
mod logging;

#[cfg(feature = "dev-server")]
mod server;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use storefront_router::{Config, TableVersion};

#[derive(Parser)]
#[command(name = "storefront")]
#[command(version, about = "Storefront route table tools", long_about = None)]
struct Cli {
    /// Configuration file [default: storefront.toml, optional]
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Route table release (overrides the configuration file)
    #[arg(long = "version-table", global = true, value_name = "RELEASE")]
    table: Option<TableArg>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the route table in declared order
    Routes {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show which view a URL activates
    Resolve {
        /// URL path, optionally with query and fragment
        location: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Generate the URL of a named route
    #[command(name = "url-for")]
    UrlFor {
        /// Route name, e.g. ProductDetail
        name: String,

        /// Route parameter as key=value (repeatable)
        #[arg(short, long = "param", value_parser = commands::url_for::parse_param)]
        params: Vec<(String, String)>,
    },

    /// Serve the built app with history-mode fallback
    Serve {
        /// Port to listen on (overrides configuration)
        #[arg(short, long)]
        port: Option<u16>,

        /// Directory holding index.html and assets/ (overrides configuration)
        #[arg(short, long)]
        dist: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum TableArg {
    /// First release, without order history
    Initial,
    /// Release with the order-history route
    Orders,
}

impl From<TableArg> for TableVersion {
    fn from(arg: TableArg) -> Self {
        match arg {
            TableArg::Initial => TableVersion::Initial,
            TableArg::Orders => TableVersion::Orders,
        }
    }
}

/// An explicit `--config` must exist; the implicit default may be absent
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Config::load_default(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    let mut config = load_config(cli.config.as_deref())?.with_env_overrides()?;
    if let Some(table) = cli.table {
        config.routing.version = table.into();
    }

    let router = config
        .routing
        .build_router()
        .context("Failed to build route table")?;

    match cli.command {
        Commands::Routes { json } => {
            commands::routes::execute(&router, json)?;
        }
        Commands::Resolve { location, json } => {
            commands::resolve::execute(&router, &location, json)?;
        }
        Commands::UrlFor { name, params } => {
            commands::url_for::execute(&router, &name, params)?;
        }
        Commands::Serve { port, dist } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(dist) = dist {
                config.server.dist_dir = dist.to_string_lossy().into_owned();
            }
            commands::serve::execute(router, &config.server)?;
        }
    }

    Ok(())
}
