mod clone;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use shoplift_core::ConfigOverrides;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "shoplift")]
#[command(about = "Copy a product from another storefront into your store")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch a storefront product and recreate it through the app backend
    Clone {
        /// Product page URL on the source storefront
        url: String,
        /// App backend origin (overrides `SHOPLIFT_APP_URL`)
        #[arg(long)]
        app_url: Option<String>,
        /// Session token for the app backend (overrides `SHOPLIFT_SESSION_TOKEN`)
        #[arg(long)]
        token: Option<String>,
        /// Print the final page state as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the JSON endpoint a product URL would be fetched from
    Normalize {
        /// Product page URL on the source storefront
        url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Clone {
            url,
            app_url,
            token,
            json,
        } => {
            let config = shoplift_core::load_app_config(&config_overrides(app_url, token))?;
            init_tracing(&config.log_level)?;
            tracing::info!(env = %config.env, app_url = %config.app_url, "configuration loaded");
            clone::run_clone(&config, &url, json).await
        }
        Commands::Normalize { url } => {
            let log_level =
                std::env::var("SHOPLIFT_LOG_LEVEL").unwrap_or_else(|_| "info".to_owned());
            init_tracing(&log_level)?;
            println!("{}", shoplift_clone::normalize_product_url(&url)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// CLI flags that take precedence over their environment variables.
fn config_overrides(app_url: Option<String>, token: Option<String>) -> ConfigOverrides {
    let mut overrides = ConfigOverrides::new();
    if let Some(app_url) = app_url {
        overrides.insert("SHOPLIFT_APP_URL", app_url);
    }
    if let Some(token) = token {
        overrides.insert("SHOPLIFT_SESSION_TOKEN", token);
    }
    overrides
}

fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
