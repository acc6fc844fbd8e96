//! Credit Dashboard
//!
//! Serve the dashboard, or render a single country's page to a file.
//!
//! ```text
//! credit-dashboard serve
//! credit-dashboard render --country "Saudi Arabia" --output saudi.html
//! credit-dashboard config > config.toml
//! ```

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use credit_dashboard::api::{serve, ApiConfig, AppState};
use credit_dashboard::config::{generate_default_config, Config, LoggingConfig};
use credit_dashboard::dashboard::{render_dashboard, PageStatus};
use credit_dashboard::research::{collect_pages, Country, ReportSource, ResearchClient};

#[derive(Parser)]
#[command(name = "credit-dashboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Sovereign credit research dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the dashboard server (default)
    Serve {
        /// Override the configured host
        #[arg(long)]
        host: Option<String>,
        /// Override the configured port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Render one country's dashboard to HTML
    Render {
        /// Country: Israel, Mexico, Qatar or "Saudi Arabia"
        #[arg(short = 'C', long)]
        country: Option<Country>,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Config { output }) = &cli.command {
        return write_output(output.as_ref(), &generate_default_config());
    }

    let config = match &cli.config {
        Some(path) => {
            let config = Config::load_with_env(path)?;
            init_tracing(&config.logging);
            tracing::info!("Loaded config from {:?}", path);
            config
        }
        None => {
            let loaded = Config::load_default();
            init_tracing(&loaded.config.logging);
            loaded.report();
            loaded.config
        }
    };

    let client = ResearchClient::new(config.research.client_config())
        .context("Failed to create research API client")?;

    match cli.command {
        None => run_server(config, client, None, None).await,
        Some(Commands::Serve { host, port }) => run_server(config, client, host, port).await,
        Some(Commands::Render { country, output }) => {
            let country = country.unwrap_or(config.research.default_country);
            let payload = client.query_for(country);
            let outcome = collect_pages(&client, &payload, config.research.pages).await;

            let page = render_dashboard(country, &outcome, Utc::now());
            if page.status == PageStatus::NoData {
                tracing::warn!(country = %country, "No data available to display");
            }
            write_output(output.as_ref(), &page.html)
        }
        Some(Commands::Config { .. }) => Ok(()),
    }
}

async fn run_server(
    config: Config,
    client: ResearchClient,
    host: Option<String>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    tracing::info!("Starting credit dashboard v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Research API: {}", config.research.url);

    let mut api_config = ApiConfig::from_config(&config);
    if let Some(host) = host {
        api_config.host = host;
    }
    if let Some(port) = port {
        api_config.port = port;
    }

    let state = AppState::new(Arc::new(client), api_config.clone());
    serve(state, &api_config).await?;

    tracing::info!("Credit dashboard stopped");
    Ok(())
}

/// Initialize tracing from the logging config; `RUST_LOG` takes precedence
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("credit_dashboard={},tower_http=info", logging.level).into()
    });

    if logging.is_json() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn write_output(path: Option<&PathBuf>, content: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Wrote {}", path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}
