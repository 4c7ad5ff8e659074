mod analyze_cmd;
mod doctor_cmd;
mod status_cmd;
mod terminal_output;

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use menulens_config::{config_file_path, MenuLensConfig};
use menulens_gateway::{start_server, GatewayState};
use menulens_logging::init_logger;

#[derive(Parser)]
#[command(name = "menulens")]
#[command(about = "MenuLens: turn a menu photo into dishes with pictures")]
#[command(version)]
struct Cli {
    /// YAML config file (defaults to $MENULENS_CONFIG)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port to bind the HTTP server to
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Query a running server's health endpoint
    Status {
        /// Port the server is listening on
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Run the pipeline once on a local menu photo and print the result
    Analyze {
        /// Path to the menu image
        image: PathBuf,
        /// Print the raw JSON response instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Check configuration and credentials
    Doctor,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.config {
        Some(path) => menulens_config::load_from(&path).await?,
        None => menulens_config::load(config_file_path().as_deref()).await?,
    };

    let _guard = init_logger(
        config.logging.dir.as_deref().map(std::path::Path::new),
        &config.logging.level,
    );

    match cli.command {
        Commands::Serve { port } => {
            menulens_config::check(&config)?;
            let port = port.unwrap_or(config.server.port);
            run_server(config, port).await?;
        }
        Commands::Status { port } => {
            status_cmd::run(port.unwrap_or(config.server.port)).await?;
        }
        Commands::Analyze { image, json } => {
            menulens_config::check(&config)?;
            analyze_cmd::run(&config, &image, json).await?;
        }
        Commands::Doctor => {
            doctor_cmd::run(&config);
        }
    }

    Ok(())
}

async fn run_server(config: MenuLensConfig, port: u16) -> Result<()> {
    let addr = bind_addr(&config.server.bind_address, port)?;

    info!(
        addr = %addr,
        config = %menulens_config::redact(&config),
        "Starting MenuLens server"
    );

    let state = GatewayState::from_config(&config);
    start_server(addr, state).await
}

/// Accepts IPv4 and IPv6 literals alike (`0.0.0.0`, `::`).
fn bind_addr(bind_address: &str, port: u16) -> Result<SocketAddr> {
    let ip: IpAddr = bind_address
        .trim()
        .parse()
        .with_context(|| format!("Invalid bind address: {bind_address}"))?;
    Ok(SocketAddr::new(ip, port))
}
