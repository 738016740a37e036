//! Service entry-point: wires the in-memory shipping service into the HTTP
//! adapter and runs the server.

use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::web;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use shipping_server::inbound::http::health::HealthState;
use shipping_server::inbound::http::state::HttpState;
use shipping_server::outbound::InMemoryShippingService;
use shipping_server::server::{ServerConfig, create_server};

/// Command-line options.
#[derive(Debug, Parser)]
#[command(name = "shipping-server", about = "Cargo booking and handling HTTP service")]
struct Cli {
    /// Socket address to bind.
    #[arg(long, default_value = "0.0.0.0:8080")]
    bind: SocketAddr,
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = Cli::parse();

    let service = Arc::new(InMemoryShippingService::new());
    let http_state = HttpState::new(service.clone(), service);
    let health_state = web::Data::new(HealthState::new());

    let server = create_server(health_state, http_state, ServerConfig::new(cli.bind))?;
    info!(bind = %cli.bind, "shipping server listening");
    server.await
}
