use configuration::load_config;
use optimizer::PortfolioOptimizer;
use tracing_subscriber::EnvFilter;
use web_server::{AppState, universe_from_config};

// This main function is the entry point when running `cargo run -p web-server`.
// The root binary's `serve` subcommand offers the same server with file logging.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = load_config()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .init();

    let universe = universe_from_config(&config)?;

    let addr = config.server.socket_addr()?;
    let state = AppState::new(PortfolioOptimizer::from_config(&config, universe));
    web_server::run_server(addr, state).await
}
