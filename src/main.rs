use analytics::MetricsSummary;
use anyhow::Context;
use clap::{Parser, Subcommand};
use configuration::{LogFormat, load_config_from};
use core_types::Sector;
use indicatif::{ProgressBar, ProgressStyle};
use optimizer::{OptimizationRequest, PortfolioOptimizer};
use rust_decimal::Decimal;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use web_server::{AppState, universe_from_config};

mod logging;
mod report;

/// The entry point for the sector allocator.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment overrides from a .env file, if one exists.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let mut config = load_config_from(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;
    if let Some(format) = cli.log_format {
        config.logging.format = format;
    }
    let _log_guard = logging::init_tracing(&config.logging)?;

    let universe = universe_from_config(&config)?;
    let optimizer = PortfolioOptimizer::from_config(&config, universe);

    // Execute the appropriate command
    match cli.command {
        Commands::Optimize(args) => handle_optimize(args, &optimizer).await,
        Commands::Sectors => {
            println!("{}", report::sectors_table(optimizer.universe()));
            Ok(())
        }
        Commands::Serve(args) => {
            let addr = match args.addr {
                Some(addr) => addr,
                None => config.server.socket_addr()?,
            };
            web_server::run_server(addr, AppState::new(optimizer)).await
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Sector-based portfolio allocation with risk-adjusted weights.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the TOML configuration file. Missing files fall back to defaults.
    #[arg(long, global = true, default_value = "config.toml")]
    config: PathBuf,

    /// Overrides the configured console log format.
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a portfolio for a budget and a set of sectors.
    Optimize(OptimizeArgs),
    /// List the available sectors and their instruments.
    Sectors,
    /// Serve the web UI and JSON API.
    Serve(ServeArgs),
}

#[derive(Parser)]
struct OptimizeArgs {
    /// The amount to invest (e.g., 10000).
    #[arg(long)]
    budget: Decimal,

    /// Comma-separated sector tags (e.g., "technology,healthcare").
    #[arg(long, value_delimiter = ',', required = true)]
    sectors: Vec<Sector>,

    /// Wait for the simulated service latency before computing.
    #[arg(long)]
    simulate: bool,
}

#[derive(Parser)]
struct ServeArgs {
    /// Listen address; defaults to the [server] section of the configuration.
    #[arg(long)]
    addr: Option<SocketAddr>,
}

// ==============================================================================
// Command Logic
// ==============================================================================

/// Runs one optimization and prints the allocation and metrics tables.
async fn handle_optimize(args: OptimizeArgs, optimizer: &PortfolioOptimizer) -> anyhow::Result<()> {
    let request = OptimizationRequest::new(args.budget, args.sectors);

    let portfolio = if args.simulate {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::with_template("{spinner:.green} {msg}")?);
        spinner.set_message("Optimizing portfolio...");
        spinner.enable_steady_tick(Duration::from_millis(100));
        let result = optimizer.simulate(&request).await;
        spinner.finish_and_clear();
        result?
    } else {
        optimizer.optimize(&request)?
    };

    if portfolio.is_empty() {
        println!("No instruments available for the selected sectors.");
        return Ok(());
    }

    let summary = MetricsSummary::new(portfolio.metrics);
    println!(
        "Suggested distribution for {} (run {})",
        report::format_currency(portfolio.budget),
        portfolio.run_id
    );
    println!("{}", report::allocation_table(&portfolio));
    println!("{}", report::metrics_table(&summary));
    Ok(())
}
