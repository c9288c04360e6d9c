//! winemap - Interactive wine map service
//!
//! This is the composition root that wires together all the components.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::fmt::format::FmtSpan;
use winemap::adapters::inbound::ApiServer;
use winemap::adapters::outbound::{geojson_cleaner, grape_csv, CsvLocationRepository};
use winemap::application::MapService;
use winemap::config::load_config;
use winemap::domain::services::GrapeCatalog;
use winemap::infrastructure::{shutdown_signal, ShutdownController};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the interactive map (default)
    Serve,
    /// Build the grape variety catalogue from the regions CSV
    Grapes {
        #[arg(long, value_name = "FILE", default_value = "data/regions.csv")]
        regions: PathBuf,
        /// Column holding the comma-separated grape list
        #[arg(long)]
        column: String,
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
        /// Column holding the region name
        #[arg(long, default_value = "regio")]
        region_column: String,
    },
    /// Strip feature properties from a GeoJSON file
    CleanGeojson {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,
        /// Defaults to overwriting the input
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment
    let cfg = load_config()?;

    // Setup logging
    let log_level = if cfg.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_span_events(FmtSpan::CLOSE)
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(cfg).await,
        Commands::Grapes {
            regions,
            column,
            output,
            region_column,
        } => {
            let rows = grape_csv::read_region_grapes(&regions, &region_column, &column)?;
            let catalog = GrapeCatalog::summarize(&rows);
            grape_csv::write_catalog(&output, &catalog)?;
            tracing::info!(
                "wrote {} grape varieties from {} regions to {:?}",
                catalog.len(),
                rows.len(),
                output
            );
            Ok(())
        }
        Commands::CleanGeojson { input, output } => {
            let output = output.unwrap_or_else(|| input.clone());
            geojson_cleaner::strip_properties(&input, &output)?;
            Ok(())
        }
    }
}

async fn serve(cfg: winemap::config::Config) -> anyhow::Result<()> {
    tracing::info!(
        "starting winemap listen={} countries={} regions={}",
        cfg.listen_addr,
        cfg.countries_path,
        cfg.regions_path
    );

    // ===== COMPOSITION ROOT =====

    let shutdown = ShutdownController::new();

    // 1. Location repository (CSV), loaded once before serving
    let repo = Arc::new(CsvLocationRepository::new(
        &cfg.countries_path,
        &cfg.regions_path,
    ));
    repo.load().context("initial dataset load failed")?;
    if cfg.reload_secs > 0 {
        repo.start_sync(cfg.reload_secs, shutdown.clone());
    }

    // 2. Application service
    let service = Arc::new(MapService::new(repo, cfg.strict_coordinates));
    if !service.strict_coordinates() {
        tracing::warn!("coordinate validation disabled, out-of-range clicks are resolved as-is");
    }

    // 3. Inbound adapter
    tokio::spawn(shutdown_signal(shutdown.clone()));
    let server = ApiServer::new(cfg.listen_addr, service).cors_permissive(cfg.cors_permissive);

    server.run(shutdown).await
}
