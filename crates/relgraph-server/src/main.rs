//! RelGraph — relationship graph report server.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;
mod request;
mod routes;
mod state;

use state::AppState;

fn print_usage() {
    println!("RelGraph — knowledge-graph relationship reports");
    println!();
    println!("Usage: relgraph [command]");
    println!();
    println!("Commands:");
    println!("  (none)                            Start the server");
    println!("  report <file.json> [--no-descriptions]");
    println!("                                    Print a report for a relationship file");
    println!("  help                              Show this help message");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    // Handle CLI subcommands
    if args.len() > 1 {
        match args[1].as_str() {
            "--report" | "report" => {
                if args.len() < 3 {
                    eprintln!("Usage: relgraph report <file.json> [--no-descriptions]");
                    std::process::exit(1);
                }
                let path = PathBuf::from(&args[2]);
                let no_descriptions = args[3..].iter().any(|a| a == "--no-descriptions");
                let config = relgraph_core::RelGraphConfig::from_env()?;
                let lines = cli::run_report(&path, no_descriptions, &config)?;
                cli::print_report(&lines);
                return Ok(());
            }
            "--help" | "-h" | "help" => {
                print_usage();
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'relgraph help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    }

    let config = relgraph_core::RelGraphConfig::from_env()?;
    let port = config.port;
    let state = Arc::new(AppState::new(config));
    let app = routes::build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("RelGraph server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
