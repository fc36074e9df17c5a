//! Employee Server Binary
//!
//! Starts the HTTP server for the employee service.

use std::sync::Arc;

use clap::Parser;
use employee_service::api::Server;
use employee_service::{Config, EmployeeService};
use tracing_subscriber::{fmt, EnvFilter};

/// Employee Server
#[derive(Parser, Debug)]
#[command(name = "employee-server")]
#[command(about = "Employee records HTTP service")]
#[command(version)]
struct Args {
    /// Data directory
    #[arg(short, long, default_value = "./employee_data")]
    data_dir: String,

    /// Listen address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    listen: String,

    /// Collection file name inside the data directory
    #[arg(long, default_value = "employees.json")]
    collection_file: String,

    /// Counter file name inside the data directory
    #[arg(long, default_value = "employee-id-sequence.txt")]
    counter_file: String,
}

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,employee_service=debug,tower_http=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("Employee Server v{}", employee_service::VERSION);
    tracing::info!("Data directory: {}", args.data_dir);
    tracing::info!("Listen address: {}", args.listen);

    // Build config from args
    let config = Config::builder()
        .data_dir(&args.data_dir)
        .listen_addr(&args.listen)
        .collection_file(&args.collection_file)
        .counter_file(&args.counter_file)
        .build();

    // Open service
    let service = match EmployeeService::open(&config) {
        Ok(s) => Arc::new(s),
        Err(e) => {
            tracing::error!("Failed to open employee store: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Service initialized successfully");

    // Start server
    let server = match Server::bind(&config, service).await {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", config.listen_addr, e);
            std::process::exit(1);
        }
    };
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server stopped");
}
