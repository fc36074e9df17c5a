//! Employee CLI
//!
//! Read-only inspection of a data directory without going through the server.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use employee_service::api::dto::EmployeeResponse;
use employee_service::{Config, EmployeeError, EmployeeService, SearchCriteria};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

/// Employee CLI
#[derive(Parser, Debug)]
#[command(name = "employee-cli")]
#[command(about = "Inspect an employee data directory")]
struct Args {
    /// Data directory
    #[arg(short, long, default_value = "./employee_data")]
    data_dir: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every record
    List,

    /// Print one record by id
    Get {
        /// The employee id
        id: u64,
    },

    /// Search by name substring and inclusive salary range
    Search {
        /// Substring of the first or last name (case-sensitive)
        #[arg(long)]
        name: String,

        /// Minimum salary
        #[arg(long)]
        from: Decimal,

        /// Maximum salary
        #[arg(long)]
        to: Decimal,
    },

    /// Print the last issued id
    LastId,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let args = Args::parse();
    let config = Config::builder().data_dir(&args.data_dir).build();

    match run(&config, args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config, command: Commands) -> employee_service::Result<()> {
    let service = EmployeeService::open(config)?;

    match command {
        Commands::List => {
            let all = service.store().load_all()?;
            print_json(&to_responses(all))
        }
        Commands::Get { id } => print_json(&EmployeeResponse::from(service.get_by_id(id)?)),
        Commands::Search { name, from, to } => {
            let criteria = SearchCriteria::new(name, from, to)?;
            print_json(&to_responses(service.search(&criteria)?))
        }
        Commands::LastId => {
            println!("{}", service.allocator().last_id());
            Ok(())
        }
    }
}

fn to_responses(employees: Vec<employee_service::Employee>) -> Vec<EmployeeResponse> {
    employees.into_iter().map(EmployeeResponse::from).collect()
}

fn print_json<T: Serialize>(value: &T) -> employee_service::Result<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(EmployeeError::serialization("Error formatting output"))?;
    println!("{}", text);
    Ok(())
}
