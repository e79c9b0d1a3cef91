//! Student API server binary
//!
//! Starts the CRUD HTTP service for student records.
//!
//! # Usage
//!
//! ```bash
//! student-api --port 3000 --host ::
//! student-api --database-uri mongodb://db.internal:27017 --verbose
//! student-api --config /etc/student-api/config.toml
//! ```

use clap::Parser;

use student_api::cli::{ServeArgs, run_server_mode};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "student-api")]
struct Cli {
    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to ('::' for IPv6, '0.0.0.0' for IPv4)
    #[arg(long)]
    host: Option<String>,

    /// MongoDB connection string
    #[arg(short, long, value_name = "URI")]
    database_uri: Option<String>,

    /// Configuration file path
    #[arg(long)]
    config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let args = ServeArgs {
        port: cli.port,
        host: cli.host,
        database_uri: cli.database_uri,
        config: cli.config,
        verbose: cli.verbose,
    };
    run_server_mode(args).await
}
