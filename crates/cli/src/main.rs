//! # HNTB CLI
//!
//! Command-line interface for the HNTB transportation research database.
//!
//! ## Usage
//!
//! ```bash
//! hntb migrate             # Apply pending migrations
//! hntb migrate --dry-run   # List what would be applied
//! hntb migrate --rollback  # Roll back the last migration
//! hntb status              # Show applied and pending migrations
//! hntb report school-zone  # Print an analytics report as JSON
//! hntb event SZ_001        # Print one school zone event as JSON
//! hntb --help              # Show help
//! ```

mod commands;

use clap::{CommandFactory as _, Parser};
use commands::Commands;
use error::Result;
use migration::db::DatabaseConfig;

/// HNTB research database schema tooling
#[derive(Parser, Debug)]
#[command(name = "hntb")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level or filter directives (debug, info, warn, error)
    #[arg(short = 'L', long, env = "RUST_LOG", default_value = "info")]
    log_level: String,

    /// Output format (json, pretty, compact)
    #[arg(short, long, env = "HNTB_LOG_FORMAT", default_value = "pretty")]
    log_format: String,

    /// Also write JSON logs to this file, rotated daily
    #[arg(long, env = "HNTB_LOG_FILE")]
    log_file: Option<String>,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        logging::error!(target: "app", code = %err.code(), error = %err, "Command failed");
        eprintln!("error: {}", err);
        std::process::exit(err.exit_code());
    }
}

async fn run(cli: Cli) -> Result<()> {
    // Completions go to stdout and must not be mixed with log output
    if let Commands::Completions(args) = &cli.command {
        let mut stdout = std::io::stdout();
        return commands::completions::completions(args.shell, &mut Cli::command(), &mut stdout);
    }

    logging::init(&cli.log_level, &cli.log_format, cli.log_file.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    logging::info!(target: "app", command = ?cli.command, "HNTB CLI starting...");

    let config = migration::db::load_config_from_env()?;

    match cli.command {
        Commands::Migrate(args) => {
            let db = connect(&config).await?;
            for name in commands::migrate::migrate(&db, &args).await? {
                println!("{}", name);
            }
        },
        Commands::Status => {
            let db = connect(&config).await?;
            for row in commands::status::status(&db).await? {
                println!("{}", row);
            }
        },
        Commands::Report(args) => {
            let db = connect(&config).await?;
            println!("{}", commands::report::report(&db, args.kind).await?);
        },
        Commands::Event(args) => {
            let db = connect(&config).await?;
            println!("{}", commands::report::event(&db, &args.action_id).await?);
        },
        Commands::Validate => {
            let validation = commands::validate::validate(&config).await?;
            println!(
                "ok: {} ({} pending migrations)",
                validation.target, validation.pending
            );
        },
        Commands::Completions(_) => {},
    }

    logging::info!(target: "app", "HNTB CLI completed successfully");
    Ok(())
}

async fn connect(config: &DatabaseConfig) -> Result<sea_orm::DatabaseConnection> {
    logging::info!(target: "app", database = %config.redacted_connection_string(), "Connecting to database...");
    config.connect().await
}
