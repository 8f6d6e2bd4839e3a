//! # CLI Commands
//!
//! Implementation of the `hntb` subcommands.

pub mod completions;
pub mod migrate;
pub mod report;
pub mod status;
pub mod validate;

use clap::{Args, Subcommand, ValueEnum};

/// Available commands for the HNTB CLI
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply, preview or roll back schema migrations
    Migrate(MigrateArgs),

    /// Show applied and pending migrations
    Status,

    /// Run an example analytics query and print it as JSON
    Report(ReportArgs),

    /// Print one school zone event as JSON
    Event(EventArgs),

    /// Check configuration and database connectivity
    Validate,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the migrate command
#[derive(Args, Debug, Default)]
pub struct MigrateArgs {
    /// List the migrations that would run without changing the database
    #[arg(long)]
    pub dry_run: bool,

    /// Roll back applied migrations instead of applying pending ones
    #[arg(long)]
    pub rollback: bool,

    /// Number of migrations to apply or roll back (rollback defaults to 1)
    #[arg(long)]
    pub steps: Option<u32>,
}

/// Arguments for the report command
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Which report to run
    #[arg(value_enum)]
    pub kind: ReportKind,
}

/// Arguments for the event command
#[derive(Args, Debug)]
pub struct EventArgs {
    /// Client generated `action_id` of the event
    pub action_id: String,
}

/// Example analytics reports
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    /// Event counts per school zone event name
    SchoolZone,
    /// Tow and go requests per outcome
    TowAndGo,
    /// School zone events per county
    County,
}

/// Arguments for the completions command
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
