use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "dreamhome",
    version,
    about = "Builds and seeds the DreamHome property-rental database"
)]
pub struct Cli {
    /// TOML config file (defaults to $CONFIG_PATH)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Overrides database_url from the config
    #[arg(long, global = true)]
    pub database_url: Option<String>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply all schema steps, load seed rows and verify
    Build(BuildArgs),
    /// Apply pending schema steps
    Migrate(MigrateArgs),
    /// Undo schema steps
    Revert(RevertArgs),
    /// List schema steps and whether they are applied
    Status,
    /// Load seed rows into an already migrated database
    Seed,
    /// Scan every table and print row counts
    Verify,
    /// Sign a lease; the client is closed if still open
    Lease(LeaseArgs),
    /// Delete all leases and restart lease numbering
    ResetLeases(ResetLeasesArgs),
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Skip seed rows even if the config enables them
    #[arg(long)]
    pub no_seed: bool,
}

#[derive(Args, Debug)]
pub struct MigrateArgs {
    /// Stop after the step whose name ends with this
    #[arg(long)]
    pub until: Option<String>,
}

#[derive(Args, Debug)]
pub struct RevertArgs {
    /// Revert every applied step
    #[arg(long)]
    pub all: bool,
}

#[derive(Args, Debug)]
pub struct LeaseArgs {
    #[arg(long)]
    pub client: String,
    #[arg(long)]
    pub property: String,
    /// First day, YYYY-MM-DD
    #[arg(long)]
    pub start: NaiveDate,
    /// Last day, YYYY-MM-DD
    #[arg(long)]
    pub end: NaiveDate,
    #[arg(long)]
    pub rent: f64,
    #[arg(long, default_value = "Cheque")]
    pub payment_method: String,
}

#[derive(Args, Debug)]
pub struct ResetLeasesArgs {
    /// Required: confirms that every lease row is deleted
    #[arg(long)]
    pub yes: bool,
}
