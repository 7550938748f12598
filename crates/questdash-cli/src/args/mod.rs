mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "questdash")]
#[command(about = "Render quest history dashboards in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the generated payload (falls back to QUESTDASH_DATA,
    /// then the config file, then ./dashboard-data.json)
    #[arg(long, global = true)]
    pub data: Option<String>,

    /// Path to an alternate config file
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
