use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Render the dashboard once to the console (default)")]
    Show,

    #[command(about = "Open the interactive dashboard (q quits, r reloads)")]
    Tui,

    #[command(about = "Validate the payload and report per-record advisories")]
    Check,
}
