use anyhow::Result;
use is_terminal::IsTerminal;

use super::args::{Cli, Commands};
use super::handlers;
use crate::config::Config;

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let data_path = config.resolve_data_path(cli.data.as_deref());

    let use_color =
        !cli.no_color && config.color.unwrap_or_else(|| std::io::stdout().is_terminal());

    // The dashboard is the product: no subcommand means `show`.
    match cli.command.unwrap_or(Commands::Show) {
        Commands::Show => handlers::show::handle(&data_path, cli.format, use_color),
        Commands::Tui => handlers::tui::handle(data_path),
        Commands::Check => handlers::check::handle(&data_path, cli.format),
    }
}
