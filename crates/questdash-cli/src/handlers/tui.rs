use std::path::PathBuf;

use anyhow::Result;

use crate::presentation::renderers::tui;

pub fn handle(data_path: PathBuf) -> Result<()> {
    tui::run(data_path)
}
