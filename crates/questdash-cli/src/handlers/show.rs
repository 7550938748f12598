//! One-shot console render.
//!
//! Drives the loading -> ready | empty | error state machine over a
//! single pass: banner first, then either the full dashboard body or
//! nothing beyond the banner. Error banners exit with status 1 so
//! scripts can detect a failed render.

use std::path::Path;

use anyhow::Result;

use crate::args::OutputFormat;
use crate::loader::load_dashboard;
use crate::presentation::charts::{ChartCapability, ChartSet};
use crate::presentation::presenters::build_dashboard;
use crate::presentation::view_models::BannerViewModel;
use crate::presentation::views::ConsoleDashboardView;

pub fn handle(data_path: &Path, format: OutputFormat, use_color: bool) -> Result<()> {
    let view = ConsoleDashboardView::new(use_color);

    if format == OutputFormat::Plain {
        view.render_banner(&BannerViewModel::loading());
    }

    let payload = match load_dashboard(data_path) {
        Ok(payload) => payload,
        Err(err) => {
            let banner = BannerViewModel::error(err.banner_message());
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&banner)?),
                OutputFormat::Plain => view.render_banner(&banner),
            }
            std::process::exit(1);
        }
    };

    let vm = build_dashboard(&payload);

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&vm)?);
        return Ok(());
    }

    let mut charts = ChartSet::new();
    charts.render(vm.charts.as_ref());

    view.render_banner(&vm.banner);
    view.render_dashboard(&vm, &charts, ChartCapability::detect());

    Ok(())
}
