mod banner;
mod cards;
mod charts;
mod kpi;

pub use banner::BannerView;
pub use cards::CardListView;
pub use charts::ChartsView;
pub use kpi::KpiStripView;

use ratatui::style::Color;

pub(crate) fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}
