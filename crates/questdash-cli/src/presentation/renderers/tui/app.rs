use std::path::PathBuf;

use crate::loader::load_dashboard;
use crate::presentation::charts::ChartSet;
use crate::presentation::presenters::build_dashboard;
use crate::presentation::view_models::{BannerViewModel, DashboardViewModel};
use crate::presentation::views::tui::CardListView;

/// TUI application state: one dashboard render pass plus scroll
/// position. `load` runs the same loading -> ready/empty/error state
/// machine as the console path; `r` triggers it again from scratch.
pub(crate) struct AppState {
    pub data_path: PathBuf,
    pub banner: BannerViewModel,
    pub dashboard: Option<DashboardViewModel>,
    pub charts: ChartSet,
    pub card_scroll: u16,
}

impl AppState {
    pub fn new(data_path: PathBuf) -> Self {
        Self {
            data_path,
            banner: BannerViewModel::loading(),
            dashboard: None,
            charts: ChartSet::new(),
            card_scroll: 0,
        }
    }

    /// Run one full load/render pass.
    pub fn load(&mut self) {
        self.banner = BannerViewModel::loading();
        self.card_scroll = 0;

        match load_dashboard(&self.data_path) {
            Ok(payload) => {
                let vm = build_dashboard(&payload);
                self.banner = vm.banner.clone();
                self.charts.render(vm.charts.as_ref());
                self.dashboard = Some(vm);
            }
            Err(err) => {
                // Main content hidden on error: drop the stale view
                // model and tear down any live chart instances.
                self.banner = BannerViewModel::error(err.banner_message());
                self.dashboard = None;
                self.charts.teardown();
            }
        }
    }

    pub fn scroll_down(&mut self) {
        let max = self
            .dashboard
            .as_ref()
            .map(|vm| CardListView::line_count(&vm.cards) as u16)
            .unwrap_or(0);
        if self.card_scroll < max.saturating_sub(1) {
            self.card_scroll += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.card_scroll = self.card_scroll.saturating_sub(1);
    }
}
