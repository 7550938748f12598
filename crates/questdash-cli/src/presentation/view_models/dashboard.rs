use serde::Serialize;

/// Top-level UI mode for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BannerState {
    Loading,
    Ready,
    Empty,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct BannerViewModel {
    pub state: BannerState,
    pub message: String,
}

impl BannerViewModel {
    pub fn loading() -> Self {
        Self {
            state: BannerState::Loading,
            message: "Loading dashboard data...".to_string(),
        }
    }

    pub fn ready() -> Self {
        Self {
            state: BannerState::Ready,
            message: String::new(),
        }
    }

    pub fn empty() -> Self {
        Self {
            state: BannerState::Empty,
            message: "No quests available yet. Generate data after quest activity to populate this dashboard.".to_string(),
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            state: BannerState::Error,
            message: message.to_string(),
        }
    }
}

/// KPI strip values, already defaulted to 0 for missing statuses.
#[derive(Debug, Clone, Serialize)]
pub struct KpiStripViewModel {
    pub total: u64,
    pub finished: u64,
    pub in_progress: u64,
    pub blocked: u64,
    pub abandoned: u64,
}

/// One quest card, fully formatted: every field is display-ready text.
#[derive(Debug, Clone, Serialize)]
pub struct CardViewModel {
    pub title: String,
    pub status_label: String,
    pub badge_class: String,
    pub status_color: (u8, u8, u8),
    pub pitch: String,
    pub quest_id: String,
    pub completion: String,
    pub plan_iterations: String,
    pub fix_iterations: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartSegmentViewModel {
    pub label: &'static str,
    pub value: u64,
    pub color: (u8, u8, u8),
}

/// Status-distribution chart data: one segment per status, fixed order.
#[derive(Debug, Clone, Serialize)]
pub struct StatusChartViewModel {
    pub segments: Vec<ChartSegmentViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendSeriesViewModel {
    pub label: &'static str,
    pub color: (u8, u8, u8),
    pub values: Vec<u64>,
}

/// Trend chart data: x labels are the plotted periods, one series per
/// status in fixed order. Points without a string period were already
/// filtered out by the presenter.
#[derive(Debug, Clone, Serialize)]
pub struct TrendChartViewModel {
    pub labels: Vec<String>,
    pub series: Vec<TrendSeriesViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartsViewModel {
    pub status: StatusChartViewModel,
    pub trend: TrendChartViewModel,
}

/// Complete dashboard snapshot for one render pass.
///
/// `charts` is `None` in the empty state (charts section hidden).
#[derive(Debug, Clone, Serialize)]
pub struct DashboardViewModel {
    pub banner: BannerViewModel,
    pub generated_at: String,
    pub kpis: KpiStripViewModel,
    pub charts: Option<ChartsViewModel>,
    pub cards: Vec<CardViewModel>,
    pub count_label: String,
}
