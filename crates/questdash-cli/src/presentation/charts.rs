//! Chart instance lifecycle.
//!
//! A [`ChartSet`] owns at most one live distribution chart and one
//! live trend chart. Every render pass tears the previous instances
//! down before constructing new ones, and nulls them out when no chart
//! data is available, so two consecutive renders can never leak a
//! stale instance.

use is_terminal::IsTerminal;
use terminal_size::{Width, terminal_size};

use crate::presentation::view_models::{ChartsViewModel, StatusChartViewModel, TrendChartViewModel};

/// Fallback note emitted into both chart panels when no chart backend
/// is available. Degraded rendering, not an error.
pub const FALLBACK_NOTE: &str = "Charts unavailable: terminal cannot render charts.";

/// Whether the output target can carry chart drawings at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartCapability {
    Available { width: u16 },
    Unavailable,
}

impl ChartCapability {
    /// Probe stdout: charts need a tty with a known width.
    pub fn detect() -> Self {
        if !std::io::stdout().is_terminal() {
            return ChartCapability::Unavailable;
        }
        match terminal_size() {
            Some((Width(w), _)) if w >= 20 => ChartCapability::Available { width: w },
            _ => ChartCapability::Unavailable,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, ChartCapability::Available { .. })
    }
}

/// A constructed distribution chart: segments plus the scale maximum.
#[derive(Debug, Clone)]
pub struct StatusChart {
    pub data: StatusChartViewModel,
    pub max_value: u64,
}

/// A constructed trend chart: per-series plot points with axis bounds.
#[derive(Debug, Clone)]
pub struct TrendChart {
    pub data: TrendChartViewModel,
    /// (x, y) coordinates per series, index-aligned with `data.series`
    pub plots: Vec<Vec<(f64, f64)>>,
    pub x_max: f64,
    pub y_max: u64,
}

impl StatusChart {
    fn build(data: &StatusChartViewModel) -> Self {
        let max_value = data.segments.iter().map(|s| s.value).max().unwrap_or(0);
        StatusChart {
            data: data.clone(),
            max_value,
        }
    }
}

impl TrendChart {
    fn build(data: &TrendChartViewModel) -> Self {
        let plots: Vec<Vec<(f64, f64)>> = data
            .series
            .iter()
            .map(|series| {
                series
                    .values
                    .iter()
                    .enumerate()
                    .map(|(i, v)| (i as f64, *v as f64))
                    .collect()
            })
            .collect();

        let y_max = data
            .series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .max()
            .unwrap_or(0);

        TrendChart {
            data: data.clone(),
            plots,
            x_max: (data.labels.len().saturating_sub(1)).max(1) as f64,
            y_max,
        }
    }
}

/// Owner of the two chart instances for one dashboard.
#[derive(Debug, Default)]
pub struct ChartSet {
    status: Option<StatusChart>,
    trend: Option<TrendChart>,
}

impl ChartSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild both charts from fresh data, or null them out when no
    /// data is available. Existing instances are always destroyed
    /// first.
    pub fn render(&mut self, charts: Option<&ChartsViewModel>) {
        self.teardown();

        if let Some(charts) = charts {
            self.status = Some(StatusChart::build(&charts.status));
            self.trend = Some(TrendChart::build(&charts.trend));
        }
    }

    /// Destroy any live instances.
    pub fn teardown(&mut self) {
        self.status = None;
        self.trend = None;
    }

    pub fn status(&self) -> Option<&StatusChart> {
        self.status.as_ref()
    }

    pub fn trend(&self) -> Option<&TrendChart> {
        self.trend.as_ref()
    }

    /// Number of live chart instances (at most 2).
    pub fn live_charts(&self) -> usize {
        self.status.is_some() as usize + self.trend.is_some() as usize
    }
}
