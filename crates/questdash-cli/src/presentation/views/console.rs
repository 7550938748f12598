//! Console rendering of the dashboard view model.
//!
//! All payload-sourced text reaches the terminal as literal text via
//! `println!`; nothing is ever re-parsed as markup or control syntax.

use owo_colors::OwoColorize;

use crate::presentation::charts::{ChartCapability, ChartSet, FALLBACK_NOTE, StatusChart, TrendChart};
use crate::presentation::view_models::{BannerState, BannerViewModel, DashboardViewModel};

const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

pub struct ConsoleDashboardView {
    use_color: bool,
}

impl ConsoleDashboardView {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    pub fn render_banner(&self, banner: &BannerViewModel) {
        match banner.state {
            BannerState::Ready => {}
            BannerState::Loading => println!("{}", self.dim(&banner.message)),
            BannerState::Empty => println!("{}", self.paint(&banner.message, (0xf5, 0x9e, 0x0b))),
            BannerState::Error => println!("{}", self.paint(&banner.message, (0xf8, 0x71, 0x71))),
        }
    }

    /// Render the full dashboard body. The caller has already decided
    /// the banner state; an empty view model renders KPIs and the
    /// cleared card grid but no charts section.
    pub fn render_dashboard(
        &self,
        vm: &DashboardViewModel,
        charts: &ChartSet,
        capability: ChartCapability,
    ) {
        println!("{}", self.bold("Quest Dashboard"));
        println!("Generated: {}", vm.generated_at);
        println!();

        self.render_kpis(vm);

        if vm.charts.is_some() {
            println!();
            self.render_charts_section(charts, capability);
        }

        println!();
        println!("{}  ({})", self.bold("Quests"), vm.count_label);
        for card in &vm.cards {
            self.render_card(card);
        }
    }

    fn render_kpis(&self, vm: &DashboardViewModel) {
        println!(
            "Total {}   Finished {}   In Progress {}   Blocked {}   Abandoned {}",
            self.bold(&vm.kpis.total.to_string()),
            self.bold(&vm.kpis.finished.to_string()),
            self.bold(&vm.kpis.in_progress.to_string()),
            self.bold(&vm.kpis.blocked.to_string()),
            self.bold(&vm.kpis.abandoned.to_string()),
        );
    }

    fn render_charts_section(&self, charts: &ChartSet, capability: ChartCapability) {
        println!("{}", self.bold("Status Distribution"));
        match (capability, charts.status()) {
            (ChartCapability::Available { width }, Some(chart)) => {
                self.render_status_chart(chart, width)
            }
            _ => println!("  {}", FALLBACK_NOTE),
        }

        println!("{}", self.bold("Status Trend"));
        match (capability, charts.trend()) {
            (ChartCapability::Available { .. }, Some(chart)) => self.render_trend_chart(chart),
            _ => println!("  {}", FALLBACK_NOTE),
        }
    }

    fn render_status_chart(&self, chart: &StatusChart, width: u16) {
        let bar_space = usize::from(width).saturating_sub(26).clamp(10, 40);
        let max = chart.max_value.max(1);

        for segment in &chart.data.segments {
            let len = (segment.value as usize * bar_space) / max as usize;
            let bar: String = "█".repeat(len);
            println!(
                "  {:<12} {} {}",
                segment.label,
                self.paint(&bar, segment.color),
                segment.value
            );
        }
    }

    fn render_trend_chart(&self, chart: &TrendChart) {
        if chart.data.labels.is_empty() {
            println!("  (no trend data)");
            return;
        }

        let max = chart.y_max.max(1);
        for series in &chart.data.series {
            let spark: String = series
                .values
                .iter()
                .map(|v| SPARK_LEVELS[(v * 7 / max) as usize])
                .collect();
            println!("  {:<12} {}", series.label, self.paint(&spark, series.color));
        }
        println!(
            "  {:<12} {} .. {}",
            "",
            chart.data.labels.first().map(String::as_str).unwrap_or(""),
            chart.data.labels.last().map(String::as_str).unwrap_or("")
        );
    }

    fn render_card(&self, card: &crate::presentation::view_models::CardViewModel) {
        println!();
        println!(
            "{} [{}]",
            self.bold(&card.title),
            self.paint(&card.status_label, card.status_color)
        );
        println!("  {}", card.pitch);
        println!(
            "  Quest ID: {}  |  Completion Date: {}  |  Iterations: plan {} / fix {}",
            card.quest_id, card.completion, card.plan_iterations, card.fix_iterations
        );
    }

    fn paint(&self, text: &str, (r, g, b): (u8, u8, u8)) -> String {
        if self.use_color {
            text.truecolor(r, g, b).to_string()
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.use_color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.use_color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}
