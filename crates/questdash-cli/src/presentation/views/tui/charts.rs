use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType,
        Paragraph, Widget},
};

use crate::presentation::charts::{ChartSet, FALLBACK_NOTE, StatusChart, TrendChart};

use super::rgb;

/// Charts section: distribution bar chart on the left, trend line
/// chart on the right. Missing instances degrade to the fallback note
/// in each panel.
pub struct ChartsView<'a> {
    charts: &'a ChartSet,
}

impl<'a> ChartsView<'a> {
    pub fn new(charts: &'a ChartSet) -> Self {
        Self { charts }
    }
}

impl<'a> Widget for ChartsView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks =
            Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
                .split(area);

        match self.charts.status() {
            Some(chart) => render_status_chart(chart, chunks[0], buf),
            None => render_fallback("Status Distribution", chunks[0], buf),
        }

        match self.charts.trend() {
            Some(chart) => render_trend_chart(chart, chunks[1], buf),
            None => render_fallback("Status Trend", chunks[1], buf),
        }
    }
}

fn render_fallback(title: &str, area: Rect, buf: &mut Buffer) {
    Paragraph::new(FALLBACK_NOTE)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .render(area, buf);
}

fn render_status_chart(chart: &StatusChart, area: Rect, buf: &mut Buffer) {
    let bars: Vec<Bar> = chart
        .data
        .segments
        .iter()
        .map(|segment| {
            Bar::default()
                .label(Line::from(segment.label))
                .value(segment.value)
                .style(Style::default().fg(rgb(segment.color)))
        })
        .collect();

    BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Status Distribution"),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(11)
        .bar_gap(1)
        .render(area, buf);
}

fn render_trend_chart(chart: &TrendChart, area: Rect, buf: &mut Buffer) {
    if chart.data.labels.is_empty() {
        Paragraph::new("(no trend data)")
            .block(Block::default().borders(Borders::ALL).title("Status Trend"))
            .render(area, buf);
        return;
    }

    let datasets: Vec<Dataset> = chart
        .data
        .series
        .iter()
        .zip(chart.plots.iter())
        .map(|(series, plot)| {
            Dataset::default()
                .name(series.label)
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(rgb(series.color)))
                .data(plot)
        })
        .collect();

    let y_max = chart.y_max.max(1);
    let y_labels: Vec<Span> = vec![
        Span::raw("0"),
        Span::raw((y_max / 2).to_string()),
        Span::raw(y_max.to_string()),
    ];

    let x_labels: Vec<Span> = vec![
        Span::raw(chart.data.labels.first().cloned().unwrap_or_default()),
        Span::raw(chart.data.labels.last().cloned().unwrap_or_default()),
    ];

    Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL).title("Status Trend"))
        .x_axis(Axis::default().bounds([0.0, chart.x_max]).labels(x_labels))
        .y_axis(Axis::default().bounds([0.0, y_max as f64]).labels(y_labels))
        .render(area, buf);
}
