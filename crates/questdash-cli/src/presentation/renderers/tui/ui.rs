use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::views::tui::{BannerView, CardListView, ChartsView, KpiStripView};

use super::app::AppState;

pub(crate) fn draw(f: &mut Frame, state: &AppState) {
    let show_charts = state
        .dashboard
        .as_ref()
        .is_some_and(|vm| vm.charts.is_some());

    let constraints = if show_charts {
        vec![
            Constraint::Length(1),  // Banner
            Constraint::Length(3),  // KPI strip
            Constraint::Length(12), // Charts section
            Constraint::Min(5),     // Cards
            Constraint::Length(2),  // Footer
        ]
    } else {
        vec![
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(2),
        ]
    };

    let chunks = Layout::vertical(constraints).split(f.area());

    f.render_widget(BannerView::new(&state.banner), chunks[0]);

    let Some(vm) = &state.dashboard else {
        // Error or loading: main content hidden, banner carries the
        // whole story.
        render_footer(f, chunks[chunks.len() - 1], state);
        return;
    };

    f.render_widget(KpiStripView::new(&vm.kpis), chunks[1]);

    let cards_chunk = if show_charts {
        f.render_widget(ChartsView::new(&state.charts), chunks[2]);
        chunks[3]
    } else {
        chunks[2]
    };

    f.render_widget(
        CardListView::new(&vm.cards, &vm.count_label, state.card_scroll),
        cards_chunk,
    );

    render_footer(f, chunks[chunks.len() - 1], state);
}

fn render_footer(f: &mut Frame, area: Rect, state: &AppState) {
    let footer = Paragraph::new(Line::from(format!(
        "q quit | r reload | j/k scroll | {}  (generated {})",
        state.data_path.display(),
        state
            .dashboard
            .as_ref()
            .map(|vm| vm.generated_at.as_str())
            .unwrap_or("-"),
    )))
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    f.render_widget(footer, area);
}
