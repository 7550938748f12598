use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::KpiStripViewModel;

use super::rgb;

/// KPI strip: five labeled counters in one bordered row.
pub struct KpiStripView<'a> {
    kpis: &'a KpiStripViewModel,
}

impl<'a> KpiStripView<'a> {
    pub fn new(kpis: &'a KpiStripViewModel) -> Self {
        Self { kpis }
    }
}

impl<'a> Widget for KpiStripView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title("Summary");
        let inner = block.inner(area);
        block.render(area, buf);

        let cells = [
            ("Total", self.kpis.total, None),
            ("Finished", self.kpis.finished, Some((0x34, 0xd3, 0x99))),
            (
                "In Progress",
                self.kpis.in_progress,
                Some((0x60, 0xa5, 0xfa)),
            ),
            ("Blocked", self.kpis.blocked, Some((0xf5, 0x9e, 0x0b))),
            ("Abandoned", self.kpis.abandoned, Some((0xf8, 0x71, 0x71))),
        ];

        let chunks = Layout::horizontal([Constraint::Ratio(1, 5); 5]).split(inner);

        for ((label, value, color), chunk) in cells.iter().zip(chunks.iter()) {
            let value_style = match color {
                Some(c) => Style::default().fg(rgb(*c)).add_modifier(Modifier::BOLD),
                None => Style::default().add_modifier(Modifier::BOLD),
            };
            let line = Line::from(vec![
                Span::styled(format!("{}: ", label), Style::default().add_modifier(Modifier::DIM)),
                Span::styled(value.to_string(), value_style),
            ]);
            Paragraph::new(line).render(*chunk, buf);
        }
    }
}
