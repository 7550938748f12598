use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::CardViewModel;

use super::rgb;

/// Scrollable quest card list.
///
/// Every payload-sourced field goes through `Span::raw`, so embedded
/// content is always literal text.
pub struct CardListView<'a> {
    cards: &'a [CardViewModel],
    count_label: &'a str,
    scroll: u16,
}

impl<'a> CardListView<'a> {
    pub fn new(cards: &'a [CardViewModel], count_label: &'a str, scroll: u16) -> Self {
        Self {
            cards,
            count_label,
            scroll,
        }
    }

    /// Total rendered lines, used by the app to clamp scrolling.
    pub fn line_count(cards: &[CardViewModel]) -> usize {
        cards.len() * 4
    }
}

impl<'a> Widget for CardListView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines: Vec<Line> = Vec::with_capacity(self.cards.len() * 4);

        for card in self.cards {
            lines.push(Line::from(vec![
                Span::styled(
                    card.title.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(
                    format!("[{}]", card.status_label),
                    Style::default().fg(rgb(card.status_color)),
                ),
            ]));
            lines.push(Line::from(Span::raw(format!("  {}", card.pitch))));
            lines.push(Line::from(vec![
                Span::styled("  Quest ID: ", Style::default().add_modifier(Modifier::DIM)),
                Span::raw(card.quest_id.as_str()),
                Span::styled("  Completion: ", Style::default().add_modifier(Modifier::DIM)),
                Span::raw(card.completion.as_str()),
                Span::styled("  Iterations: ", Style::default().add_modifier(Modifier::DIM)),
                Span::raw(format!(
                    "plan {} / fix {}",
                    card.plan_iterations, card.fix_iterations
                )),
            ]));
            lines.push(Line::default());
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Quests ({})", self.count_label)),
            )
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}
