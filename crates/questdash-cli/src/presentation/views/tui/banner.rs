use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::presentation::view_models::{BannerState, BannerViewModel};

/// Single-line state banner across the top of the screen.
pub struct BannerView<'a> {
    banner: &'a BannerViewModel,
}

impl<'a> BannerView<'a> {
    pub fn new(banner: &'a BannerViewModel) -> Self {
        Self { banner }
    }
}

impl<'a> Widget for BannerView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (label, color) = match self.banner.state {
            BannerState::Loading => ("LOADING", Color::DarkGray),
            BannerState::Ready => ("READY", Color::Rgb(0x34, 0xd3, 0x99)),
            BannerState::Empty => ("EMPTY", Color::Rgb(0xf5, 0x9e, 0x0b)),
            BannerState::Error => ("ERROR", Color::Rgb(0xf8, 0x71, 0x71)),
        };

        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", label),
                Style::default().fg(Color::Black).bg(color),
            ),
            Span::raw(" "),
            Span::raw(self.banner.message.as_str()),
        ]);

        Paragraph::new(line)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .render(area, buf);
    }
}
