//! Dismissible error banner for the analyzer page.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{icons::IconSet, palette, styles};

/// Rows the banner occupies, borders included
pub const BANNER_HEIGHT: u16 = 3;

pub struct ErrorBanner<'a> {
    message: &'a str,
    icons: IconSet,
}

impl<'a> ErrorBanner<'a> {
    pub fn new(message: &'a str, icons: IconSet) -> Self {
        Self { message, icons }
    }
}

impl Widget for ErrorBanner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .border_style(styles::status_red())
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(self.icons.alert(), styles::status_red()),
                Span::styled(" Error ", styles::status_red()),
            ]))
            .title_bottom(Line::from(vec![
                Span::styled(" Esc", styles::keybinding()),
                Span::styled(" dismiss ", styles::text_muted()),
            ]))
            .style(Style::default().bg(palette::CARD_BG));

        Paragraph::new(Line::from(Span::styled(self.message, styles::text_primary())))
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
