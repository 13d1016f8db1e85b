//! Header bar: product name, current page and service status pill.

use arca_app::{Route, ServiceHealth};
use arca_app::content::PRODUCT_NAME;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{icons::IconSet, palette, styles};

pub struct AppHeader<'a> {
    route: Route,
    health: &'a ServiceHealth,
    base_url: &'a str,
    icons: IconSet,
}

impl<'a> AppHeader<'a> {
    pub fn new(route: Route, health: &'a ServiceHealth, icons: IconSet) -> Self {
        Self {
            route,
            health,
            base_url: "",
            icons,
        }
    }

    /// Show the service address next to the status pill when there is room.
    pub fn base_url(mut self, base_url: &'a str) -> Self {
        self.base_url = base_url;
        self
    }

    fn page_name(&self) -> &'static str {
        match self.route {
            Route::Home => "Home",
            Route::Analyzer => "Analyzer",
        }
    }

    fn pill(&self) -> Line<'static> {
        let (label, style) = styles::health_indicator(self.health);
        Line::from(vec![
            Span::styled(self.icons.dot(), style),
            Span::raw(" "),
            Span::styled(format!("service {label}"), style),
            Span::raw(" "),
        ])
    }
}

impl Widget for AppHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled(PRODUCT_NAME, styles::brand()),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled(self.page_name(), styles::text_secondary()),
        ]);
        let title_width = title.width() as u16;
        buf.set_line(inner.x, inner.y, &title, inner.width);

        let pill = self.pill();
        let pill_width = pill.width() as u16;
        if title_width + pill_width + 1 > inner.width {
            return;
        }
        let pill_x = inner.right() - pill_width;
        buf.set_line(pill_x, inner.y, &pill, pill_width);

        // Address goes between the two when it fits whole
        let url_width = self.base_url.width() as u16;
        if url_width > 0 && title_width + url_width + pill_width + 4 <= inner.width {
            let url_x = pill_x - url_width - 2;
            buf.set_stringn(
                url_x,
                inner.y,
                self.base_url,
                url_width as usize,
                styles::text_muted(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use arca_app::config::IconMode;

    fn icons() -> IconSet {
        IconSet::new(IconMode::Unicode)
    }

    #[test]
    fn test_header_shows_product_and_page() {
        let mut term = TestTerminal::new();
        let health = ServiceHealth::Unknown;
        term.render_widget(AppHeader::new(Route::Analyzer, &health, icons()), term.area());

        assert!(term.buffer_contains("ARCA"));
        assert!(term.buffer_contains("Analyzer"));
    }

    #[test]
    fn test_header_health_pill() {
        let mut term = TestTerminal::new();
        let health = ServiceHealth::Unreachable;
        term.render_widget(AppHeader::new(Route::Home, &health, icons()), term.area());

        assert!(term.buffer_contains("service offline"));
    }

    #[test]
    fn test_header_shows_url_when_room() {
        let mut term = TestTerminal::new();
        let health = ServiceHealth::Healthy;
        let header = AppHeader::new(Route::Home, &health, icons()).base_url("http://localhost:8000");
        term.render_widget(header, term.area());

        assert!(term.buffer_contains("http://localhost:8000"));
        assert!(term.buffer_contains("service online"));
    }

    #[test]
    fn test_header_drops_url_when_narrow() {
        let mut term = TestTerminal::compact();
        let health = ServiceHealth::Healthy;
        let header = AppHeader::new(Route::Home, &health, icons()).base_url("http://localhost:8000");
        term.render_widget(header, term.area());

        assert!(!term.buffer_contains("localhost"));
        assert!(term.buffer_contains("ARCA"));
    }
}
