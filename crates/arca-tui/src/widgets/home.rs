//! Landing page: hero, pipeline, team roster and footer.
//!
//! Everything here is static copy from `arca_app::content`.

use arca_app::content::{
    FOOTER_CONNECT, FOOTER_TAGLINE, HERO_CALL_TO_ACTION, HERO_SUBTITLE, HERO_TITLE, PIPELINE,
    PRODUCT_NAME, TEAM, TEAM_NAME, TEAM_TAGLINE,
};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{icons::IconSet, styles};

pub struct HomeView {
    icons: IconSet,
}

impl HomeView {
    pub fn new(icons: IconSet) -> Self {
        Self { icons }
    }

    fn render_hero(&self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(Span::styled(HERO_TITLE, styles::brand())),
            Line::from(Span::styled(HERO_SUBTITLE, styles::text_secondary())),
            Line::default(),
            Line::from(vec![
                Span::styled(format!(" {HERO_CALL_TO_ACTION} "), styles::focused_selected()),
                Span::styled("  press ", styles::text_muted()),
                Span::styled("Enter", styles::keybinding()),
            ]),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }

    fn render_pipeline(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(" How It Works ");
        let inner = block.inner(area);
        block.render(area, buf);

        let columns = Layout::horizontal(vec![Constraint::Ratio(1, PIPELINE.len() as u32); PIPELINE.len()])
            .split(inner);

        for (index, (step, column)) in PIPELINE.iter().zip(columns.iter()).enumerate() {
            let mut heading = vec![Span::styled(format!("{}. ", index + 1), styles::accent_bold())];
            heading.push(Span::styled(step.agent, styles::heading()));
            if index + 1 < PIPELINE.len() {
                heading.push(Span::styled(format!(" {}", self.icons.arrow()), styles::text_muted()));
            }
            Paragraph::new(vec![
                Line::from(heading),
                Line::from(Span::styled(step.description, styles::text_secondary())),
            ])
            .wrap(Wrap { trim: true })
            .render(*column, buf);
        }
    }

    fn render_team(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(" Meet the Team ");
        let inner = block.inner(area);
        block.render(area, buf);

        let [intro, roster] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(inner);

        Paragraph::new(vec![
            Line::from(Span::styled(TEAM_NAME, styles::accent_bold())),
            Line::from(Span::styled(TEAM_TAGLINE, styles::text_muted())),
        ])
        .render(intro, buf);

        // Three members per row
        let rows = TEAM.len().div_ceil(3);
        let row_areas = Layout::vertical(vec![Constraint::Length(2); rows]).split(roster);
        for (members, row) in TEAM.chunks(3).zip(row_areas.iter()) {
            let cells = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(*row);
            for (member, cell) in members.iter().zip(cells.iter()) {
                Paragraph::new(vec![
                    Line::from(vec![
                        Span::styled(self.icons.person(), styles::accent()),
                        Span::raw(" "),
                        Span::styled(member.name, styles::text_primary()),
                    ]),
                    Line::from(Span::styled(format!("  {}", member.role), styles::text_muted())),
                ])
                .render(*cell, buf);
            }
        }
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(PRODUCT_NAME, styles::brand()),
            Span::styled(format!(" {FOOTER_TAGLINE}"), styles::text_muted()),
            Span::styled("  |  ", styles::text_muted()),
            Span::styled(FOOTER_CONNECT, styles::text_secondary()),
        ]);
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

impl Widget for HomeView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [hero, pipeline, team, footer] = Layout::vertical([
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .areas(area);

        // Blank line above the hero copy
        let hero = Rect {
            y: hero.y.saturating_add(1),
            height: hero.height.saturating_sub(1),
            ..hero
        };

        self.render_hero(hero, buf);
        self.render_pipeline(pipeline, buf);
        self.render_team(team, buf);
        self.render_footer(footer, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use arca_app::config::IconMode;

    fn render(width: u16, height: u16) -> TestTerminal {
        let mut term = TestTerminal::with_size(width, height);
        term.render_widget(HomeView::new(IconSet::new(IconMode::Unicode)), term.area());
        term
    }

    #[test]
    fn test_hero_copy() {
        let term = render(100, 30);
        assert!(term.buffer_contains(HERO_TITLE));
        assert!(term.buffer_contains(HERO_CALL_TO_ACTION));
    }

    #[test]
    fn test_pipeline_lists_every_agent() {
        let term = render(120, 30);
        for step in PIPELINE {
            assert!(term.buffer_contains(step.agent), "missing {}", step.agent);
        }
    }

    #[test]
    fn test_team_roster() {
        let term = render(120, 30);
        assert!(term.buffer_contains(TEAM_NAME));
        for member in TEAM {
            assert!(term.buffer_contains(member.name), "missing {}", member.name);
        }
    }

    #[test]
    fn test_footer() {
        let term = render(100, 30);
        assert!(term.buffer_contains(FOOTER_CONNECT));
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let _ = render(10, 4);
    }
}
