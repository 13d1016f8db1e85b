//! Overlay shown while an analysis request is in flight.

use arca_app::content::PIPELINE;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::modal_overlay;
use crate::theme::{icons, styles};

/// Ticks each pipeline stage stays highlighted (~1.5s at 50ms ticks)
const STAGE_TICKS: u64 = 30;

pub struct AnalyzingOverlay {
    tick: u64,
}

impl AnalyzingOverlay {
    pub fn new(tick: u64) -> Self {
        Self { tick }
    }

    /// Pipeline stage to highlight. The service reports no progress, so the
    /// stages simply rotate.
    pub fn active_stage(&self) -> usize {
        ((self.tick / STAGE_TICKS) as usize) % PIPELINE.len()
    }
}

impl Widget for AnalyzingOverlay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal = modal_overlay::centered_rect(44, (PIPELINE.len() as u16) + 5, area);
        modal_overlay::prepare_modal(buf, area, modal);

        let mut lines = vec![
            Line::from(vec![
                Span::styled(icons::spinner_frame(self.tick), styles::accent_bold()),
                Span::styled(" Analyzing regulation...", styles::heading()),
            ]),
            Line::default(),
        ];
        let active = self.active_stage();
        for (index, step) in PIPELINE.iter().enumerate() {
            let style = if index == active {
                styles::accent_bold()
            } else {
                styles::text_muted()
            };
            lines.push(Line::from(Span::styled(step.agent, style)));
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(styles::modal_block(" ARCA ").title_style(styles::brand().add_modifier(Modifier::BOLD)))
            .render(modal, buf);
    }
}
