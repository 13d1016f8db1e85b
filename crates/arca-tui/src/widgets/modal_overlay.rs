//! Overlay helpers: centering, background dimming and drop shadows.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::palette;

/// Center a fixed-size rect within `area`, clamped to the area's size.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

/// Restyle every cell in `area` with muted colors so an overlay stands out.
pub fn dim_background(buf: &mut Buffer, area: Rect) {
    let dim = Style::default()
        .fg(palette::TEXT_MUTED)
        .bg(palette::DEEPEST_BG);
    let area = area.intersection(buf.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim);
            }
        }
    }
}

/// One-cell shadow along the right and bottom edges of `rect`.
pub fn render_shadow(buf: &mut Buffer, rect: Rect) {
    let shadow = Style::default().bg(palette::SHADOW);
    let right = Rect::new(rect.right(), rect.y.saturating_add(1), 1, rect.height);
    let bottom = Rect::new(rect.x.saturating_add(1), rect.bottom(), rect.width, 1);
    for edge in [right, bottom] {
        buf.set_style(edge.intersection(buf.area), shadow);
    }
}

/// Dim `area`, then clear and shadow the modal rect so it can be drawn on.
pub fn prepare_modal(buf: &mut Buffer, area: Rect, modal: Rect) {
    dim_background(buf, area);
    render_shadow(buf, modal);
    Clear.render(modal, buf);
}
