//! Semantic style builders.

use arca_app::ServiceHealth;
use arca_core::SeverityClass;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn heading() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn brand() -> Style {
    Style::default()
        .fg(palette::BRAND)
        .add_modifier(Modifier::BOLD)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn status_yellow() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

pub fn status_green() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

/// Black on cyan, for the active tab and primary button
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused {
            palette::BORDER_ACTIVE
        } else {
            palette::BORDER_DIM
        }))
}

pub fn card_block(title: &str) -> Block<'_> {
    glass_block(false)
        .title(title)
        .title_style(text_secondary())
        .style(Style::default().bg(palette::CARD_BG))
}

pub fn modal_block(title: &str) -> Block<'_> {
    glass_block(true)
        .title(title)
        .style(Style::default().bg(palette::POPUP_BG))
}

// --- Severity ---

/// Badge style for a severity bucket.
///
/// `pulse_on` alternates for HIGH risks to imitate the pulsing alert badge;
/// other buckets ignore it.
pub fn severity_badge(class: SeverityClass, pulse_on: bool) -> Style {
    let bg = match class {
        SeverityClass::Critical if pulse_on => palette::SEVERITY_CRITICAL_PULSE,
        SeverityClass::Critical => palette::SEVERITY_CRITICAL,
        SeverityClass::Caution => palette::SEVERITY_CAUTION,
        SeverityClass::Safe => palette::SEVERITY_SAFE,
        SeverityClass::Neutral => palette::SEVERITY_NEUTRAL,
    };
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

/// Foreground used for the card border and icon of a severity bucket.
pub fn severity_accent(class: SeverityClass) -> Style {
    let fg = match class {
        SeverityClass::Critical => palette::SEVERITY_CRITICAL,
        SeverityClass::Caution => palette::SEVERITY_CAUTION,
        SeverityClass::Safe => palette::SEVERITY_SAFE,
        SeverityClass::Neutral => palette::SEVERITY_NEUTRAL,
    };
    Style::default().fg(fg)
}

// --- Service status pill ---

/// `(label, style)` for the header status pill.
pub fn health_indicator(health: &ServiceHealth) -> (&'static str, Style) {
    match health {
        ServiceHealth::Unknown => ("unknown", text_muted()),
        ServiceHealth::Checking => ("checking", keybinding()),
        ServiceHealth::Healthy => ("online", status_green().add_modifier(Modifier::BOLD)),
        ServiceHealth::Degraded(_) => ("degraded", keybinding().add_modifier(Modifier::BOLD)),
        ServiceHealth::Unreachable => ("offline", status_red().add_modifier(Modifier::BOLD)),
    }
}
