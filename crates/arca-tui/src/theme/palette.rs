//! Color palette.
//!
//! Named terminal colors keep the UI readable on both light-on-dark and
//! 16-color terminals; a few RGB tones are used for cards.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const CARD_BG: Color = Color::Rgb(18, 21, 28);
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43);

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
pub const BRAND: Color = Color::LightBlue;
pub const CONTRAST_FG: Color = Color::Black;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;

// --- Severity badges ---
pub const SEVERITY_CRITICAL: Color = Color::LightRed;
pub const SEVERITY_CRITICAL_PULSE: Color = Color::Magenta;
pub const SEVERITY_CAUTION: Color = Color::Yellow;
pub const SEVERITY_SAFE: Color = Color::LightCyan;
pub const SEVERITY_NEUTRAL: Color = Color::Gray;

// --- Effects ---
pub const SHADOW: Color = Color::Black;
