//! Icon set for the TUI.
//!
//! `IconSet` resolves glyphs at runtime from the configured `IconMode`:
//! plain Unicode by default, Nerd Font glyphs when the user opts in.

use arca_app::config::IconMode;
use arca_core::SeverityClass;

#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Severity icon: flame, lightning, shield-check or a neutral dot.
    pub fn severity(&self, class: SeverityClass) -> &'static str {
        match (self.mode, class) {
            (IconMode::NerdFonts, SeverityClass::Critical) => "\u{f06d}", // nf-fa-fire
            (IconMode::NerdFonts, SeverityClass::Caution) => "\u{f0e7}",  // nf-fa-bolt
            (IconMode::NerdFonts, SeverityClass::Safe) => "\u{f132}",     // nf-fa-shield
            (IconMode::NerdFonts, SeverityClass::Neutral) => "\u{f111}",  // nf-fa-circle
            (IconMode::Unicode, SeverityClass::Critical) => "\u{25b2}",   // ▲
            (IconMode::Unicode, SeverityClass::Caution) => "\u{26a1}",    // ⚡
            (IconMode::Unicode, SeverityClass::Safe) => "\u{2713}",       // ✓
            (IconMode::Unicode, SeverityClass::Neutral) => "\u{2022}",    // •
        }
    }

    pub fn dot(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f444}", // nf-oct-dot_fill
            IconMode::Unicode => "\u{25cf}",   // ●
        }
    }

    pub fn alert(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f071}", // nf-fa-warning
            IconMode::Unicode => "\u{26a0}",   // ⚠
        }
    }

    pub fn document(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f15c}", // nf-fa-file_text
            IconMode::Unicode => "\u{2261}",   // ≡
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f061}", // nf-fa-arrow_right
            IconMode::Unicode => "\u{2192}",   // →
        }
    }

    pub fn check(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f00c}", // nf-fa-check
            IconMode::Unicode => "\u{2714}",   // ✔
        }
    }

    pub fn person(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f007}", // nf-fa-user
            IconMode::Unicode => "\u{25c6}",   // ◆
        }
    }
}

/// Spinner frames for the analyzing overlay
pub const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner frame for an animation tick
pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER[(tick as usize) % SPINNER.len()]
}
