//! Theme for the ARCA TUI.
//!
//! - `palette`: raw color constants
//! - `styles`: semantic style builders, including severity styling
//! - `icons`: glyphs resolved from the configured `IconMode`

pub mod icons;
pub mod palette;
pub mod styles;
