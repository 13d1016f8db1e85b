//! Custom widget components

mod analyzer_form;
mod analyzing;
mod error_banner;
mod header;
mod home;
mod key_hints;
pub mod modal_overlay;
mod results;
mod risk_card;

pub use analyzer_form::{word_counter, AnalyzerForm};
pub use analyzing::AnalyzingOverlay;
pub use error_banner::{ErrorBanner, BANNER_HEIGHT};
pub use header::AppHeader;
pub use home::HomeView;
pub use key_hints::KeyHints;
pub use results::ResultsView;
pub use risk_card::RiskCard;
