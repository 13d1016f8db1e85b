//! arca-app - Application state and orchestration for the ARCA console
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! landing and analyzer screens, the request-sequencing submission model,
//! the Engine shared by the TUI and headless runners, and configuration.

pub mod actions;
pub mod config;
pub mod content;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;
pub mod submission;

// Re-export primary types
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{
    AnalyzerState, AppState, ExportStatus, FormField, InputTab, ResultsScroll, Route, ServiceHealth,
};
pub use submission::{RequestId, Submission};
