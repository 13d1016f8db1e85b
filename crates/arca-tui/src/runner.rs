//! TUI runner - entry point and event loop

use arca_app::config::Settings;
use arca_app::{Engine, Message};
use arca_client::AnalysisApi;
use arca_core::Result;
use ratatui::DefaultTerminal;
use tracing::{error, info};

use crate::{event, render, terminal};

/// Run the TUI against an analysis client until the user quits.
pub async fn run<A>(api: A, settings: Settings) -> Result<()>
where
    A: AnalysisApi + Send + Sync + 'static,
{
    info!(
        "Starting TUI against {} (icons: {})",
        settings.api.base_url, settings.ui.icons
    );

    let mut engine = Engine::new(api, settings);
    let mut term = terminal::enter();

    // Ask the service once so the header pill has something to show
    engine.process_message(Message::CheckHealth);

    let result = run_loop(&mut term, &mut engine);

    terminal::leave();
    if let Err(e) = &result {
        error!("TUI loop ended with error: {}", e);
    }
    result
}

/// Drain engine messages, draw, then block briefly on terminal input.
fn run_loop<A>(term: &mut DefaultTerminal, engine: &mut Engine<A>) -> Result<()>
where
    A: AnalysisApi + Send + Sync + 'static,
{
    while !engine.should_quit() {
        engine.drain_pending_messages();

        term.draw(|frame| render::view(frame, &mut engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }
    info!("Quit requested, leaving TUI");
    Ok(())
}
