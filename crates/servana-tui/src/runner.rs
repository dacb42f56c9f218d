//! Main TUI runner - entry point and event loop

use servana_app::config::Settings;
use servana_app::theme::Appearance;
use servana_app::Engine;
use servana_core::prelude::*;

use super::{event, render, terminal};

/// Run the storefront until the user quits or a termination signal arrives
pub async fn run(settings: Settings, system: Appearance) -> Result<()> {
    let mut term = terminal::init()?;

    let mut engine = Engine::from_settings(settings, system);
    info!(
        "Starting storefront (dark mode: {})",
        engine.state.theme.is_dark_mode()
    );
    engine.start_background_tasks();

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();
    if let Err(e) = terminal::restore() {
        warn!("{}", e);
    }

    result
}

/// Main event loop: drain background results, draw, then poll the keyboard
fn run_loop(term: &mut ratatui::DefaultTerminal, engine: &mut Engine) -> Result<()> {
    while !engine.should_quit() {
        engine.drain_pending_messages();

        term.draw(|frame| render::view(frame, &engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }
    info!("Event loop exited");
    Ok(())
}
