use std::panic;

use crate::client::PredictClient;
use crate::config::Config;
use crate::request;
use crate::ui::{tui_events, tui_render, tui_state};
use anyhow::Result;
use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// Run the interactive form until the user quits. Each submission
/// replaces the previous result wholesale.
pub fn run_tui(config: &Config, client: &PredictClient) -> Result<()> {
    // Setup panic hook to restore terminal state on panic
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    // Initialize UI state from CLI defaults
    let mut state = tui_state::UiState::new(config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(std::io::stdout());
    let mut terminal = Terminal::new(backend)?;

    // Main event loop
    loop {
        terminal.draw(|f| tui_render::render(f, &state))?;

        let evt = event::read()?;
        if let Some(msg) = tui_events::handle_event(&mut state, evt) {
            match msg {
                tui_events::UiMsg::Quit => {
                    restore(&mut terminal)?;
                    return Ok(());
                }
                tui_events::UiMsg::Run => {
                    // Empty text: silent no-op, matching the form's
                    // submit rule.
                    let Some(built) = request::build_request(&state.request_input()) else {
                        continue;
                    };
                    if built.tokens_synthesized {
                        // Echo the synthesized list into the token
                        // field so the user sees what is being sent.
                        state.tokens_input = serde_json::to_string(&built.payload.tokens)?;
                    }
                    state.pending = true;
                    state.scroll_offset = 0;
                    terminal.draw(|f| tui_render::render(f, &state))?;
                    // Sole suspension point: one blocking call, no
                    // timeout, no retry.
                    state.outcome = Some(client.predict(&built.payload));
                    state.pending = false;
                }
            }
        }
    }
}

fn restore(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
