use crate::ui::tui_state::{Focus, UiState};
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

/// Messages the event handler sends back to the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMsg {
    Quit,
    Run,
}

/// Mutate state for editing events; return a message for the events
/// the loop itself must act on.
pub fn handle_event(state: &mut UiState, evt: Event) -> Option<UiMsg> {
    let Event::Key(key) = evt else { return None };
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(UiMsg::Quit),
        (KeyCode::Esc, _) => Some(UiMsg::Quit),
        (KeyCode::Char('r'), KeyModifiers::CONTROL) => run_if_idle(state),
        (KeyCode::Enter, _) => run_if_idle(state),
        (KeyCode::Tab, _) => {
            state.focus = state.focus.next();
            None
        }
        (KeyCode::BackTab, _) => {
            state.focus = state.focus.prev();
            None
        }
        (KeyCode::Up, _) => {
            state.scroll_offset = state.scroll_offset.saturating_sub(1);
            None
        }
        (KeyCode::Down, _) => {
            state.scroll_offset = state.scroll_offset.saturating_add(1);
            None
        }
        (KeyCode::Left, _) if state.focus == Focus::Format => {
            state.format = state.format.prev();
            None
        }
        (KeyCode::Right, _) if state.focus == Focus::Format => {
            state.format = state.format.next();
            None
        }
        (KeyCode::Char(' '), _) if state.focus == Focus::Multi => {
            state.multi = !state.multi;
            None
        }
        (KeyCode::Backspace, _) => {
            if let Some(buf) = state.focused_buffer_mut() {
                buf.pop();
            }
            None
        }
        (KeyCode::Char(c), m) if m.is_empty() || m == KeyModifiers::SHIFT => {
            if let Some(buf) = state.focused_buffer_mut() {
                buf.push(c);
            }
            None
        }
        _ => None,
    }
}

fn run_if_idle(state: &UiState) -> Option<UiMsg> {
    if state.pending { None } else { Some(UiMsg::Run) }
}
