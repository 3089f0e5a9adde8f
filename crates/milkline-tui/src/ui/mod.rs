//! TUI layout compositing — assembles all UI panels.

mod chat;
mod input;
mod prompts;
mod sidebar;
mod status;

use ratatui::prelude::*;

use crate::app::App;

/// Render the full TUI layout.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // ┌────────────┬─────────────────────┐
    // │  Sidebar   │     Chat feed       │
    // │ (pitch     │                     │
    // │  notes)    │                     │
    // ├────────────┴─────────────────────┤
    // │ Quick prompts                    │
    // ├──────────────────────────────────┤
    // │ Status bar                       │
    // ├──────────────────────────────────┤
    // │ Input                            │
    // └──────────────────────────────────┘

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // content
            Constraint::Length(1), // quick prompts
            Constraint::Length(1), // status
            Constraint::Length(3), // input
        ])
        .split(area);

    // Content: Sidebar | Chat
    let content_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(36), // sidebar
            Constraint::Min(30),    // chat
        ])
        .split(main_layout[0]);

    sidebar::draw(frame, app, content_layout[0]);
    chat::draw(frame, app, content_layout[1]);
    prompts::draw(frame, app, main_layout[1]);
    status::draw(frame, app, main_layout[2]);
    input::draw(frame, app, main_layout[3]);
}
