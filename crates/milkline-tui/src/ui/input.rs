//! Text input bar — locked while a reply is pending.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::App;

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let title = if app.awaiting_reply() {
        " Ananya is replying… "
    } else {
        " Ask Ananya about the milk, delivery, pricing… (Enter to send, Tab to switch focus) "
    };
    let border_color = if app.input_focused && !app.awaiting_reply() {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let input = Paragraph::new(app.input.as_str()).style(Style::default().fg(Color::White));
    frame.render_widget(input, inner);

    // Show cursor
    if app.input_focused && !app.awaiting_reply() {
        frame.set_cursor_position(Position::new(
            inner.x + app.input.chars().count() as u16,
            inner.y,
        ));
    }
}
