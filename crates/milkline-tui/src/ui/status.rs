//! Status bar — host state and agent turn count.

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use milkline_core::types::HostState;

use crate::app::App;

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let (state_str, state_color) = match app.state {
        HostState::Idle => ("idle", Color::DarkGray),
        HostState::AwaitingReply => ("replying", Color::Yellow),
    };

    let spans = vec![
        Span::styled(
            format!(" {} ", state_str),
            Style::default().fg(Color::Black).bg(state_color),
        ),
        Span::raw(format!(" agent turns: {} ", app.agent_turns)),
        Span::styled(
            " Ctrl-Q quit ",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let status = Paragraph::new(Line::from(spans));
    frame.render_widget(status, area);
}
