//! Scrollable chat feed — the conversation with the typing indicator.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use milkline_core::script;
use milkline_core::types::Sender;

use crate::app::App;

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" MilkyWay Fresh Calling Console ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.messages.is_empty() {
        let empty = Paragraph::new("Connecting the call...")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    }

    // Build display lines from messages (bottom-up with scroll offset)
    let visible_height = inner.height as usize;
    let total = app.messages.len();
    let end = total.saturating_sub(app.scroll_offset);
    let start = end.saturating_sub(visible_height); // overshoot for wrapping

    let mut lines: Vec<Line> = Vec::new();
    for msg in &app.messages[start..end] {
        let (fg, who) = match msg.sender {
            Sender::Agent => (Color::Yellow, script::AGENT_NAME),
            Sender::Customer => (Color::Green, "You"),
        };

        lines.push(Line::styled(
            format!("{} · {}", who, msg.timestamp),
            Style::default().fg(Color::DarkGray),
        ));
        for line in msg.text.lines() {
            lines.push(Line::styled(
                format!("  {}", line),
                Style::default().fg(fg),
            ));
        }
        lines.push(Line::raw(""));
    }

    if app.awaiting_reply() {
        lines.push(Line::styled(
            "Ananya is crafting the perfect response…",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ));
    }

    // Keep the tail in view when the feed outgrows the panel.
    let overflow = lines.len().saturating_sub(visible_height);

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((overflow as u16, 0));
    frame.render_widget(paragraph, inner);
}
