//! Sidebar — agent card: signature opener, quick selling points, closing
//! pitch.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use milkline_core::script;

use crate::app::App;

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", script::AGENT_NAME))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let heading = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::styled("Signature opener", heading));
    if let Some(opener) = app.signature_opener() {
        lines.push(Line::raw(opener.to_string()));
    }
    lines.push(Line::raw(""));

    lines.push(Line::styled("Quick selling points", heading));
    for fact in script::QUICK_FACTS {
        lines.push(Line::styled(
            format!("- {}", fact),
            Style::default().fg(Color::White),
        ));
    }
    lines.push(Line::raw(""));

    lines.push(Line::styled("Closing pitch", heading));
    lines.push(Line::styled(
        script::CLOSING_PITCH,
        Style::default().fg(Color::Yellow),
    ));

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}
