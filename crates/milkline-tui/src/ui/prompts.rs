//! Quick-prompt row — numbered canned questions that pre-fill the input.

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use milkline_core::script;

use crate::app::App;

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let dimmed = app.awaiting_reply();

    let mut spans = vec![Span::styled(
        " quick prompts (unfocus input, press 1-4): ",
        Style::default().fg(Color::DarkGray),
    )];

    for (i, (label, _)) in script::QUICK_PROMPTS.iter().enumerate() {
        let style = if dimmed {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Cyan)
        };
        spans.push(Span::styled(format!("[{} {}] ", i + 1, label), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
