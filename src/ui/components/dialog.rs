//! Modal dialog overlay

use crate::ui::layout::centered;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const MAX_WIDTH: u16 = 60;
/// Border plus one column of padding on each side
const CHROME: u16 = 4;

/// Render an error dialog centered on the screen
pub fn render_error_dialog(frame: &mut Frame, message: &str) {
    let key = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = Line::from(vec![
        Span::raw("Press "),
        Span::styled("Enter", key),
        Span::raw(" or "),
        Span::styled("Esc", key),
        Span::raw(" to dismiss"),
    ]);

    let wrapped = wrap_text(message, (MAX_WIDTH - CHROME) as usize);
    let text_width = wrapped
        .iter()
        .map(|l| l.chars().count())
        .chain(std::iter::once(hint.width()))
        .max()
        .unwrap_or(0) as u16;
    // Borders, blank line after the title and before the hint
    let height = wrapped.len() as u16 + 6;
    let area = centered(frame.area(), (text_width + CHROME).min(MAX_WIDTH), height);

    let mut lines = vec![Line::from("")];
    lines.extend(wrapped.into_iter().map(Line::from));
    lines.push(Line::from(""));
    lines.push(hint);

    let dialog = Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(
                " Error ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(dialog, area);
}

/// Greedy word wrap that keeps explicit line breaks
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let needed = line.chars().count() + word.chars().count() + usize::from(!line.is_empty());
            if needed > max_width && !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }
        lines.push(line);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
