//! Screen layout and status bar

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the view area and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Centered rectangle of at most `width` x `height` inside `area`
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Session indicator
    match &app.state.session {
        Some(session) => {
            spans.push(Span::styled(" ● ", Style::default().fg(Color::Green)));
            spans.push(Span::styled(
                format!("{} ", session.email()),
                Style::default().fg(Color::Blue),
            ));
        }
        None => spans.push(Span::styled(" ○ ", Style::default().fg(Color::Red))),
    }

    spans.push(Span::styled(
        view_hints(app.state.current_view),
        Style::default().fg(Color::Gray),
    ));

    if app.state.pending_submissions > 0 {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("saving {}", app.state.pending_submissions),
            Style::default().fg(Color::Yellow),
        ));
    }

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        width: (quit_hint.len() as u16).min(area.width),
        ..area
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the current view
fn view_hints(view: View) -> &'static str {
    match view {
        View::Login => "Tab:next  Enter:log in  ^R:register",
        View::Register => "Tab:next  Enter:create account  Esc:back",
        View::Dashboard => "j/k:nav  n:new  e:edit  r:refresh  l:logout  q:quit",
        View::Editor => "Tab:pane  Enter:add/toggle  S-↑/↓:move  ^S:save  Esc:discard",
    }
}
