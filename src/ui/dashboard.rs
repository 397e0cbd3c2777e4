//! Dashboard: the signed-in user's saved forms

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Draw the forms list
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let forms = &app.state.forms;
    let block = Block::default()
        .title(format!(" My Forms ({}) ", forms.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if forms.is_empty() {
        let message = if app.state.forms_loaded {
            "No forms yet.\nPress 'n' to build your first form."
        } else {
            "Loading forms...\nPress 'r' to retry."
        };
        let content = Paragraph::new(message)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(content, area);
        return;
    }

    let items: Vec<ListItem> = forms
        .iter()
        .map(|form| {
            let created = form.created_date().unwrap_or_else(|| "----------".to_string());
            let fields = match form.fields.len() {
                1 => "1 field".to_string(),
                n => format!("{n} fields"),
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{created}  "), Style::default().fg(Color::DarkGray)),
                Span::styled(
                    form.display_name().to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  {fields}"), Style::default().fg(Color::Gray)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▸ ");

    let mut state = ListState::default().with_selected(Some(app.state.selected_index));
    frame.render_stateful_widget(list, area, &mut state);
}
