//! Field rendering utilities for forms

use crate::state::{EditorCursor, EditorFocus, FieldPart, FieldPreview, FormEditor, InputField};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CURSOR: &str = "▌";

fn active_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Draw a boxed text input
pub fn draw_input(frame: &mut Frame, area: Rect, input: &InputField, is_active: bool) {
    draw_text_box(frame, area, &input.label, &input.display_value(), is_active);
}

/// Draw a boxed, possibly multi-line, text value with a cursor when active
pub fn draw_text_box(frame: &mut Frame, area: Rect, label: &str, value: &str, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut lines: Vec<Line> = value
        .split('\n')
        .map(|l| Line::from(Span::styled(l.to_string(), style)))
        .collect();
    if is_active {
        if let Some(last) = lines.last_mut() {
            last.spans.push(Span::styled(CURSOR, Style::default().fg(Color::Cyan)));
        }
    }

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(active_style(is_active));

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

/// Rows a field card needs, borders included
pub fn card_height(editor: &FormEditor, field_index: usize, cursor: &EditorCursor) -> u16 {
    card_lines(editor, field_index, cursor).len() as u16 + 2
}

/// Row of the cursor's part inside its card, counting the top border
pub fn selected_row(editor: &FormEditor, cursor: &EditorCursor) -> u16 {
    let Some(part) = cursor.current_part(editor) else {
        return 1;
    };
    card_lines(editor, cursor.field_index, cursor)
        .iter()
        .position(|(row_part, _)| *row_part == Some(part))
        .map(|row| row as u16 + 1)
        .unwrap_or(1)
}

/// Card body, each line tagged with the part it edits
fn card_lines<'a>(
    editor: &'a FormEditor,
    field_index: usize,
    cursor: &EditorCursor,
) -> Vec<(Option<FieldPart>, Line<'a>)> {
    let Some(field) = editor.field(field_index) else {
        return Vec::new();
    };
    let view = field.view();
    let on = |part| cursor.is_on(field_index, part, editor);

    let mut lines = vec![(
        Some(FieldPart::Label),
        text_row("Name", view.label, "Field name", on(FieldPart::Label)),
    )];

    if view.show_placeholder_input {
        lines.push((
            Some(FieldPart::Placeholder),
            text_row(
                "Placeholder",
                view.placeholder,
                "(none)",
                on(FieldPart::Placeholder),
            ),
        ));
    }

    match view.preview {
        FieldPreview::None => {}
        FieldPreview::TextArea { hint } => {
            lines.push((
                None,
                Line::from(Span::styled(
                    format!("  ┆ {hint}"),
                    Style::default().fg(Color::DarkGray),
                )),
            ));
        }
        FieldPreview::Radio { options } => {
            for (i, option) in options.into_iter().enumerate() {
                let part = FieldPart::Option(i);
                lines.push((
                    Some(part),
                    text_row("( )", option.value, &option.placeholder, on(part)),
                ));
            }
            lines.push((
                Some(FieldPart::AddOption),
                button_row("[+] Add option", on(FieldPart::AddOption)),
            ));
        }
    }

    let check = if view.required { "[x]" } else { "[ ]" };
    lines.push((
        Some(FieldPart::Required),
        button_row(&format!("{check} Required"), on(FieldPart::Required)),
    ));
    lines
}

/// Draw one field of the editor as a bordered card.
///
/// `skip` rows of the card (top border included) are scrolled off above
/// `area`; a card cut off at the bottom loses its bottom border.
pub fn draw_field_card(
    frame: &mut Frame,
    area: Rect,
    editor: &FormEditor,
    field_index: usize,
    cursor: &EditorCursor,
    skip: u16,
) {
    let Some(field) = editor.field(field_index) else {
        return;
    };
    let selected = cursor.focus == EditorFocus::Fields && cursor.field_index == field_index;
    let lines: Vec<Line> = card_lines(editor, field_index, cursor)
        .into_iter()
        .map(|(_, line)| line)
        .collect();
    let height = lines.len() as u16 + 2;

    let mut borders = Borders::LEFT | Borders::RIGHT;
    if skip == 0 {
        borders |= Borders::TOP;
    }
    if skip + area.height >= height {
        borders |= Borders::BOTTOM;
    }

    let mut block = Block::default()
        .borders(borders)
        .border_style(active_style(selected));
    if skip == 0 {
        let title = format!(" {}. {} ", field_index + 1, field.field_type.label());
        block = block.title(Span::styled(
            title,
            active_style(selected).add_modifier(Modifier::BOLD),
        ));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .scroll((skip.saturating_sub(1), 0))
            .block(block),
        area,
    );
}

/// `label: value` row, showing `empty_hint` dimmed when there is no value
fn text_row<'a>(label: &'a str, value: &'a str, empty_hint: &str, is_active: bool) -> Line<'a> {
    let marker = if is_active { "› " } else { "  " };
    let mut spans = vec![
        Span::styled(marker, Style::default().fg(Color::Cyan)),
        Span::styled(format!("{label} "), Style::default().fg(Color::Gray)),
    ];
    if value.is_empty() {
        spans.push(Span::styled(
            empty_hint.to_string(),
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::styled(value, Style::default().fg(Color::White)));
    }
    if is_active {
        spans.push(Span::styled(CURSOR, Style::default().fg(Color::Cyan)));
    }
    Line::from(spans)
}

fn button_row(text: &str, is_active: bool) -> Line<'static> {
    let style = if is_active {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    Line::from(vec![Span::raw("  "), Span::styled(text.to_string(), style)])
}
