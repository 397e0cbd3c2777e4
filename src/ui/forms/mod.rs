//! Form editor page and field rendering

mod field_renderer;

pub use field_renderer::draw_input;

use crate::app::App;
use crate::state::{EditorCursor, EditorFocus, FormEditor, PALETTE};
use field_renderer::{card_height, draw_field_card, draw_text_box, selected_row};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Draw the form editor: field palette on the left, the form on the right
pub fn draw_editor(frame: &mut Frame, area: Rect, app: &App) {
    let Some(editor) = app.state.editor.as_ref() else {
        return;
    };
    let cursor = &app.state.editor_cursor;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(22), // Palette
            Constraint::Min(40),    // Form
        ])
        .split(area);

    draw_palette(frame, chunks[0], cursor);
    draw_form(frame, chunks[1], editor, cursor);
}

fn draw_palette(frame: &mut Frame, area: Rect, cursor: &EditorCursor) {
    let is_focused = cursor.focus == EditorFocus::Palette;
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let items: Vec<ListItem> = PALETTE
        .iter()
        .map(|field_type| ListItem::new(format!(" + {}", field_type.label())))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Fields ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
        .highlight_style(if is_focused {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        });

    let mut state = ListState::default().with_selected(Some(cursor.palette_index));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_form(frame: &mut Frame, area: Rect, editor: &FormEditor, cursor: &EditorCursor) {
    let title = if editor.is_edit_mode() {
        " Edit Form "
    } else {
        " New Form "
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(5), // Description
            Constraint::Min(0),    // Fields
        ])
        .split(inner);

    draw_text_box(
        frame,
        chunks[0],
        "Form Name",
        editor.name(),
        cursor.focus == EditorFocus::Name,
    );
    draw_text_box(
        frame,
        chunks[1],
        "Description",
        editor.description(),
        cursor.focus == EditorFocus::Description,
    );
    draw_field_cards(frame, chunks[2], editor, cursor);
}

/// Stack field cards, scrolled by row so the cursor stays visible
fn draw_field_cards(frame: &mut Frame, area: Rect, editor: &FormEditor, cursor: &EditorCursor) {
    if editor.field_count() == 0 {
        let message = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No fields yet. Pick a type from the palette and press Enter.",
                Style::default().fg(Color::DarkGray),
            )),
        ]);
        frame.render_widget(message, area);
        return;
    }

    let heights: Vec<u16> = (0..editor.field_count())
        .map(|i| card_height(editor, i, cursor))
        .collect();
    let selected = cursor.field_index.min(heights.len() - 1);
    let card_top: u16 = heights[..selected].iter().sum();
    let offset = scroll_offset(
        card_top,
        heights[selected],
        card_top + selected_row(editor, cursor),
        area.height,
    );

    let mut top = 0u16;
    for (index, height) in heights.into_iter().enumerate() {
        let card_top = top;
        top += height;
        if top <= offset {
            continue;
        }
        if card_top >= offset + area.height {
            break;
        }
        let skip = offset.saturating_sub(card_top);
        let y = card_top + skip - offset;
        let card = Rect {
            x: area.x,
            y: area.y + y,
            width: area.width,
            height: (height - skip).min(area.height - y),
        };
        draw_field_card(frame, card, editor, index, cursor, skip);
    }
}

/// First row of the field list to show.
///
/// The selected card is shown whole, bottom-aligned, when it fits in
/// `available` rows. A taller card is shown from its top until the
/// selected row would fall off the bottom, then scrolls with it.
fn scroll_offset(card_top: u16, card_height: u16, selected_row: u16, available: u16) -> u16 {
    if card_height <= available {
        (card_top + card_height).saturating_sub(available)
    } else if selected_row < card_top + available {
        card_top
    } else {
        selected_row + 1 - available
    }
}
