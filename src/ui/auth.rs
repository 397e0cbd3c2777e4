//! Login and registration screens

use super::forms::draw_input;
use super::layout::centered;
use crate::app::App;
use crate::state::{Form, InputField};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const PANEL_WIDTH: u16 = 50;

pub fn draw_login(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.login_form;
    draw_panel(
        frame,
        area,
        " Log in ",
        form,
        "Enter: log in   Ctrl+R: create an account",
    );
}

pub fn draw_register(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.register_form;
    draw_panel(
        frame,
        area,
        " Create account ",
        form,
        "Enter: register   Esc: back to log in",
    );
}

/// Centered box with one input per form field and a hint line
fn draw_panel(frame: &mut Frame, area: Rect, title: &str, form: &impl Form, hint: &str) {
    let count = form.field_count();
    let height = count as u16 * 3 + 4;
    let panel = centered(area, PANEL_WIDTH, height);

    let block = Block::default()
        .title(title)
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let mut constraints = vec![Constraint::Length(3); count];
    constraints.push(Constraint::Length(1)); // Spacer
    constraints.push(Constraint::Length(1)); // Hint
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let inputs: Vec<&InputField> = (0..count).filter_map(|i| form.get_field(i)).collect();
    for (index, input) in inputs.into_iter().enumerate() {
        draw_input(frame, chunks[index], input, index == form.active_field());
    }

    let hint = Paragraph::new(Line::from(hint))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(hint, chunks[count + 1]);
}
