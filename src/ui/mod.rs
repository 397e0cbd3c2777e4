//! UI module for rendering the TUI

mod auth;
mod components;
mod dashboard;
mod forms;
mod layout;

use crate::app::App;
use crate::state::View;
use components::render_error_dialog;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    match app.state.current_view {
        View::Login => auth::draw_login(frame, main_area, app),
        View::Register => auth::draw_register(frame, main_area, app),
        View::Dashboard => dashboard::draw(frame, main_area, app),
        View::Editor => forms::draw_editor(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Errors overlay everything until dismissed
    if let Some(message) = app.state.current_error() {
        render_error_dialog(frame, message);
    }
}
