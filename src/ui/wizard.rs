//! Field-step rendering (Properties, Staging, Production)

use super::components::{render_button, BUTTON_HEIGHT};
use super::forms::draw_field;
use super::layout::step_title;
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Height of one bordered field row
const FIELD_HEIGHT: u16 = 3;

pub fn draw_step(frame: &mut Frame, area: Rect, app: &App) {
    let step = app.state.step;
    let block = Block::default()
        .title(step_title(step))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let fields = app.state.form.step_fields(step);
    let focusable = app.state.form.focusable_fields(step);
    let on_buttons = app.state.active_field >= focusable.len();
    let active_name = if on_buttons {
        None
    } else {
        focusable.get(app.state.active_field).cloned()
    };

    let mut constraints: Vec<Constraint> =
        fields.iter().map(|_| Constraint::Length(FIELD_HEIGHT)).collect();
    constraints.push(Constraint::Min(0)); // spacer
    constraints.push(Constraint::Length(BUTTON_HEIGHT));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    for (i, field) in fields.iter().enumerate() {
        let is_active = active_name.as_deref() == Some(field.name.as_str());
        draw_field(frame, chunks[i], field, is_active);
    }

    draw_buttons_row(frame, chunks[chunks.len() - 1], app, on_buttons);
}

pub fn draw_buttons_row(frame: &mut Frame, area: Rect, app: &App, on_buttons: bool) {
    let buttons = app.buttons();
    let constraints: Vec<Constraint> = std::iter::once(Constraint::Min(0))
        .chain(buttons.iter().map(|b| Constraint::Length(b.len() as u16 + 4)))
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (i, label) in buttons.iter().enumerate() {
        let is_selected = on_buttons && app.state.selected_button == i;
        render_button(frame, chunks[i + 1], label, is_selected);
    }
}
