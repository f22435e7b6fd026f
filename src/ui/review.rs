//! Review step: payload summary plus Back / Create buttons

use super::components::BUTTON_HEIGHT;
use super::layout::step_title;
use super::wizard::draw_buttons_row;
use crate::app::App;
use crate::state::{names, Environment, WizardStep};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(step_title(WizardStep::Review))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(BUTTON_HEIGHT)])
        .margin(1)
        .split(area);

    let form = &app.state.form;
    let value_or_dash = |name: &str| {
        let value = form.value(name);
        if value.is_empty() {
            "-".to_string()
        } else {
            value.to_string()
        }
    };

    let row = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{label:<20}"), Style::default().fg(Color::DarkGray)),
            Span::raw(value),
        ])
    };

    let mut lines = vec![
        row("Title", value_or_dash(names::TITLE)),
        row("IMS configuration", value_or_dash(names::IMS_CONFIG_ID)),
        row("Company", value_or_dash(names::COMPANY)),
        row("Property", value_or_dash(names::PROPERTY)),
        row(
            "Polling importer",
            form.value(names::POLLING_IMPORTER).to_string(),
        ),
    ];
    if form.value(names::POLLING_IMPORTER) == "true" {
        lines.push(row(
            "Scheduler",
            value_or_dash(names::SCHEDULER_EXPRESSION),
        ));
    }

    for environment in [
        Environment::Development,
        Environment::Staging,
        Environment::Production,
    ] {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            environment.label(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        let name = |leaf| names::for_env(environment, leaf);
        lines.push(row(
            "Environment id",
            value_or_dash(&name(names::env::ENVIRONMENT_ID)),
        ));
        if environment == Environment::Development {
            continue;
        }
        let archived = form.value(&name(names::env::IS_ARCHIVE)) == "true";
        lines.push(row("Archive", if archived { "yes" } else { "no" }.to_string()));
        if archived {
            lines.push(row(
                "Domain hint",
                value_or_dash(&name(names::env::DOMAIN_HINT)),
            ));
        } else {
            lines.push(row(
                "Library URI",
                value_or_dash(&name(names::env::LIBRARY_URI)),
            ));
        }
    }

    frame.render_widget(Paragraph::new(lines), chunks[0]);

    let focusable = app.state.form.focusable_fields(WizardStep::Review);
    let on_buttons = app.state.active_field >= focusable.len();
    draw_buttons_row(frame, chunks[1], app, on_buttons);
}
