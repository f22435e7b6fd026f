//! Final screen after a resolved submission

use super::layout::step_title;
use crate::app::App;
use crate::state::{names, WizardStep};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let title = app.state.form.value(names::TITLE);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Configuration created",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(if title.is_empty() {
            "The configuration was created on the author instance.".to_string()
        } else {
            format!("\"{title}\" was created on the author instance.")
        }),
        Line::from(""),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled("Enter", Style::default().fg(Color::Cyan)),
            Span::raw(" to exit"),
        ]),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(step_title(WizardStep::Done))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(paragraph, area);
}
