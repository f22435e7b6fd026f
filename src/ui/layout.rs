//! Layout components (step header, status bar)

use crate::app::App;
use crate::state::WizardStep;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into content and a one-line status bar
pub fn content_area(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    chunks[0]
}

/// Title line for a step's outer block
pub fn step_title(step: WizardStep) -> String {
    match step {
        WizardStep::Done => " Create Configuration ".to_string(),
        step => format!(
            " Create Configuration - Step {} of 4: {} ",
            step.number(),
            step.title()
        ),
    }
}

/// Draw the status bar with key hints at the bottom of the screen
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    if let Some(message) = &app.state.status_message {
        let paragraph =
            Paragraph::new(message.as_str()).style(Style::default().fg(Color::Yellow));
        frame.render_widget(paragraph, status_area);
        return;
    }

    let hint = |key: &'static str, label: &'static str| {
        vec![
            Span::styled(key, Style::default().fg(Color::Cyan)),
            Span::styled(format!(" {label}  "), Style::default().fg(Color::DarkGray)),
        ]
    };

    let mut spans = Vec::new();
    match app.state.step {
        WizardStep::Done => {
            spans.extend(hint("Enter", "exit"));
        }
        WizardStep::Properties => {
            spans.extend(hint("Tab", "next field"));
            spans.extend(hint("Space", "toggle switch"));
            spans.extend(hint("Esc", "quit"));
        }
        _ => {
            spans.extend(hint("Tab", "next field"));
            spans.extend(hint("←→", "buttons"));
            spans.extend(hint("Esc", "back"));
        }
    }
    spans.extend(hint("Ctrl+C", "quit"));

    frame.render_widget(Paragraph::new(Line::from(spans)), status_area);
}
