//! Publish-conflict confirmation dialog

use super::base::centered_rect;
use crate::state::PublishConflictPrompt;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the publish-conflict prompt: Cancel aborts the submission,
/// Save force-proceeds despite the conflict.
pub fn render_conflict_dialog(frame: &mut Frame, prompt: &PublishConflictPrompt) {
    let dialog_area = centered_rect(frame.area(), 54, 12);

    // Clear the area behind the dialog
    frame.render_widget(Clear, dialog_area);

    let mut content = vec![
        Line::from(Span::styled(
            "Publish Conflict",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(prompt.message.as_str()),
        Line::from(""),
    ];

    let options = [false, true]; // Cancel, Save
    let labels = ["Cancel", "Save"];
    let colors = [Color::White, Color::Yellow];

    for (i, (&is_save, &label)) in options.iter().zip(labels.iter()).enumerate() {
        let is_selected = prompt.save_selected == is_save;
        let prefix = if is_selected { "▸ " } else { "  " };
        let style = if is_selected {
            Style::default().fg(colors[i]).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        content.push(Line::from(Span::styled(format!("{prefix}{label}"), style)));
    }

    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::styled("↑↓", Style::default().fg(Color::Cyan)),
        Span::styled(" select  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::styled(" confirm  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::styled(" cancel", Style::default().fg(Color::DarkGray)),
    ]));

    let dialog = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::new().bg(Color::Black).fg(Color::White));

    frame.render_widget(dialog, dialog_area);
}
