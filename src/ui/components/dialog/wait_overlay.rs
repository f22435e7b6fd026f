//! Blocking wait overlay shown during in-flight network operations

use super::base::{render_dialog, DialogConfig};
use ratatui::{style::Color, Frame};

pub fn render_wait_overlay(frame: &mut Frame, message: &str) {
    render_dialog(
        frame,
        DialogConfig {
            title: "Please wait",
            color: Color::Cyan,
            message,
            hint: None,
            max_width: 50,
        },
    );
}
