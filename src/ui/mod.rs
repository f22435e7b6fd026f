//! UI module for rendering the wizard

pub mod components;
mod done;
mod forms;
mod layout;
mod review;
mod wizard;

use crate::app::App;
use crate::state::WizardStep;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let content = layout::content_area(area);

    match app.state.step {
        WizardStep::Properties | WizardStep::Staging | WizardStep::Production => {
            wizard::draw_step(frame, content, app)
        }
        WizardStep::Review => review::draw(frame, content, app),
        WizardStep::Done => done::draw(frame, content, app),
    }

    layout::draw_status_bar(frame, app);

    // Modal overlays: dialogs render above the wait indicator
    if let Some(message) = &app.state.wait_message {
        components::dialog::render_wait_overlay(frame, message);
    }
    if let Some(prompt) = &app.state.publish_conflict {
        components::dialog::render_conflict_dialog(frame, prompt);
    }
    if let Some(error) = app.state.current_error() {
        components::dialog::render_error_dialog(frame, error);
    }
}
