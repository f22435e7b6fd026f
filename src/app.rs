//! Application core: key handling, field togglers, lookup and submit flows

use crate::backend::{BackendApi, UpdateError};
use crate::state::forms::lookup;
use crate::state::{names, AppState, PendingOp, PublishConflictPrompt, WizardStep};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Backend client, injected so tests can substitute a mock
    backend: Box<dyn BackendApi>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    pub fn new(backend: Box<dyn BackendApi>) -> Self {
        Self {
            state: AppState::default(),
            backend,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Take the queued operation, if any, for the event loop to run
    pub fn take_pending_op(&mut self) -> Option<PendingOp> {
        self.state.pending_op.take()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Publish-conflict prompt (modal)
        if self.state.publish_conflict.is_some() {
            self.handle_conflict_prompt_key(key);
            return Ok(());
        }

        // An operation is queued; ignore input until the event loop drains it
        if self.state.wait_message.is_some() {
            return Ok(());
        }

        self.state.status_message = None;

        match self.state.step {
            WizardStep::Done => self.handle_done_key(key),
            step => self.handle_step_key(step, key),
        }
        Ok(())
    }

    /// Buttons row for a step
    fn step_buttons(step: WizardStep) -> &'static [&'static str] {
        match step {
            WizardStep::Properties => &["Next"],
            WizardStep::Staging | WizardStep::Production => &["Back", "Next"],
            WizardStep::Review => &["Back", "Create"],
            WizardStep::Done => &[],
        }
    }

    pub fn buttons(&self) -> &'static [&'static str] {
        Self::step_buttons(self.state.step)
    }

    fn handle_step_key(&mut self, step: WizardStep, key: KeyEvent) {
        let focusable = self.state.form.focusable_fields(step);
        let on_buttons = self.state.active_field >= focusable.len();

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.focus_next(step),
            KeyCode::BackTab | KeyCode::Up => self.focus_prev(step),
            KeyCode::Enter if on_buttons => self.activate_button(step),
            KeyCode::Enter => self.focus_next(step),
            KeyCode::Left if on_buttons => {
                if self.state.selected_button > 0 {
                    self.state.selected_button -= 1;
                }
            }
            KeyCode::Right if on_buttons => {
                if self.state.selected_button + 1 < Self::step_buttons(step).len() {
                    self.state.selected_button += 1;
                }
            }
            KeyCode::Esc if step == WizardStep::Properties => self.quit = true,
            KeyCode::Esc => self.enter_step(step.back()),
            KeyCode::Char(' ') if !on_buttons => self.space_pressed(&focusable),
            KeyCode::Char(c) if !on_buttons => {
                if let Some(name) = focusable.get(self.state.active_field) {
                    if let Some(field) = self.state.form.field_mut(name) {
                        field.push_char(c);
                    }
                }
            }
            KeyCode::Backspace if !on_buttons => {
                if let Some(name) = focusable.get(self.state.active_field) {
                    if let Some(field) = self.state.form.field_mut(name) {
                        field.pop_char();
                    }
                }
            }
            _ => {}
        }
    }

    /// Space toggles switches; for text fields it is ordinary input
    fn space_pressed(&mut self, focusable: &[String]) {
        let Some(name) = focusable.get(self.state.active_field).cloned() else {
            return;
        };
        let is_switch = self.state.form.field(&name).is_some_and(|f| f.is_switch());
        if let Some(field) = self.state.form.field_mut(&name) {
            if is_switch {
                field.toggle();
            } else {
                field.push_char(' ');
            }
        }
        if is_switch && name == names::POLLING_IMPORTER {
            self.state.form.apply_scheduler_visibility();
        }
    }

    fn handle_done_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q')) {
            self.quit = true;
        }
    }

    fn handle_conflict_prompt_key(&mut self, key: KeyEvent) {
        let Some(prompt) = self.state.publish_conflict.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Up | KeyCode::Down => prompt.save_selected = !prompt.save_selected,
            // Cancel: the submission is aborted
            KeyCode::Esc => self.state.publish_conflict = None,
            KeyCode::Enter => {
                let save = prompt.save_selected;
                self.state.publish_conflict = None;
                if save {
                    // Save: force-proceed despite the publish conflict
                    self.queue_create();
                }
            }
            _ => {}
        }
    }

    fn activate_button(&mut self, step: WizardStep) {
        let label = Self::step_buttons(step)
            .get(self.state.selected_button)
            .copied()
            .unwrap_or("");
        match label {
            "Back" => self.enter_step(step.back()),
            "Next" => self.enter_step(step.next()),
            "Create" => self.start_submit(),
            _ => {}
        }
    }

    fn enter_step(&mut self, step: WizardStep) {
        self.state.step = step;
        self.state.active_field = 0;
        self.state.selected_button = Self::step_buttons(step).len().saturating_sub(1);
        self.after_focus_change(step);
    }

    fn focus_next(&mut self, step: WizardStep) {
        self.blur_active(step);
        let total = self.state.form.focusable_fields(step).len() + 1;
        self.state.active_field = (self.state.active_field.min(total - 1) + 1) % total;
        self.after_focus_change(step);
    }

    fn focus_prev(&mut self, step: WizardStep) {
        self.blur_active(step);
        let total = self.state.form.focusable_fields(step).len() + 1;
        let current = self.state.active_field.min(total - 1);
        self.state.active_field = if current == 0 { total - 1 } else { current - 1 };
        self.after_focus_change(step);
    }

    fn blur_active(&mut self, step: WizardStep) {
        let focusable = self.state.form.focusable_fields(step);
        if let Some(name) = focusable.get(self.state.active_field).cloned() {
            self.on_field_blur(&name);
        }
    }

    fn after_focus_change(&mut self, step: WizardStep) {
        let focusable = self.state.form.focusable_fields(step);
        if focusable.get(self.state.active_field).map(String::as_str) == Some(names::PROPERTY) {
            self.state.property_on_focus = self.state.form.value(names::PROPERTY).to_string();
        }
    }

    /// Change hooks that fire when focus leaves a field
    fn on_field_blur(&mut self, name: &str) {
        if name == names::IMS_CONFIG_ID {
            lookup::rewrite_lookup_sources(&mut self.state.form);
        } else if name == names::COMPANY {
            let company = self.state.form.value(names::COMPANY).to_string();
            self.state.form.set_value(names::COMPANY_LABEL, &company);
            lookup::rewrite_lookup_sources(&mut self.state.form);
        } else if name == names::PROPERTY {
            let property = self.state.form.value(names::PROPERTY).to_string();
            self.state.form.set_value(names::PROPERTY_LABEL, &property);
            if property != self.state.property_on_focus {
                self.queue_environment_lookup();
            }
        }
    }

    /// Queue the environment-data lookup for the current identifier pair.
    /// Without both identifiers no request is issued and no field changes.
    fn queue_environment_lookup(&mut self) {
        let ims_configuration_id = self.state.form.value(names::IMS_CONFIG_ID).trim().to_string();
        let property_id = self.state.form.value(names::PROPERTY).trim().to_string();
        if ims_configuration_id.is_empty() || property_id.is_empty() {
            return;
        }
        self.state.set_wait("Loading environment data…");
        self.state.pending_op = Some(PendingOp::FetchEnvironments {
            ims_configuration_id,
            property_id,
        });
    }

    /// Pre-submit stage: the archive mirrors decide whether the extra
    /// environment-update round-trip is needed before creation
    fn start_submit(&mut self) {
        if self.state.form.archive_update_needed() {
            let payload = self.state.form.submit_payload();
            self.state.set_wait("Saving archive settings…");
            self.state.pending_op = Some(PendingOp::UpdateEnvironments(payload));
        } else {
            self.queue_create();
        }
    }

    fn queue_create(&mut self) {
        self.state.set_wait("Creating configuration…");
        self.state.pending_op = Some(PendingOp::CreateConfiguration);
    }

    /// Run a queued operation to completion. The wait overlay is cleared
    /// exactly once, before any dialog is raised.
    pub async fn run_pending(&mut self, op: PendingOp) {
        match op {
            PendingOp::FetchEnvironments {
                ims_configuration_id,
                property_id,
            } => {
                let result = self
                    .backend
                    .fetch_environments(&ims_configuration_id, &property_id)
                    .await;
                self.state.clear_wait();
                match result {
                    Ok(entries) => {
                        tracing::debug!(count = entries.len(), "environment data received");
                        for entry in &entries {
                            self.state.form.apply_environment_entry(entry);
                        }
                        self.state.status_message =
                            Some(format!("Loaded {} environment(s)", entries.len()));
                    }
                    Err(err) => {
                        tracing::warn!("environment lookup failed: {err:#}");
                        self.push_error("Failed to load environment data");
                    }
                }
            }
            PendingOp::UpdateEnvironments(payload) => {
                let result = self.backend.update_environments(&payload).await;
                self.state.clear_wait();
                match result {
                    Ok(()) => self.queue_create(),
                    Err(UpdateError::UpdateRejected) => {
                        self.push_error(UpdateError::UpdateRejected.to_string());
                    }
                    Err(UpdateError::PublishConflict) => {
                        self.state.publish_conflict = Some(PublishConflictPrompt::new());
                    }
                    Err(UpdateError::Rejected(title)) => self.push_error(title),
                    Err(UpdateError::Transport(err)) => {
                        tracing::warn!("environment update failed: {err}");
                        self.push_error("An unknown error occurred");
                    }
                }
            }
            PendingOp::CreateConfiguration => {
                let fields = self.state.form.create_payload();
                let result = self.backend.create_configuration(&fields).await;
                self.state.clear_wait();
                match result {
                    Ok(()) => self.state.step = WizardStep::Done,
                    Err(err) => {
                        tracing::warn!("configuration creation failed: {err:#}");
                        self.push_error("Failed to create configuration");
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockBackendApi;
    use crate::state::{Environment, EnvironmentEntry};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with(api: MockBackendApi) -> App {
        App::new(Box::new(api))
    }

    fn staging_entry(id: &str) -> EnvironmentEntry {
        EnvironmentEntry {
            environment: "staging".to_string(),
            id: id.to_string(),
            download_link: None,
            archive_encrypted: None,
            library_uri: None,
            domain_hint: None,
        }
    }

    mod submit {
        use super::*;

        #[tokio::test]
        async fn without_archives_skips_update_roundtrip() {
            let mut api = MockBackendApi::new();
            api.expect_create_configuration()
                .times(1)
                .returning(|_| Ok(()));
            let mut app = app_with(api);
            app.state.step = WizardStep::Review;

            app.start_submit();
            let op = app.take_pending_op().expect("create queued");
            assert!(matches!(op, PendingOp::CreateConfiguration));
            assert!(app.state.wait_message.is_some());

            app.run_pending(op).await;
            assert!(app.state.wait_message.is_none());
            assert_eq!(app.state.step, WizardStep::Done);
        }

        #[tokio::test]
        async fn with_archive_posts_update_then_creates() {
            let mut api = MockBackendApi::new();
            api.expect_update_environments()
                .withf(|p| p.staging_archive == "true" && p.ims_configuration == "ims-1")
                .times(1)
                .returning(|_| Ok(()));
            api.expect_create_configuration()
                .times(1)
                .returning(|_| Ok(()));
            let mut app = app_with(api);
            app.state.step = WizardStep::Review;
            app.state.form.set_value(names::IMS_CONFIG_ID, "ims-1");
            app.state.form.set_value(
                &names::for_env(Environment::Staging, names::env::IS_ARCHIVE),
                "true",
            );

            app.start_submit();
            let op = app.take_pending_op().expect("update queued");
            assert!(matches!(op, PendingOp::UpdateEnvironments(_)));
            app.run_pending(op).await;
            assert!(app.state.wait_message.is_some(), "create is queued next");

            let op = app.take_pending_op().expect("create queued");
            app.run_pending(op).await;
            assert!(app.state.wait_message.is_none());
            assert_eq!(app.state.step, WizardStep::Done);
        }

        #[tokio::test]
        async fn update_rejected_shows_error_and_aborts() {
            let mut api = MockBackendApi::new();
            api.expect_update_environments()
                .times(1)
                .returning(|_| Err(UpdateError::UpdateRejected));
            let mut app = app_with(api);
            app.state.step = WizardStep::Review;
            app.state.form.set_value(
                &names::for_env(Environment::Production, names::env::IS_ARCHIVE),
                "true",
            );

            app.start_submit();
            let op = app.take_pending_op().unwrap();
            app.run_pending(op).await;

            assert!(app.state.wait_message.is_none());
            assert_eq!(
                app.state.current_error(),
                Some("Unable to update environments")
            );
            assert!(app.state.pending_op.is_none());
            assert_eq!(app.state.step, WizardStep::Review);
        }

        #[tokio::test]
        async fn publish_conflict_save_force_proceeds() {
            let mut api = MockBackendApi::new();
            api.expect_update_environments()
                .times(1)
                .returning(|_| Err(UpdateError::PublishConflict));
            api.expect_create_configuration()
                .times(1)
                .returning(|_| Ok(()));
            let mut app = app_with(api);
            app.state.step = WizardStep::Review;
            app.state.form.set_value(
                &names::for_env(Environment::Staging, names::env::IS_ARCHIVE),
                "true",
            );

            app.start_submit();
            let op = app.take_pending_op().unwrap();
            app.run_pending(op).await;

            assert!(app.state.wait_message.is_none());
            let prompt = app.state.publish_conflict.as_ref().expect("prompt shown");
            assert!(!prompt.save_selected, "Cancel is the default");

            app.handle_key(key(KeyCode::Down)).unwrap();
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert!(app.state.publish_conflict.is_none());

            let op = app.take_pending_op().expect("create queued after Save");
            app.run_pending(op).await;
            assert_eq!(app.state.step, WizardStep::Done);
        }

        #[tokio::test]
        async fn publish_conflict_cancel_aborts() {
            let mut api = MockBackendApi::new();
            api.expect_update_environments()
                .times(1)
                .returning(|_| Err(UpdateError::PublishConflict));
            let mut app = app_with(api);
            app.state.step = WizardStep::Review;
            app.state.form.set_value(
                &names::for_env(Environment::Staging, names::env::IS_ARCHIVE),
                "true",
            );

            app.start_submit();
            let op = app.take_pending_op().unwrap();
            app.run_pending(op).await;

            app.handle_key(key(KeyCode::Esc)).unwrap();
            assert!(app.state.publish_conflict.is_none());
            assert!(app.state.pending_op.is_none());
            assert_eq!(app.state.step, WizardStep::Review);
        }

        #[tokio::test]
        async fn unrecognized_title_rejects_with_alert() {
            let mut api = MockBackendApi::new();
            api.expect_update_environments()
                .times(1)
                .returning(|_| Err(UpdateError::Rejected("Invalid property".to_string())));
            let mut app = app_with(api);
            app.state.step = WizardStep::Review;
            app.state.form.set_value(
                &names::for_env(Environment::Staging, names::env::IS_ARCHIVE),
                "true",
            );

            app.start_submit();
            let op = app.take_pending_op().unwrap();
            app.run_pending(op).await;

            assert_eq!(app.state.current_error(), Some("Invalid property"));
            assert!(app.state.pending_op.is_none());
        }

        #[tokio::test]
        async fn transport_error_shows_generic_alert() {
            let mut api = MockBackendApi::new();
            api.expect_update_environments()
                .times(1)
                .returning(|_| Err(UpdateError::Transport("connection refused".to_string())));
            let mut app = app_with(api);
            app.state.step = WizardStep::Review;
            app.state.form.set_value(
                &names::for_env(Environment::Staging, names::env::IS_ARCHIVE),
                "true",
            );

            app.start_submit();
            let op = app.take_pending_op().unwrap();
            app.run_pending(op).await;

            assert!(app.state.wait_message.is_none());
            assert_eq!(app.state.current_error(), Some("An unknown error occurred"));
        }

        #[tokio::test]
        async fn create_failure_keeps_form_for_resubmission() {
            let mut api = MockBackendApi::new();
            api.expect_create_configuration()
                .times(1)
                .returning(|_| Err(anyhow::anyhow!("500 Internal Server Error")));
            let mut app = app_with(api);
            app.state.step = WizardStep::Review;
            app.state.form.set_value(names::TITLE, "My config");

            app.start_submit();
            let op = app.take_pending_op().unwrap();
            app.run_pending(op).await;

            assert_eq!(app.state.step, WizardStep::Review);
            assert_eq!(app.state.form.value(names::TITLE), "My config");
            assert_eq!(
                app.state.current_error(),
                Some("Failed to create configuration")
            );
        }
    }

    mod lookup_flow {
        use super::*;

        #[test]
        fn missing_identifier_issues_no_request() {
            let mut app = app_with(MockBackendApi::new());
            app.state.form.set_value(names::IMS_CONFIG_ID, "ims-1");
            app.queue_environment_lookup();
            assert!(app.state.pending_op.is_none());
            assert!(app.state.wait_message.is_none());

            app.state.form.set_value(names::PROPERTY, "prop-1");
            app.queue_environment_lookup();
            assert!(matches!(
                app.state.pending_op,
                Some(PendingOp::FetchEnvironments { .. })
            ));
            assert!(app.state.wait_message.is_some());
        }

        #[tokio::test]
        async fn lookup_populates_environment_sections() {
            let mut api = MockBackendApi::new();
            api.expect_fetch_environments()
                .withf(|ims, prop| ims == "ims-1" && prop == "prop-1")
                .times(1)
                .returning(|_, _| {
                    let mut entry = staging_entry("s1");
                    entry.archive_encrypted = Some(true);
                    Ok(vec![entry])
                });
            let mut app = app_with(api);
            app.state.form.set_value(names::IMS_CONFIG_ID, "ims-1");
            app.state.form.set_value(names::PROPERTY, "prop-1");

            app.queue_environment_lookup();
            let op = app.take_pending_op().unwrap();
            app.run_pending(op).await;

            assert!(app.state.wait_message.is_none());
            assert_eq!(
                app.state.form.value(&names::for_env(
                    Environment::Staging,
                    names::env::ENVIRONMENT_ID
                )),
                "s1"
            );
        }

        #[tokio::test]
        async fn lookup_failure_shows_generic_alert() {
            let mut api = MockBackendApi::new();
            api.expect_fetch_environments()
                .times(1)
                .returning(|_, _| Err(anyhow::anyhow!("connection reset")));
            let mut app = app_with(api);
            app.state.form.set_value(names::IMS_CONFIG_ID, "ims-1");
            app.state.form.set_value(names::PROPERTY, "prop-1");

            app.queue_environment_lookup();
            let op = app.take_pending_op().unwrap();
            app.run_pending(op).await;

            assert!(app.state.wait_message.is_none());
            assert_eq!(
                app.state.current_error(),
                Some("Failed to load environment data")
            );
        }

        #[test]
        fn property_blur_syncs_label_and_triggers_lookup() {
            let mut app = app_with(MockBackendApi::new());
            app.state.form.set_value(names::IMS_CONFIG_ID, "ims-1");
            app.state.form.set_value(names::PROPERTY, "prop-1");
            app.state.property_on_focus = String::new();

            app.on_field_blur(names::PROPERTY);
            assert_eq!(app.state.form.value(names::PROPERTY_LABEL), "prop-1");
            assert!(app.state.pending_op.is_some());
        }

        #[test]
        fn property_blur_without_change_is_a_noop() {
            let mut app = app_with(MockBackendApi::new());
            app.state.form.set_value(names::IMS_CONFIG_ID, "ims-1");
            app.state.form.set_value(names::PROPERTY, "prop-1");
            app.state.property_on_focus = "prop-1".to_string();

            app.on_field_blur(names::PROPERTY);
            assert!(app.state.pending_op.is_none());
        }

        #[test]
        fn identifier_blur_rewrites_lookup_sources() {
            let mut app = app_with(MockBackendApi::new());
            app.state.form.set_value(names::COMPANY, "co-1");
            app.on_field_blur(names::COMPANY);

            assert_eq!(app.state.form.value(names::COMPANY_LABEL), "co-1");
            let src = app
                .state
                .form
                .field(names::PROPERTY)
                .unwrap()
                .lookup_src
                .clone()
                .unwrap();
            assert!(src.contains("companyId=co-1"));
        }
    }

    mod navigation {
        use super::*;

        #[test]
        fn error_dialog_blocks_input_until_dismissed() {
            let mut app = app_with(MockBackendApi::new());
            app.push_error("boom");

            app.handle_key(key(KeyCode::Char('x'))).unwrap();
            assert_eq!(app.state.form.value(names::TITLE), "");
            assert!(app.state.has_errors());

            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert!(!app.state.has_errors());
        }

        #[test]
        fn typing_edits_the_active_field() {
            let mut app = app_with(MockBackendApi::new());
            app.handle_key(key(KeyCode::Char('h'))).unwrap();
            app.handle_key(key(KeyCode::Char('i'))).unwrap();
            assert_eq!(app.state.form.value(names::TITLE), "hi");
            app.handle_key(key(KeyCode::Backspace)).unwrap();
            assert_eq!(app.state.form.value(names::TITLE), "h");
        }

        #[test]
        fn space_toggles_polling_switch_and_reveals_scheduler() {
            let mut app = app_with(MockBackendApi::new());
            // move focus to the polling switch (index 4 on the properties step)
            for _ in 0..4 {
                app.handle_key(key(KeyCode::Tab)).unwrap();
            }
            app.handle_key(key(KeyCode::Char(' '))).unwrap();

            assert!(app.state.form.field(names::POLLING_IMPORTER).unwrap().is_on());
            assert!(
                app.state
                    .form
                    .field(names::SCHEDULER_EXPRESSION)
                    .unwrap()
                    .visible
            );
        }

        #[test]
        fn tab_wraps_through_fields_and_buttons_row() {
            let mut app = app_with(MockBackendApi::new());
            let focusable = app.state.form.focusable_fields(WizardStep::Properties).len();
            for _ in 0..focusable {
                app.handle_key(key(KeyCode::Tab)).unwrap();
            }
            assert_eq!(app.state.active_field, focusable, "on buttons row");
            app.handle_key(key(KeyCode::Tab)).unwrap();
            assert_eq!(app.state.active_field, 0, "wrapped to first field");
        }

        #[test]
        fn buttons_navigate_between_steps() {
            let mut app = app_with(MockBackendApi::new());
            let focusable = app.state.form.focusable_fields(WizardStep::Properties).len();
            app.state.active_field = focusable;
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert_eq!(app.state.step, WizardStep::Staging);

            // staging has no focusable fields until an archive is loaded
            app.handle_key(key(KeyCode::Left)).unwrap();
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert_eq!(app.state.step, WizardStep::Properties);
        }

        #[test]
        fn esc_walks_back_and_quits_from_first_step() {
            let mut app = app_with(MockBackendApi::new());
            app.enter_step(WizardStep::Production);
            app.handle_key(key(KeyCode::Esc)).unwrap();
            assert_eq!(app.state.step, WizardStep::Staging);
            app.handle_key(key(KeyCode::Esc)).unwrap();
            assert_eq!(app.state.step, WizardStep::Properties);
            app.handle_key(key(KeyCode::Esc)).unwrap();
            assert!(app.should_quit());
        }

        #[test]
        fn done_screen_exits_on_enter() {
            let mut app = app_with(MockBackendApi::new());
            app.state.step = WizardStep::Done;
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert!(app.should_quit());
        }
    }
}
