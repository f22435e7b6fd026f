//! Application state definitions

use crate::state::forms::WizardForm;
use serde::{Deserialize, Serialize};

/// Wizard steps in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    Properties,
    Staging,
    Production,
    Review,
    Done,
}

impl WizardStep {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Properties => "Properties",
            Self::Staging => "Staging",
            Self::Production => "Production",
            Self::Review => "Review",
            Self::Done => "Done",
        }
    }

    /// 1-based step number shown in the header
    pub fn number(&self) -> usize {
        match self {
            Self::Properties => 1,
            Self::Staging => 2,
            Self::Production => 3,
            Self::Review | Self::Done => 4,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Properties => Self::Staging,
            Self::Staging => Self::Production,
            Self::Production => Self::Review,
            Self::Review | Self::Done => Self::Done,
        }
    }

    pub fn back(&self) -> Self {
        match self {
            Self::Properties => Self::Properties,
            Self::Staging => Self::Properties,
            Self::Production => Self::Staging,
            Self::Review => Self::Production,
            Self::Done => Self::Done,
        }
    }
}

/// Deployment targets for a configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Staging,
    Production,
    Development,
}

impl Environment {
    /// Map the wire value of an environment entry to a typed key.
    /// Unknown values return None and the entry is ignored.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "staging" => Some(Self::Staging),
            "production" => Some(Self::Production),
            "development" => Some(Self::Development),
            _ => None,
        }
    }

    /// Field-name segment for this environment's section
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Staging => "staging",
            Self::Production => "production",
            Self::Development => "development",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Staging => "Staging",
            Self::Production => "Production",
            Self::Development => "Development",
        }
    }
}

/// One environment row returned by the environments-data lookup
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentEntry {
    pub environment: String,
    pub id: String,
    #[serde(default)]
    pub download_link: Option<String>,
    #[serde(default)]
    pub archive_encrypted: Option<bool>,
    #[serde(default)]
    pub library_uri: Option<String>,
    #[serde(default)]
    pub domain_hint: Option<String>,
}

/// Archive settings snapshot POSTed to the update endpoint before creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitPayload {
    pub ims_configuration: String,
    pub property: String,
    pub development_environment: String,
    pub staging_archive: String,
    pub staging_environment: String,
    pub staging_domain_hint: String,
    pub production_archive: String,
    pub production_environment: String,
    pub production_domain_hint: String,
}

/// Queued network operation, drained by the event loop under the wait overlay
#[derive(Debug, Clone)]
pub enum PendingOp {
    FetchEnvironments {
        ims_configuration_id: String,
        property_id: String,
    },
    UpdateEnvironments(SubmitPayload),
    CreateConfiguration,
}

/// Publish-conflict confirmation prompt state
#[derive(Debug, Clone)]
pub struct PublishConflictPrompt {
    pub message: String,
    /// true = Save (force-proceed), false = Cancel
    pub save_selected: bool,
}

impl PublishConflictPrompt {
    pub fn new() -> Self {
        Self {
            message: "Unable to publish changes. The archive settings could not be \
                      published to this property. Save the configuration anyway?"
                .to_string(),
            save_selected: false,
        }
    }
}

impl Default for PublishConflictPrompt {
    fn default() -> Self {
        Self::new()
    }
}

/// Live state of one wizard session
pub struct AppState {
    pub step: WizardStep,
    pub form: WizardForm,

    /// Index into the current step's focusable fields; == len means buttons row
    pub active_field: usize,
    pub selected_button: usize,

    /// At most one queued operation; a second cannot start before it drains
    pub pending_op: Option<PendingOp>,
    pub wait_message: Option<String>,
    pub publish_conflict: Option<PublishConflictPrompt>,
    pub error_queue: Vec<String>,
    pub status_message: Option<String>,

    /// Property value captured on focus, for change detection on blur
    pub property_on_focus: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            step: WizardStep::default(),
            form: WizardForm::new(),
            active_field: 0,
            selected_button: 0,
            pending_op: None,
            wait_message: None,
            publish_conflict: None,
            error_queue: Vec::new(),
            status_message: None,
            property_on_focus: String::new(),
        }
    }
}

impl AppState {
    /// Push an error message onto the display queue
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.first().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        if !self.error_queue.is_empty() {
            self.error_queue.remove(0);
        }
    }

    pub fn set_wait(&mut self, message: &str) {
        self.wait_message = Some(message.to_string());
    }

    pub fn clear_wait(&mut self) {
        self.wait_message = None;
    }
}
