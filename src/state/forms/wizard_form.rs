//! Wizard form aggregate and field-group togglers

use super::field::FormField;
use super::lookup;
use crate::state::{Environment, EnvironmentEntry, SubmitPayload, WizardStep};

/// Wire names for the wizard fields
pub mod names {
    pub const TITLE: &str = "./jcr:title";
    pub const IMS_CONFIG_ID: &str = "./imsConfigId";
    pub const COMPANY: &str = "./companyId";
    pub const COMPANY_LABEL: &str = "./companyLabel";
    pub const PROPERTY: &str = "./propertyId";
    pub const PROPERTY_LABEL: &str = "./propertyLabel";
    pub const POLLING_IMPORTER: &str = "./pollingImporter";
    pub const SCHEDULER_EXPRESSION: &str = "./schedulerExpression";

    /// Per-environment field name segments
    pub mod env {
        pub const ARCHIVE: &str = "archive";
        pub const IS_ARCHIVE: &str = "isArchive";
        pub const ENVIRONMENT_ID: &str = "environmentId";
        pub const ARCHIVE_ENCRYPTED: &str = "archiveEncrypted";
        pub const ARCHIVE_PASSWORD: &str = "archivePassword";
        pub const DOWNLOAD_LINK: &str = "downloadLink";
        pub const DOMAIN_HINT: &str = "domainHint";
        pub const LIBRARY_URI: &str = "libraryUri";
    }

    /// Build a per-environment field name, e.g. `./staging/archive`
    pub fn for_env(environment: crate::state::Environment, leaf: &str) -> String {
        format!("./{}/{}", environment.prefix(), leaf)
    }
}

const COMPANIES_SRC: &str =
    "/apps/confadmin/content/configurations/companies.json?imsConfigurationId=&limit=50";
const PROPERTIES_SRC: &str =
    "/apps/confadmin/content/configurations/properties.json?imsConfigurationId=&companyId=&limit=50";

/// The live field set of one wizard instance.
///
/// Fields are addressed by wire name; lookups that match nothing are no-ops,
/// mirroring form-scoped selector semantics.
#[derive(Debug, Clone)]
pub struct WizardForm {
    fields: Vec<FormField>,
}

impl WizardForm {
    pub fn new() -> Self {
        let mut fields = vec![
            FormField::text(names::TITLE, "Title"),
            FormField::text(names::IMS_CONFIG_ID, "IMS configuration"),
            FormField::text(names::COMPANY, "Company").with_lookup_src(COMPANIES_SRC),
            FormField::hidden(names::COMPANY_LABEL),
            FormField::text(names::PROPERTY, "Property").with_lookup_src(PROPERTIES_SRC),
            FormField::hidden(names::PROPERTY_LABEL),
            FormField::switch(names::POLLING_IMPORTER, "Enable polling importer"),
            FormField::text(names::SCHEDULER_EXPRESSION, "Scheduler expression"),
        ];

        for environment in [Environment::Staging, Environment::Production] {
            let name = |leaf| names::for_env(environment, leaf);
            fields.push(FormField::switch(&name(names::env::ARCHIVE), "Use archive"));
            fields.push(FormField::hidden(&name(names::env::IS_ARCHIVE)));
            fields.push(FormField::hidden(&name(names::env::ENVIRONMENT_ID)));
            fields.push(FormField::hidden(&name(names::env::ARCHIVE_ENCRYPTED)));
            fields.push(FormField::text(
                &name(names::env::DOWNLOAD_LINK),
                "Download link",
            ));
            fields.push(FormField::text(&name(names::env::DOMAIN_HINT), "Domain hint"));
            fields.push(FormField::password(
                &name(names::env::ARCHIVE_PASSWORD),
                "Archive password",
            ));
            fields.push(FormField::text(&name(names::env::LIBRARY_URI), "Library URI"));
        }

        // Development has no step of its own, only the id carried in the payload
        fields.push(FormField::hidden(&names::for_env(
            Environment::Development,
            names::env::ENVIRONMENT_ID,
        )));

        let mut form = Self { fields };
        form.apply_load_behaviors();
        form
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    pub(crate) fn fields_mut(&mut self) -> impl Iterator<Item = &mut FormField> {
        self.fields.iter_mut()
    }

    /// Current value of a field; empty string when the field is absent
    pub fn value(&self, name: &str) -> &str {
        self.field(name).map(|f| f.as_text()).unwrap_or("")
    }

    /// Set a field's value; no-op when the field is absent
    pub fn set_value(&mut self, name: &str, value: &str) {
        if let Some(field) = self.field_mut(name) {
            field.set_text(value);
        }
    }

    /// Startup pass over a freshly rendered (or pre-populated) form
    pub fn apply_load_behaviors(&mut self) {
        for environment in [Environment::Staging, Environment::Production] {
            for leaf in [names::env::DOWNLOAD_LINK, names::env::LIBRARY_URI] {
                if let Some(field) = self.field_mut(&names::for_env(environment, leaf)) {
                    field.read_only = true;
                }
            }
            // The archive switch mirrors server data and is not user-togglable
            if let Some(field) = self.field_mut(&names::for_env(environment, names::env::ARCHIVE)) {
                field.read_only = true;
            }
            self.apply_archive_visibility(environment);
            self.apply_password_enablement(environment);
        }
        self.apply_scheduler_visibility();
        lookup::rewrite_lookup_sources(self);
        self.seed_label_mirrors();
    }

    /// Show exactly one of the self-hosted / externally-hosted groups,
    /// keyed off the environment's archive switch
    pub fn apply_archive_visibility(&mut self, environment: Environment) {
        let archived = self
            .field(&names::for_env(environment, names::env::ARCHIVE))
            .map(|f| f.is_on())
            .unwrap_or(false);

        for leaf in [
            names::env::DOWNLOAD_LINK,
            names::env::DOMAIN_HINT,
            names::env::ARCHIVE_PASSWORD,
        ] {
            if let Some(field) = self.field_mut(&names::for_env(environment, leaf)) {
                field.visible = archived;
            }
        }
        if let Some(field) = self.field_mut(&names::for_env(environment, names::env::LIBRARY_URI)) {
            field.visible = !archived;
        }
    }

    /// The archive password is keyed off the hidden encrypted mirror, not the
    /// visible control: disabled only when the mirror is exactly "false"
    pub fn apply_password_enablement(&mut self, environment: Environment) {
        let encrypted = self
            .value(&names::for_env(environment, names::env::ARCHIVE_ENCRYPTED))
            .to_string();
        if let Some(field) =
            self.field_mut(&names::for_env(environment, names::env::ARCHIVE_PASSWORD))
        {
            field.enabled = encrypted != "false";
        }
    }

    /// The scheduler expression is visible iff the polling importer is on.
    /// Hiding it clears the value so stale hidden data is never submitted.
    pub fn apply_scheduler_visibility(&mut self) {
        let polling = self
            .field(names::POLLING_IMPORTER)
            .map(|f| f.is_on())
            .unwrap_or(false);
        if let Some(field) = self.field_mut(names::SCHEDULER_EXPRESSION) {
            field.visible = polling;
            if !polling {
                field.clear();
            }
        }
    }

    /// Distribute one environment entry from the lookup into its section.
    ///
    /// Every optional field is written on every application; absent values
    /// write the empty string rather than leaving a prior entry's data.
    pub fn apply_environment_entry(&mut self, entry: &EnvironmentEntry) {
        let Some(environment) = Environment::parse(&entry.environment) else {
            return;
        };
        let name = |leaf| names::for_env(environment, leaf);

        self.set_value(&name(names::env::ENVIRONMENT_ID), &entry.id);
        if environment == Environment::Development {
            return;
        }

        let archived = entry.download_link.is_some();
        if let Some(field) = self.field_mut(&name(names::env::ARCHIVE)) {
            field.set_on(archived);
        }
        self.set_value(
            &name(names::env::IS_ARCHIVE),
            if archived { "true" } else { "false" },
        );
        let encrypted = match entry.archive_encrypted {
            Some(true) => "true",
            Some(false) => "false",
            None => "",
        };
        self.set_value(&name(names::env::ARCHIVE_ENCRYPTED), encrypted);
        self.set_value(
            &name(names::env::LIBRARY_URI),
            entry.library_uri.as_deref().unwrap_or(""),
        );
        self.set_value(
            &name(names::env::DOWNLOAD_LINK),
            entry.download_link.as_deref().unwrap_or(""),
        );
        self.set_value(
            &name(names::env::DOMAIN_HINT),
            entry.domain_hint.as_deref().unwrap_or(""),
        );

        self.apply_archive_visibility(environment);
        self.apply_password_enablement(environment);
    }

    /// Copy the company/property values into their label mirrors
    pub fn seed_label_mirrors(&mut self) {
        let company = self.value(names::COMPANY).to_string();
        self.set_value(names::COMPANY_LABEL, &company);
        let property = self.value(names::PROPERTY).to_string();
        self.set_value(names::PROPERTY_LABEL, &property);
    }

    /// Whether either environment carries an archive, requiring the extra
    /// update round-trip before creation
    pub fn archive_update_needed(&self) -> bool {
        [Environment::Staging, Environment::Production]
            .into_iter()
            .any(|e| self.value(&names::for_env(e, names::env::IS_ARCHIVE)) == "true")
    }

    /// Assemble the archive-settings snapshot for the update endpoint
    pub fn submit_payload(&self) -> SubmitPayload {
        let env = |environment, leaf| self.value(&names::for_env(environment, leaf)).to_string();
        SubmitPayload {
            ims_configuration: self.value(names::IMS_CONFIG_ID).to_string(),
            property: self.value(names::PROPERTY).to_string(),
            development_environment: env(Environment::Development, names::env::ENVIRONMENT_ID),
            staging_archive: env(Environment::Staging, names::env::IS_ARCHIVE),
            staging_environment: env(Environment::Staging, names::env::ENVIRONMENT_ID),
            staging_domain_hint: env(Environment::Staging, names::env::DOMAIN_HINT),
            production_archive: env(Environment::Production, names::env::IS_ARCHIVE),
            production_environment: env(Environment::Production, names::env::ENVIRONMENT_ID),
            production_domain_hint: env(Environment::Production, names::env::DOMAIN_HINT),
        }
    }

    /// The complete form-encoded field set for the wizard resource
    pub fn create_payload(&self) -> Vec<(String, String)> {
        self.fields
            .iter()
            .map(|f| (f.name.clone(), f.submit_value()))
            .collect()
    }

    /// Ordered field names rendered on a step
    fn step_field_names(step: WizardStep) -> Vec<String> {
        match step {
            WizardStep::Properties => vec![
                names::TITLE.to_string(),
                names::IMS_CONFIG_ID.to_string(),
                names::COMPANY.to_string(),
                names::PROPERTY.to_string(),
                names::POLLING_IMPORTER.to_string(),
                names::SCHEDULER_EXPRESSION.to_string(),
            ],
            WizardStep::Staging => Self::environment_field_names(Environment::Staging),
            WizardStep::Production => Self::environment_field_names(Environment::Production),
            WizardStep::Review | WizardStep::Done => Vec::new(),
        }
    }

    fn environment_field_names(environment: Environment) -> Vec<String> {
        [
            names::env::ARCHIVE,
            names::env::DOWNLOAD_LINK,
            names::env::DOMAIN_HINT,
            names::env::ARCHIVE_PASSWORD,
            names::env::LIBRARY_URI,
        ]
        .iter()
        .map(|leaf| names::for_env(environment, leaf))
        .collect()
    }

    /// Fields rendered on a step, in order, honoring visibility
    pub fn step_fields(&self, step: WizardStep) -> Vec<&FormField> {
        Self::step_field_names(step)
            .iter()
            .filter_map(|name| self.field(name))
            .filter(|f| f.visible && !f.hidden)
            .collect()
    }

    /// Names of the step's fields the user can focus and edit
    pub fn focusable_fields(&self, step: WizardStep) -> Vec<String> {
        self.step_fields(step)
            .into_iter()
            .filter(|f| f.enabled && !f.read_only)
            .map(|f| f.name.clone())
            .collect()
    }
}

impl Default for WizardForm {
    fn default() -> Self {
        Self::new()
    }
}
