//! Wizard form field value objects

/// Type-safe field values
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Switch(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// A single wizard field: its wire name, value, and widget attributes
#[derive(Debug, Clone)]
pub struct FormField {
    /// Name the field is submitted under
    pub name: String,
    pub label: String,
    pub value: FieldValue,
    /// Value-only mirror field, never rendered or focused
    pub hidden: bool,
    /// Render the value masked
    pub secret: bool,
    pub visible: bool,
    pub enabled: bool,
    pub read_only: bool,
    /// Data-source URL for autocomplete lookups, if any
    pub lookup_src: Option<String>,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
            hidden: false,
            secret: false,
            visible: true,
            enabled: true,
            read_only: false,
            lookup_src: None,
        }
    }

    /// Create a new password field
    pub fn password(name: &str, label: &str) -> Self {
        Self {
            secret: true,
            ..Self::text(name, label)
        }
    }

    /// Create a new switch field
    pub fn switch(name: &str, label: &str) -> Self {
        Self {
            value: FieldValue::Switch(false),
            ..Self::text(name, label)
        }
    }

    /// Create a new hidden mirror field
    pub fn hidden(name: &str) -> Self {
        Self {
            hidden: true,
            ..Self::text(name, "")
        }
    }

    /// Attach an autocomplete data-source URL
    pub fn with_lookup_src(mut self, src: &str) -> Self {
        self.lookup_src = Some(src.to_string());
        self
    }

    /// Get the text value ("true"/"false" for switches)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Switch(true) => "true",
            FieldValue::Switch(false) => "false",
        }
    }

    /// Whether a switch field is on (false for text fields)
    pub fn is_on(&self) -> bool {
        matches!(self.value, FieldValue::Switch(true))
    }

    /// Set the text value (switches parse "true")
    pub fn set_text(&mut self, value: &str) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.clear();
                s.push_str(value);
            }
            FieldValue::Switch(on) => *on = value == "true",
        }
    }

    /// Set a switch field's state (no-op for text fields)
    pub fn set_on(&mut self, value: bool) {
        if let FieldValue::Switch(on) = &mut self.value {
            *on = value;
        }
    }

    /// Toggle a switch field (no-op for text fields)
    pub fn toggle(&mut self) {
        if let FieldValue::Switch(on) = &mut self.value {
            *on = !*on;
        }
    }

    /// Whether this is a switch field
    pub fn is_switch(&self) -> bool {
        matches!(self.value, FieldValue::Switch(_))
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = &mut self.value {
            s.push(c);
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Switch(on) => *on = false,
        }
    }

    /// Value submitted to the server
    pub fn submit_value(&self) -> String {
        self.as_text().to_string()
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) if self.secret => "•".repeat(s.chars().count()),
            FieldValue::Text(s) => s.clone(),
            FieldValue::Switch(true) => "[x] on".to_string(),
            FieldValue::Switch(false) => "[ ] off".to_string(),
        }
    }
}
