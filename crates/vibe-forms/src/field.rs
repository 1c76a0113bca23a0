//! Field Specifications
//!
//! Declarative per-field constraints evaluated by a single validation routine.

use regex::Regex;

use crate::Result;

/// What kind of input a field is
#[derive(Clone, Debug)]
pub enum FieldKind {
    /// Free text input
    Text,
    /// Masked text input
    Password,
    /// Single choice from a closed enumeration
    Select { options: Vec<SelectOption> },
}

/// One choice in a select field
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Declarative specification for one form field
#[derive(Clone, Debug)]
pub struct FieldSpec {
    /// Unique key within a form, 1:1 with the payload key
    pub name: String,
    /// Human-readable label used in validation messages
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    /// Minimum length, free-text/password kinds only
    pub min_length: Option<usize>,
    /// Format constraint, free-text/password kinds only
    pub pattern: Option<Regex>,
    /// Message reported when `pattern` does not match
    pub pattern_message: Option<String>,
    /// Initial value seeded into the form
    pub default: String,
}

impl FieldSpec {
    /// Create a free-text field
    pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::with_kind(name, label, FieldKind::Text)
    }

    /// Create a password field
    pub fn password(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::with_kind(name, label, FieldKind::Password)
    }

    /// Create a select field constrained to the given options
    pub fn select(
        name: impl Into<String>,
        label: impl Into<String>,
        options: Vec<SelectOption>,
    ) -> Self {
        Self::with_kind(name, label, FieldKind::Select { options })
    }

    fn with_kind(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            required: false,
            min_length: None,
            pattern: None,
            pattern_message: None,
            default: String::new(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, len: usize) -> Self {
        self.min_length = Some(len);
        self
    }

    /// Constrain the value to a regular expression, with the message
    /// reported when it does not match
    pub fn pattern(mut self, pattern: &str, message: impl Into<String>) -> Result<Self> {
        self.pattern = Some(Regex::new(pattern)?);
        self.pattern_message = Some(message.into());
        Ok(self)
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = value.into();
        self
    }
}

/// Validate a value against its field spec.
///
/// Returns the first violated rule's message, or `None` when the value is
/// valid. Rules short-circuit in precedence order: required, then minimum
/// length, then pattern. Select kinds are checked solely for a value chosen
/// from their enumeration.
pub fn validate(spec: &FieldSpec, value: &str) -> Option<String> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        if spec.required {
            return Some(format!("{} is required", spec.label));
        }
        return None;
    }

    if let FieldKind::Select { options } = &spec.kind {
        if !options.iter().any(|o| o.value == trimmed) {
            return Some(format!("Select a valid {}", spec.label.to_lowercase()));
        }
        return None;
    }

    if let Some(min) = spec.min_length {
        if trimmed.chars().count() < min {
            return Some(format!("{} must be at least {} characters", spec.label, min));
        }
    }

    if let Some(pattern) = &spec.pattern {
        if !pattern.is_match(trimmed) {
            return Some(
                spec.pattern_message
                    .clone()
                    .unwrap_or_else(|| format!("Enter a valid {}", spec.label.to_lowercase())),
            );
        }
    }

    None
}
