//! Form Engine
//!
//! Owns per-field values, touched state and validation results for one form
//! instance. Validation runs on blur (`touch`) or at submit time
//! (`validate_all`), never per keystroke.

use std::collections::{HashMap, HashSet};

use parking_lot::RwLock;
use tracing::warn;

use crate::field::{validate, FieldSpec};
use crate::progress::completion_percent;
use crate::{FormError, Result};

#[derive(Debug, Default)]
struct FormState {
    values: HashMap<String, String>,
    touched: HashSet<String>,
    errors: HashMap<String, String>,
}

/// Form engine for one form instance.
///
/// Fields are registered at construction from a declarative spec table.
/// Shared by `&self`; a page owns exactly one engine and discards it on
/// navigation away.
pub struct FormEngine {
    specs: Vec<FieldSpec>,
    state: RwLock<FormState>,
}

impl FormEngine {
    /// Register the given fields. Every field used by the form must be in
    /// this table; a duplicate name is a contract violation.
    pub fn new(specs: Vec<FieldSpec>) -> Result<Self> {
        let mut values = HashMap::new();
        for spec in &specs {
            if values
                .insert(spec.name.clone(), spec.default.clone())
                .is_some()
            {
                return Err(FormError::DuplicateField(spec.name.clone()));
            }
        }

        Ok(Self {
            specs,
            state: RwLock::new(FormState {
                values,
                ..FormState::default()
            }),
        })
    }

    /// Update a field's value. Does not validate (blur-mode).
    pub fn set_value(&self, name: &str, value: impl Into<String>) -> Result<()> {
        let spec = self.spec(name)?;
        let mut state = self.state.write();
        state.values.insert(spec.name.clone(), value.into());
        Ok(())
    }

    /// Mark a field as having lost focus and re-validate it.
    ///
    /// Returns the field's current validation message, if any.
    pub fn touch(&self, name: &str) -> Result<Option<String>> {
        let spec = self.spec(name)?;
        let mut state = self.state.write();
        state.touched.insert(spec.name.clone());

        let value = state.values.get(&spec.name).cloned().unwrap_or_default();
        let message = validate(spec, &value);
        match &message {
            Some(msg) => {
                state.errors.insert(spec.name.clone(), msg.clone());
            }
            None => {
                state.errors.remove(&spec.name);
            }
        }
        Ok(message)
    }

    /// Validate every registered field regardless of touched state.
    ///
    /// Failing fields become touched so their errors render. Returns whether
    /// all fields passed.
    pub fn validate_all(&self) -> bool {
        let mut state = self.state.write();
        let mut all_valid = true;

        for spec in &self.specs {
            let value = state.values.get(&spec.name).cloned().unwrap_or_default();
            match validate(spec, &value) {
                Some(msg) => {
                    all_valid = false;
                    state.touched.insert(spec.name.clone());
                    state.errors.insert(spec.name.clone(), msg);
                }
                None => {
                    state.errors.remove(&spec.name);
                }
            }
        }

        all_valid
    }

    /// Current values, trimmed, keyed by field name.
    ///
    /// Field names map 1:1 to payload keys; trimming is the only
    /// transformation performed on read.
    pub fn snapshot(&self) -> HashMap<String, String> {
        let state = self.state.read();
        state
            .values
            .iter()
            .map(|(k, v)| (k.clone(), v.trim().to_string()))
            .collect()
    }

    /// Percentage of registered fields holding a non-empty value.
    pub fn progress(&self) -> u8 {
        let state = self.state.read();
        completion_percent(
            self.specs
                .iter()
                .map(|spec| state.values.get(&spec.name).map(String::as_str).unwrap_or("")),
        )
    }

    pub fn value(&self, name: &str) -> Option<String> {
        self.state.read().values.get(name).cloned()
    }

    pub fn error(&self, name: &str) -> Option<String> {
        self.state.read().errors.get(name).cloned()
    }

    /// All currently failing fields and their messages.
    pub fn errors(&self) -> HashMap<String, String> {
        self.state.read().errors.clone()
    }

    pub fn is_touched(&self, name: &str) -> bool {
        self.state.read().touched.contains(name)
    }

    pub fn field_names(&self) -> Vec<String> {
        self.specs.iter().map(|s| s.name.clone()).collect()
    }

    fn spec(&self, name: &str) -> Result<&FieldSpec> {
        self.specs.iter().find(|s| s.name == name).ok_or_else(|| {
            warn!(field = name, "operation on unregistered field");
            FormError::UnknownField(name.to_string())
        })
    }
}
