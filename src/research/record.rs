//! Report records
//!
//! One record is one country's credit-research report as returned by the
//! research API: a flat JSON object keyed by column name. Any field may be
//! missing, so lookups return `Option` and callers pick the fallback.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single report row from the research API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportRecord {
    fields: Map<String, Value>,
}

impl ReportRecord {
    /// Field rendered as text. Strings, numbers and booleans are accepted;
    /// `null`, arrays and objects count as absent.
    pub fn text(&self, field: &str) -> Option<String> {
        match self.fields.get(field)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Field as a number. Numeric strings (e.g. `"2.5"`) are parsed.
    pub fn number(&self, field: &str) -> Option<f64> {
        match self.fields.get(field)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Set a field, returning the record for chaining
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
