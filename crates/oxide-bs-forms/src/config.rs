//! Form-level configuration.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{FormError, Result};

/// Column classes for a horizontal (grid) form layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HorizontalLayout {
    label: String,
    fields: String,
}

impl HorizontalLayout {
    /// Creates a layout from the label-column and field-column classes.
    ///
    /// Both classes are trimmed and lower-cased and must not be empty.
    pub fn new(label: &str, fields: &str) -> Result<Self> {
        let label = label.trim().to_lowercase();
        let fields = fields.trim().to_lowercase();
        if label.is_empty() || fields.is_empty() {
            return Err(FormError::InvalidConfiguration(
                "horizontal layout needs non-empty label and fields classes".to_string(),
            ));
        }
        Ok(Self { label, fields })
    }

    /// Reads loosely-typed settings: `false` disables the layout, and a
    /// `{label, fields}` object (keys matched case-insensitively) enables it.
    pub fn from_value(settings: &Value) -> Result<Option<Self>> {
        let invalid = || {
            FormError::InvalidConfiguration(
                "settings must be a {label, fields} object or `false`".to_string(),
            )
        };

        match settings {
            Value::Bool(false) => Ok(None),
            Value::Object(map) => {
                let find = |wanted: &str| {
                    map.iter()
                        .find(|(k, _)| k.eq_ignore_ascii_case(wanted))
                        .and_then(|(_, v)| v.as_str())
                };
                match (find("label"), find("fields")) {
                    (Some(label), Some(fields)) => Self::new(label, fields).map(Some),
                    _ => Err(invalid()),
                }
            }
            _ => Err(invalid()),
        }
    }

    /// The label column class.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The field column class.
    pub fn fields(&self) -> &str {
        &self.fields
    }
}

/// Serializable form-level settings.
///
/// ```
/// use oxide_bs_forms::FormConfig;
///
/// let config: FormConfig = serde_json::from_str(
///     r#"{"method": "put", "horizontal": {"label": "col-sm-2", "fields": "col-sm-10"}}"#,
/// )
/// .unwrap();
/// assert_eq!(config.method, "put");
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// HTTP method (`get`, `post`, `put`, `patch`, `delete`).
    pub method: String,
    /// Whether the form posts `multipart/form-data`.
    pub multipart: bool,
    /// Inline form layout.
    pub inline: bool,
    /// Horizontal layout settings, `false` or `{label, fields}`.
    pub horizontal: Value,
    /// Translation namespace for labels.
    pub locale: Option<String>,
    /// Prefix prepended to every generated id.
    pub id_prefix: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            method: "post".to_string(),
            multipart: false,
            inline: false,
            horizontal: Value::Bool(false),
            locale: None,
            id_prefix: String::new(),
        }
    }
}

impl FormConfig {
    /// Validates the settings, returning the parsed horizontal layout.
    pub fn validate(&self) -> Result<Option<HorizontalLayout>> {
        let horizontal = HorizontalLayout::from_value(&self.horizontal)?;
        if self.inline && horizontal.is_some() {
            return Err(FormError::InvalidConfiguration(
                "a form cannot be both inline and horizontal".to_string(),
            ));
        }
        if self.method.trim().is_empty() {
            return Err(FormError::InvalidConfiguration(
                "form method must not be empty".to_string(),
            ));
        }
        Ok(horizontal)
    }
}
