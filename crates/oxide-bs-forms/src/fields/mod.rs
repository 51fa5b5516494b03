//! Field kinds and per-field state.

mod options;
pub mod value;

pub use options::SelectOptions;

use std::fmt;

use serde_json::Value;

use crate::attributes::AttributeSet;

/// Every renderable control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// The opening `<form>` tag.
    Open,
    /// The opening `<fieldset>` tag.
    FieldsetOpen,
    File,
    Text,
    Password,
    Range,
    Email,
    Number,
    Hidden,
    Textarea,
    Select,
    Checkbox,
    Radio,
    Button,
    Submit,
    Reset,
    Anchor,
}

/// Static rendering traits of a [`FieldKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindDescriptor {
    /// Name used in logs and error messages.
    pub name: &'static str,
    /// Framework class put in front of the custom classes. `None` skips
    /// the base class altogether.
    pub base_class: Option<&'static str>,
    /// Value of the `type` attribute, for tags that carry one.
    pub input_type: Option<&'static str>,
    /// Whether the tag carries an `autocomplete` attribute.
    pub autocomplete: bool,
}

const fn descriptor(
    name: &'static str,
    base_class: Option<&'static str>,
    input_type: Option<&'static str>,
    autocomplete: bool,
) -> KindDescriptor {
    KindDescriptor {
        name,
        base_class,
        input_type,
        autocomplete,
    }
}

impl FieldKind {
    /// Returns the rendering descriptor for this kind.
    pub const fn descriptor(self) -> KindDescriptor {
        const CONTROL: Option<&str> = Some("form-control");
        match self {
            Self::Open => descriptor("open", None, None, true),
            Self::FieldsetOpen => descriptor("fieldset", None, None, false),
            Self::File => descriptor("file", Some("form-control-file"), Some("file"), true),
            Self::Text => descriptor("text", CONTROL, Some("text"), true),
            Self::Password => descriptor("password", CONTROL, Some("password"), true),
            Self::Range => descriptor("range", Some("form-control-range"), Some("range"), true),
            Self::Email => descriptor("email", CONTROL, Some("email"), true),
            Self::Number => descriptor("number", CONTROL, Some("number"), true),
            Self::Hidden => descriptor("hidden", CONTROL, Some("hidden"), false),
            Self::Textarea => descriptor("textarea", CONTROL, None, true),
            Self::Select => descriptor("select", CONTROL, None, true),
            Self::Checkbox => descriptor("checkbox", CONTROL, Some("checkbox"), true),
            Self::Radio => descriptor("radio", CONTROL, Some("radio"), true),
            Self::Button => descriptor("button", Some(""), Some("button"), false),
            Self::Submit => descriptor("submit", Some(""), Some("submit"), false),
            Self::Reset => descriptor("reset", Some(""), Some("reset"), false),
            Self::Anchor => descriptor("anchor", Some(""), None, false),
        }
    }

    /// Returns whether this kind is a checkbox or a radio button.
    pub const fn is_check(self) -> bool {
        matches!(self, Self::Checkbox | Self::Radio)
    }

    /// Returns whether this kind renders as a Bootstrap button.
    pub const fn is_button(self) -> bool {
        matches!(self, Self::Button | Self::Submit | Self::Reset | Self::Anchor)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.descriptor().name)
    }
}

/// Label configuration for a field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Label {
    /// No label.
    #[default]
    None,
    /// Explicit label text (a translation key when a locale is set).
    Text(String),
    /// Use the field name as the label.
    FromName,
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Label {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for Label {
    fn from(value: bool) -> Self {
        if value {
            Self::FromName
        } else {
            Self::None
        }
    }
}

impl<T: Into<Label>> From<Option<T>> for Label {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::None, Into::into)
    }
}

/// Extra per-field data that does not map to an attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMeta {
    /// Legend text for fieldsets.
    pub legend: Option<String>,
    /// Canonical value submitted by a checkbox or radio option.
    pub check_value: Option<String>,
}

/// Everything configured for one field. A fresh value holds the defaults
/// every field starts from.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldState {
    pub kind: Option<FieldKind>,
    pub name: Option<String>,
    pub id: Option<String>,
    pub label: Label,
    pub value: Option<Value>,
    pub options: SelectOptions,
    pub placeholder: Option<String>,
    pub help: Option<String>,
    /// Render checkboxes/radios side by side.
    pub check_inline: bool,
    pub size: Option<String>,
    pub readonly: bool,
    pub disabled: bool,
    pub required: bool,
    /// `autocomplete` attribute value.
    pub autocomplete: String,
    /// Button color (`primary`, `danger`, ...).
    pub color: String,
    pub outline: bool,
    pub block: bool,
    pub multiple: bool,
    /// Form action or anchor href.
    pub url: Option<String>,
    /// Attributes for the control itself.
    pub attrs: AttributeSet,
    /// Attributes for the wrapping div.
    pub wrapper_attrs: AttributeSet,
    /// Attributes for the label.
    pub label_attrs: AttributeSet,
    pub meta: FieldMeta,
}

impl Default for FieldState {
    fn default() -> Self {
        Self {
            kind: None,
            name: None,
            id: None,
            label: Label::None,
            value: None,
            options: SelectOptions::new(),
            placeholder: None,
            help: None,
            check_inline: false,
            size: None,
            readonly: false,
            disabled: false,
            required: false,
            autocomplete: "off".to_string(),
            color: "primary".to_string(),
            outline: false,
            block: false,
            multiple: false,
            url: None,
            attrs: AttributeSet::suppressing_empty(),
            wrapper_attrs: AttributeSet::suppressing_empty(),
            label_attrs: AttributeSet::suppressing_empty(),
            meta: FieldMeta::default(),
        }
    }
}

impl FieldState {
    /// Creates the default state for a field of `kind`.
    pub fn for_kind(kind: FieldKind) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }
}
