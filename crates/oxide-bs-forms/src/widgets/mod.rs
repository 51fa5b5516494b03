//! Markup generation for every field kind.

mod buttons;
mod checks;
mod controls;
mod form_tags;
mod layout;

use serde_json::Value;
use tracing::debug;

use crate::attributes::{AttrValue, AttributeSet};
use crate::error::{FormError, Result};
use crate::fields::value::{display, is_truthy, slug};
use crate::fields::{FieldKind, FieldState, Label};
use crate::form::{FormBuilder, FormState};
use crate::services::Services;

/// Renders one field against the form it came from.
pub(crate) fn render(form: &FormBuilder, field: &FieldState) -> Result<String> {
    let kind = field.kind.ok_or_else(|| {
        FormError::Misuse("field has no kind; call `kind()` before `render()`".to_string())
    })?;
    check_usage(kind, field)?;

    let ctx = Ctx {
        form: form.state(),
        services: form.services(),
        field,
        kind,
    };

    let html = match kind {
        FieldKind::Open => form_tags::open(&ctx),
        FieldKind::FieldsetOpen => form_tags::fieldset_open(&ctx),
        FieldKind::Hidden => controls::hidden(&ctx),
        FieldKind::Textarea => controls::textarea(&ctx),
        FieldKind::Select => controls::select(&ctx),
        FieldKind::File => controls::file(&ctx),
        FieldKind::Text
        | FieldKind::Password
        | FieldKind::Range
        | FieldKind::Email
        | FieldKind::Number => controls::input(&ctx),
        FieldKind::Checkbox | FieldKind::Radio => checks::check(&ctx),
        FieldKind::Anchor => buttons::anchor(&ctx),
        FieldKind::Button | FieldKind::Submit | FieldKind::Reset => buttons::button(&ctx),
    };

    debug!(kind = %kind, name = ?field.name, "Rendered form control");
    Ok(html)
}

fn check_usage(kind: FieldKind, field: &FieldState) -> Result<()> {
    if kind.is_check() && field.name.is_none() && field.meta.check_value.is_none() {
        return Err(FormError::Misuse(format!(
            "a {kind} needs a name or a value"
        )));
    }
    if kind != FieldKind::Select {
        if field.multiple {
            return Err(FormError::Misuse(format!(
                "multiple() applies to selects, not {kind}"
            )));
        }
        if !field.options.is_empty() {
            return Err(FormError::Misuse(format!(
                "options apply to selects, not {kind}"
            )));
        }
    }
    Ok(())
}

/// Everything a renderer reads: the form-level settings, the collaborators
/// and the field being rendered.
pub(crate) struct Ctx<'a> {
    pub form: &'a FormState,
    pub services: &'a Services,
    pub field: &'a FieldState,
    pub kind: FieldKind,
}

impl Ctx<'_> {
    fn name(&self) -> Option<&str> {
        self.field.name.as_deref().filter(|n| !n.is_empty())
    }

    /// Resolves the field value: resubmitted input first, then the explicit
    /// value, then the bound record.
    pub fn value(&self) -> Option<Value> {
        let name = self.name();
        if let Some(old) = self.services.old_input.as_deref() {
            if old.has_any() {
                return name.and_then(|n| old.get(n));
            }
        }
        if let Some(value) = &self.field.value {
            return Some(value.clone());
        }
        let data = self.form.data.as_ref()?;
        data.get(name?).filter(|v| !v.is_null()).cloned()
    }

    /// Returns the element id, prefixed with the form's id prefix.
    pub fn id(&self) -> Option<String> {
        let id = match (self.field.id.as_deref(), self.name()) {
            (Some(id), _) if !id.is_empty() => id.to_string(),
            (_, Some(name)) if self.kind == FieldKind::Radio => {
                let value = self.field.meta.check_value.as_deref().unwrap_or_default();
                format!("{name}-{}", slug(value))
            }
            (_, Some(name)) => name.to_string(),
            _ => return None,
        };
        Some(format!("{}{id}", self.form.id_prefix))
    }

    pub fn help_id(&self) -> Option<String> {
        self.id().map(|id| format!("help-{id}"))
    }

    /// Looks `key` up in the translator when a locale is set. An empty key
    /// falls back to the field name.
    pub fn translate(&self, key: Option<&str>) -> String {
        let key = key.filter(|k| !k.is_empty()).or(self.name()).unwrap_or_default();
        match self.form.locale.as_deref() {
            Some(locale) if !key.is_empty() => {
                self.services.translator.translate(&format!("{locale}.{key}"))
            }
            _ => key.to_string(),
        }
    }

    /// Returns the translated label text, empty when there is no label.
    pub fn label_text(&self) -> String {
        match &self.field.label {
            Label::None => String::new(),
            Label::Text(text) if text.is_empty() => String::new(),
            Label::Text(text) => self.translate(Some(text)),
            Label::FromName => self.name().map(|n| self.translate(Some(n))).unwrap_or_default(),
        }
    }

    /// Returns the first error for this field, once validation has run.
    pub fn error_message(&self) -> Option<&str> {
        let store = self.services.errors.as_deref()?;
        if !store.has_run() {
            return None;
        }
        store.first(self.name()?)
    }

    fn validation_class(&self) -> &'static str {
        let Some(name) = self.name() else {
            return "";
        };
        match self.services.errors.as_deref() {
            Some(store) if store.has_run() => {
                if store.first(name).is_some() {
                    "is-invalid"
                } else {
                    "is-valid"
                }
            }
            _ => "",
        }
    }

    /// Builds the control's attribute string.
    ///
    /// `overrides` are merged over the field's own attributes; the computed
    /// attributes (type, name, id, class, flags) are then written on top.
    pub fn build_attrs(&self, overrides: AttributeSet) -> String {
        let descriptor = self.kind.descriptor();
        let field = self.field;

        let mut props = field.attrs.clone();
        props.merge(&overrides);
        props.suppress_empty = true;

        props.set("type", descriptor.input_type);

        let name = self.name().map(|name| {
            if self.kind == FieldKind::Select && field.multiple {
                format!("{name}[]")
            } else {
                name.to_string()
            }
        });
        props.set("name", name);

        if descriptor.autocomplete {
            props.set("autocomplete", field.autocomplete.as_str());
        } else {
            props.remove("autocomplete");
        }
        props.set("id", self.id());
        props.set("placeholder", field.placeholder.as_deref());
        if field.help.is_some() {
            props.set("aria-describedby", self.help_id());
        }

        props.set_class(&self.class_list(&props));
        if props.get("class").is_none() {
            props.remove("class");
        }

        if self.kind.is_check() && self.is_checked() {
            props.set("checked", AttrValue::Flag);
        }
        if self.kind == FieldKind::Select && field.multiple {
            props.set("multiple", AttrValue::Flag);
        }
        if field.readonly {
            props.set("readonly", AttrValue::Flag);
        }
        if field.disabled && self.kind != FieldKind::Anchor {
            props.set("disabled", AttrValue::Flag);
        }
        if field.required {
            props.set("required", AttrValue::Flag);
        }
        if self.kind == FieldKind::Hidden {
            props.remove("class");
        }

        props.render()
    }

    fn class_list(&self, props: &AttributeSet) -> String {
        let descriptor = self.kind.descriptor();
        let mut class = String::new();

        if let Some(base) = descriptor.base_class {
            class.push_str(base);
            class.push(' ');
        }
        class.push_str(&props.get("class").unwrap_or_default());

        if let Some(base) = descriptor.base_class.filter(|b| !b.is_empty()) {
            if let Some(size) = &self.field.size {
                class.push_str(&format!(" {base}-{size}"));
            }
            if self.form.inline {
                class.push_str(" mb-2 mr-sm-2");
            }
        }

        class.push(' ');
        class.push_str(self.validation_class());
        class.push(' ');
        class.push_str(&self.field.attrs.get("class").unwrap_or_default());
        class
    }

    fn is_checked(&self) -> bool {
        let Some(value) = self.value() else {
            return false;
        };
        match self.kind {
            FieldKind::Radio => display(&value) == self.field.meta.check_value,
            _ => is_truthy(&value),
        }
    }
}

/// Opens a tag, leaving out the space when there are no attributes.
pub(crate) fn open_tag(tag: &str, attrs: &str) -> String {
    if attrs.is_empty() {
        format!("<{tag}>")
    } else {
        format!("<{tag} {attrs}>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationErrors;
    use serde_json::json;

    #[test]
    fn test_render_without_kind_is_misuse() {
        let form = FormBuilder::new();
        let err = form.field().name("x").render().unwrap_err();
        assert!(matches!(err, FormError::Misuse(_)));
    }

    #[test]
    fn test_multiple_on_text_is_misuse() {
        let form = FormBuilder::new();
        let err = form.text("x", "X").multiple(true).render().unwrap_err();
        assert!(matches!(err, FormError::Misuse(_)));
    }

    #[test]
    fn test_value_precedence() {
        let mut form = FormBuilder::new();
        form.fill_map(json!({"name": "record"}).as_object().cloned().unwrap());

        let html = form.text("name", "Name").render().unwrap();
        assert!(html.contains(r#"value="record""#));

        let html = form.text("name", "Name").value("explicit").render().unwrap();
        assert!(html.contains(r#"value="explicit""#));
    }

    #[test]
    fn test_validation_class_requires_a_validation_pass() {
        let form = FormBuilder::new();
        let html = form.text("name", "Name").render().unwrap();
        assert!(!html.contains("is-valid"));

        let form = FormBuilder::new().with_errors(ValidationErrors::new());
        let html = form.text("name", "Name").render().unwrap();
        assert!(html.contains(r#"class="form-control is-valid""#));
    }

    #[test]
    fn test_open_tag() {
        assert_eq!(open_tag("div", ""), "<div>");
        assert_eq!(open_tag("div", r#"class="row""#), r#"<div class="row">"#);
    }
}
