//! Labels, help text, error feedback and the wrapper around a control.

use ironhtml::typed::Element;
use ironhtml_elements::{Div, Small};

use super::{open_tag, Ctx};
use crate::attributes::{html_escape, AttrValue, AttributeSet};

impl Ctx<'_> {
    /// Renders a `<label>` for the control with `class` in front of the
    /// custom label classes.
    pub fn label_tag(&self, class: &str, text: &str) -> String {
        let mut attrs = self.field.label_attrs.clone();
        let custom = attrs.get("class").unwrap_or_default();
        attrs.merge(&AttributeSet::from_mapping([("for", AttrValue::from(self.id()))]));
        attrs.set_class(&format!("{class} {custom}"));
        if attrs.get("class").is_none() {
            attrs.remove("class");
        }
        attrs.suppress_empty = true;

        format!("{}{}</label>", open_tag("label", &attrs.render()), html_escape(text))
    }

    /// Renders the label for a wrapped control, or nothing when it has no
    /// label.
    pub fn label(&self) -> String {
        let text = self.label_text();
        if text.is_empty() {
            return String::new();
        }
        let class = if self.form.inline {
            "sr-only"
        } else {
            match &self.form.horizontal {
                Some(layout) => layout.label(),
                None => "",
            }
        };
        self.label_tag(class, &text)
    }

    pub fn help(&self) -> String {
        let Some(help) = self.field.help.as_deref() else {
            return String::new();
        };
        let text = self.translate(Some(help));
        let small = Element::<Small>::new();
        let small = match self.help_id() {
            Some(id) => small.attr("id", &id),
            None => small,
        };
        small.class("form-text text-muted").text(&text).render()
    }

    pub fn error(&self) -> String {
        match self.error_message() {
            Some(message) => Element::<Div>::new()
                .class("invalid-feedback")
                .text(message)
                .render(),
            None => String::new(),
        }
    }

    /// Wraps a control with its label, help text and error feedback
    /// according to the form layout.
    pub fn wrap(&self, control: &str) -> String {
        let label = self.label();
        let help = self.help();
        let error = self.error();

        if self.form.inline {
            return format!("{label}{control}{help}{error}");
        }

        let mut wrapper = self.field.wrapper_attrs.clone();
        let custom = wrapper.get("class").unwrap_or_default();
        match &self.form.horizontal {
            Some(layout) => {
                wrapper.set_class(&format!("form-group row {custom}"));
                format!(
                    r#"{}{label}<div class="{}">{control}{help}{error}</div></div>"#,
                    open_tag("div", &wrapper.render()),
                    html_escape(layout.fields()),
                )
            }
            None => {
                wrapper.set_class(&format!("form-group {custom}"));
                format!(
                    "{}{label}{control}{help}{error}</div>",
                    open_tag("div", &wrapper.render())
                )
            }
        }
    }
}
