//! Checkboxes and radio buttons.

use super::{open_tag, Ctx};
use crate::attributes::{AttrValue, AttributeSet};
use crate::fields::Label;

pub(super) fn check(ctx: &Ctx<'_>) -> String {
    let field = ctx.field;
    let attrs = ctx.build_attrs(AttributeSet::from_mapping([
        ("class", AttrValue::from("form-check-input")),
        ("value", AttrValue::from(field.meta.check_value.as_deref())),
    ]));

    let mut wrapper = field.wrapper_attrs.clone();
    let custom = wrapper.get("class").unwrap_or_default();
    let inline = if field.check_inline {
        " form-check-inline"
    } else {
        ""
    };
    wrapper.set_class(&format!("form-check{inline} {custom}"));

    let text = match &field.label {
        Label::Text(text) => ctx.translate(Some(text)),
        Label::None | Label::FromName => ctx.translate(None),
    };

    format!(
        "{}<input {attrs}>{}</div>",
        open_tag("div", &wrapper.render()),
        ctx.label_tag("form-check-label", &text)
    )
}

#[cfg(test)]
mod tests {
    use crate::FormBuilder;

    #[test]
    fn test_checkbox_defaults_value_to_name() {
        let form = FormBuilder::new();
        let html = form.checkbox("terms", "Accept", None).render().unwrap();
        assert!(html.starts_with(r#"<div class="form-check"><input "#));
        assert!(html.contains(r#"value="terms""#));
        assert!(html.contains(r#"class="form-control form-check-input""#));
        assert!(!html.contains("checked"));
        assert!(html.ends_with(r#"<label for="terms" class="form-check-label">Accept</label></div>"#));
    }

    #[test]
    fn test_inline_radio() {
        let form = FormBuilder::new();
        let html = form
            .radio("color", "Red", Some("Dark Red"))
            .inline(true)
            .render()
            .unwrap();
        assert!(html.starts_with(r#"<div class="form-check form-check-inline">"#));
        assert!(html.contains(r#"id="color-dark-red""#));
    }
}
