//! Text-like inputs, textareas, selects, file and hidden inputs.

use crate::attributes::{html_escape, AttrValue, AttributeSet};
use crate::fields::value::{as_list, display};

use super::Ctx;

fn value_attr(ctx: &Ctx<'_>) -> AttributeSet {
    let value = ctx.value().as_ref().and_then(display);
    AttributeSet::from_mapping([("value", AttrValue::from(value))])
}

/// Text, password, email, number and range inputs.
pub(super) fn input(ctx: &Ctx<'_>) -> String {
    let attrs = ctx.build_attrs(value_attr(ctx));
    ctx.wrap(&format!("<input {attrs}>"))
}

pub(super) fn file(ctx: &Ctx<'_>) -> String {
    let attrs = ctx.build_attrs(AttributeSet::new());
    ctx.wrap(&format!("<input {attrs}>"))
}

/// Hidden inputs render bare, without label or wrapper.
pub(super) fn hidden(ctx: &Ctx<'_>) -> String {
    format!("<input {}>", ctx.build_attrs(value_attr(ctx)))
}

pub(super) fn textarea(ctx: &Ctx<'_>) -> String {
    let attrs = ctx.build_attrs(AttributeSet::from([("rows", "3")]));
    let content = ctx
        .value()
        .as_ref()
        .and_then(display)
        .map(|v| html_escape(&v))
        .unwrap_or_default();
    ctx.wrap(&format!("<textarea {attrs}>{content}</textarea>"))
}

pub(super) fn select(ctx: &Ctx<'_>) -> String {
    let attrs = ctx.build_attrs(AttributeSet::new());
    let value = ctx.value();

    let selected: Vec<String> = match (&value, ctx.field.multiple) {
        (Some(value), true) => as_list(value),
        (Some(value), false) => display(value).into_iter().collect(),
        (None, _) => Vec::new(),
    };

    let options: String = ctx
        .field
        .options
        .iter()
        .map(|(key, label)| {
            let marker = if selected.iter().any(|s| s == key) {
                " selected"
            } else {
                ""
            };
            format!(
                r#"<option value="{}"{marker}>{}</option>"#,
                html_escape(key),
                html_escape(label)
            )
        })
        .collect();

    ctx.wrap(&format!("<select {attrs}>{options}</select>"))
}
