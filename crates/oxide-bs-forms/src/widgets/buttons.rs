//! Buttons and button-styled links.

use super::Ctx;
use crate::attributes::{html_escape, AttrValue, AttributeSet};
use crate::fields::value::display;

fn button_class(ctx: &Ctx<'_>) -> String {
    let field = ctx.field;
    let outline = if field.outline { "outline-" } else { "" };
    let size = field
        .size
        .as_deref()
        .map(|size| format!(" btn-{size}"))
        .unwrap_or_default();
    let block = if field.block { " btn-block" } else { "" };
    format!("btn btn-{outline}{}{size}{block}", field.color)
}

fn caption(ctx: &Ctx<'_>) -> String {
    let value = ctx.field.value.as_ref().and_then(display);
    html_escape(&ctx.translate(value.as_deref()))
}

/// `<button>` elements of type button, submit or reset.
pub(super) fn button(ctx: &Ctx<'_>) -> String {
    let attrs = ctx.build_attrs(AttributeSet::from([("class", button_class(ctx))]));
    format!("<button {attrs}>{}</button>", caption(ctx))
}

/// A link styled as a button. Disabled links get a class and an ARIA flag
/// instead of the `disabled` attribute.
pub(super) fn anchor(ctx: &Ctx<'_>) -> String {
    let disabled = ctx.field.disabled;
    let mut class = button_class(ctx);
    if disabled {
        class.push_str(" disabled");
    }
    let href = ctx
        .field
        .url
        .clone()
        .unwrap_or_else(|| "javascript:void(0)".to_string());

    let attrs = ctx.build_attrs(AttributeSet::from_mapping([
        ("class", AttrValue::from(class)),
        ("href", AttrValue::from(href)),
        ("role", AttrValue::from("button")),
        ("aria-disabled", AttrValue::from(disabled.then_some("true"))),
    ]));
    format!("<a {attrs}>{}</a>", caption(ctx))
}

#[cfg(test)]
mod tests {
    use crate::FormBuilder;

    #[test]
    fn test_button_classes() {
        let form = FormBuilder::new();
        let html = form
            .submit("Save")
            .danger()
            .outline(true)
            .lg()
            .block(true)
            .render()
            .unwrap();
        assert_eq!(
            html,
            r#"<button class="btn btn-outline-danger btn-lg btn-block" type="submit">Save</button>"#
        );
    }

    #[test]
    fn test_disabled_anchor() {
        let form = FormBuilder::new();
        let html = form.anchor("Back", None).disabled(true).render().unwrap();
        assert_eq!(
            html,
            r#"<a class="btn btn-primary disabled" href="javascript:void(0)" role="button" aria-disabled="true">Back</a>"#
        );
    }
}
