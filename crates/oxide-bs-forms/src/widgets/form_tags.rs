//! Opening `<form>` and `<fieldset>` tags.

use ironhtml::typed::Element;
use ironhtml_elements::Legend;

use super::{open_tag, Ctx};
use crate::attributes::{AttrValue, AttributeSet};

/// Opens the form. Methods other than `get` submit as `post`; the real
/// method travels in the method-override fragment.
pub(super) fn open(ctx: &Ctx<'_>) -> String {
    let method = ctx.form.method.as_str();
    let submitted = if method == "get" { "get" } else { "post" };

    let mut overrides = AttributeSet::from_mapping([
        ("action", AttrValue::from(ctx.field.url.as_deref())),
        ("method", AttrValue::from(submitted)),
    ]);
    if ctx.form.multipart {
        overrides.set("enctype", "multipart/form-data");
    }
    if ctx.form.inline {
        overrides.set("class", "form-inline");
    }

    let mut html = open_tag("form", &ctx.build_attrs(overrides));
    if method != "get" {
        html.push_str(&ctx.services.csrf.csrf_field());
        if method != "post" {
            html.push_str(&ctx.services.method_override.method_field(method));
        }
    }
    html
}

pub(super) fn fieldset_open(ctx: &Ctx<'_>) -> String {
    let mut html = open_tag("fieldset", &ctx.build_attrs(AttributeSet::new()));
    if let Some(legend) = ctx.field.meta.legend.as_deref().filter(|l| !l.is_empty()) {
        let text = ctx.translate(Some(legend));
        html.push_str(&Element::<Legend>::new().text(&text).render());
    }
    html
}

#[cfg(test)]
mod tests {
    use crate::services::CsrfToken;
    use crate::FormBuilder;

    #[test]
    fn test_open_post_with_csrf() {
        let form = FormBuilder::new().with_csrf(CsrfToken("abc".to_string()));
        let html = form.open().url("/users").render().unwrap();
        assert_eq!(
            html,
            r#"<form action="/users" method="post" autocomplete="off"><input type="hidden" name="_token" value="abc">"#
        );
    }

    #[test]
    fn test_open_delete_adds_override() {
        let mut form = FormBuilder::new();
        form.delete();
        let html = form.open().render().unwrap();
        assert!(html.starts_with(r#"<form method="post" autocomplete="off">"#));
        assert!(html.ends_with(r#"<input type="hidden" name="_method" value="DELETE">"#));
    }

    #[test]
    fn test_fieldset_without_legend() {
        let form = FormBuilder::new();
        assert_eq!(form.fieldset_open(None).render().unwrap(), "<fieldset>");
        assert_eq!(form.fieldset_close(), "</fieldset>");
    }
}
