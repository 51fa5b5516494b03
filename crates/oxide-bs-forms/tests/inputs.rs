//! Tests for text-like inputs: values, ids, labels, help text, validation
//! feedback and old-input precedence.

mod common;
use common::*;

use oxide_bs_forms::FormBuilder;
use serde_json::json;

#[test]
fn text_input_in_default_layout() {
    let form = FormBuilder::new();
    let html = render(form.text("username", "Username").value("bob"));
    assert_eq!(
        html,
        concat!(
            r#"<div class="form-group">"#,
            r#"<label for="username">Username</label>"#,
            r#"<input value="bob" type="text" name="username" autocomplete="off" id="username" class="form-control">"#,
            "</div>"
        )
    );
}

#[test]
fn input_kinds_set_type_and_base_class() {
    let form = FormBuilder::new();
    let cases = [
        (render(form.password("pw", "Password")), "password", "form-control"),
        (render(form.email("mail", "Mail")), "email", "form-control"),
        (render(form.number("age", "Age")), "number", "form-control"),
        (render(form.range("vol", "Volume")), "range", "form-control-range"),
        (render(form.file("doc", "Document")), "file", "form-control-file"),
    ];
    for (html, ty, class) in cases {
        assert!(html.contains(&format!(r#"type="{ty}""#)), "{html}");
        assert!(html.contains(&format!(r#"class="{class}""#)), "{html}");
    }
}

#[test]
fn email_with_error_shows_feedback() {
    let form = form_with_errors(&[("email", "Enter a valid email address.")]);
    let html = render(form.email("email", "Email").value("nope"));
    assert!(html.contains(r#"class="form-control is-invalid""#));
    assert!(html.contains(r#"class="invalid-feedback""#));
    assert!(html.contains("Enter a valid email address."));
}

#[test]
fn field_without_error_is_valid_after_validation() {
    let form = form_with_errors(&[("email", "Required.")]);
    let html = render(form.text("name", "Name"));
    assert!(html.contains(r#"class="form-control is-valid""#));
    assert!(!html.contains("invalid-feedback"));
}

#[test]
fn help_text_links_to_control() {
    let form = FormBuilder::new();
    let html = render(form.text("name", "Name").help("Your full name"));
    assert!(html.contains(r#"aria-describedby="help-name""#));
    assert!(html.contains(r#"id="help-name""#));
    assert!(html.contains(r#"class="form-text text-muted""#));
    assert!(html.contains("Your full name"));
}

#[test]
fn old_input_beats_explicit_value_and_record() {
    let mut form = form_with_old_input(json!({"name": "old"}));
    form.fill(&json!({"name": "record", "email": "a@b.c"}));

    let html = render(form.text("name", "Name").value("explicit"));
    assert!(html.contains(r#"value="old""#));

    // Once any old input exists, fields missing from it render empty.
    let html = render(form.text("email", "Email"));
    assert!(!html.contains("value="));
}

#[test]
fn empty_old_input_falls_back_to_record() {
    let mut form = form_with_old_input(json!({}));
    form.fill(&json!({"name": "record"}));
    let html = render(form.text("name", "Name"));
    assert!(html.contains(r#"value="record""#));
}

#[test]
fn id_prefix_and_explicit_id() {
    let mut form = FormBuilder::new();
    form.id_prefix("user-");
    let html = render(form.text("name", "Name"));
    assert!(html.contains(r#"id="user-name""#));
    assert!(html.contains(r#"<label for="user-name">"#));

    let html = render(form.text("name", "Name").id("custom"));
    assert!(html.contains(r#"id="user-custom""#));
}

#[test]
fn flags_render_bare() {
    let form = FormBuilder::new();
    let html = render(
        form.text("code", "Code")
            .readonly(true)
            .disabled(true)
            .required(true)
            .placeholder("ABC-123"),
    );
    assert!(html.contains(r#"placeholder="ABC-123""#));
    assert!(html.contains(" readonly disabled required>"));
}

#[test]
fn size_and_custom_classes() {
    let form = FormBuilder::new();
    let html = render(
        form.text("q", "Search")
            .lg()
            .with_class("search wide")
            .with_class_on_wrapper("mb-0")
            .with_class_on_label("font-weight-bold"),
    );
    assert!(html.starts_with(r#"<div class="form-group mb-0">"#));
    assert!(html.contains(r#"<label class="font-weight-bold" for="q">"#));
    assert!(html.contains(r#"class="form-control search wide form-control-lg""#));
}

#[test]
fn textarea_escapes_content() {
    let form = FormBuilder::new();
    let html = render(form.textarea("bio", "Bio").value("<b>hi</b>"));
    assert!(html.contains(r#"<textarea rows="3" name="bio""#));
    assert!(html.contains("&lt;b&gt;hi&lt;/b&gt;</textarea>"));
}

#[test]
fn hidden_input_is_bare() {
    let form = FormBuilder::new();
    let html = render(form.hidden("token").value("xyz").with_class("ignored"));
    assert_eq!(
        html,
        r#"<input value="xyz" type="hidden" name="token" id="token">"#
    );
}

#[test]
fn labels_translate_with_locale() {
    let mut form = FormBuilder::new().with_translator(translations(&[("users.name", "Nom")]));
    form.locale("users");
    let html = render(form.text("name", true));
    assert!(html.contains(r#"<label for="name">Nom</label>"#));

    let html = render(form.text("name", false));
    assert!(!html.contains("<label"));
}

#[test]
fn data_attributes_and_autocomplete() {
    let form = FormBuilder::new();
    let html = render(
        form.text("city", "City")
            .data("lookup", "cities")
            .autocomplete(true),
    );
    assert!(html.starts_with(r#"<div class="form-group"><label for="city">City</label><input data-lookup="cities" "#));
    assert!(html.contains(r#"autocomplete="on""#));
}
