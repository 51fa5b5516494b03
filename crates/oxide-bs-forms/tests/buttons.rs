//! Tests for buttons and button-styled links.

mod common;
use common::*;

use oxide_bs_forms::{FormBuilder, RouteTable};

#[test]
fn default_submit_button() {
    let form = FormBuilder::new();
    assert_eq!(
        render(form.submit("Save")),
        r#"<button class="btn btn-primary" type="submit">Save</button>"#
    );
}

#[test]
fn reset_and_plain_buttons() {
    let form = FormBuilder::new();
    assert_eq!(
        render(form.reset("Clear").secondary().sm()),
        r#"<button class="btn btn-secondary btn-sm" type="reset">Clear</button>"#
    );
    assert_eq!(
        render(form.button("Preview").info().with_class("js-preview")),
        r#"<button class="btn btn-info js-preview" type="button">Preview</button>"#
    );
}

#[test]
fn disabled_button_gets_flag() {
    let form = FormBuilder::new();
    let html = render(form.submit("Wait").disabled(true));
    assert_eq!(
        html,
        r#"<button class="btn btn-primary" type="submit" disabled>Wait</button>"#
    );
}

#[test]
fn anchor_with_url() {
    let form = FormBuilder::new().with_urls(RouteTable::new().base_url("https://example.com/"));
    let html = render(form.anchor("Cancel", Some("/users")).link());
    assert_eq!(
        html,
        r#"<a class="btn btn-link" href="https://example.com/users" role="button">Cancel</a>"#
    );
}

#[test]
fn caption_is_translated_and_escaped() {
    let mut form = FormBuilder::new().with_translator(translations(&[("actions.save", "Save & close")]));
    form.locale("actions");
    assert_eq!(
        render(form.submit("save")),
        r#"<button class="btn btn-primary" type="submit">Save &amp; close</button>"#
    );
}

#[test]
fn every_color_helper() {
    let form = FormBuilder::new();
    let cases = [
        (render(form.button("x").primary()), "btn-primary"),
        (render(form.button("x").success()), "btn-success"),
        (render(form.button("x").danger()), "btn-danger"),
        (render(form.button("x").warning()), "btn-warning"),
        (render(form.button("x").light()), "btn-light"),
        (render(form.button("x").dark()), "btn-dark"),
        (render(form.button("x").color("indigo")), "btn-indigo"),
    ];
    for (html, class) in cases {
        assert!(html.contains(&format!(r#"class="btn {class}""#)), "{html}");
    }
}
