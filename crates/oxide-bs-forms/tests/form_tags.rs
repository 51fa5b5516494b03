//! Tests for opening and closing forms and fieldsets, CSRF and method
//! override fragments, and URL resolution.

mod common;
use common::*;

use oxide_bs_forms::{FormBuilder, FormError, RouteTable};

#[test]
fn put_form_posts_with_override() {
    let mut form = form_with_csrf("tok");
    form.put();
    let html = render(form.open().url("/users/1"));
    assert_eq!(
        html,
        concat!(
            r#"<form action="/users/1" method="post" autocomplete="off">"#,
            r#"<input type="hidden" name="_token" value="tok">"#,
            r#"<input type="hidden" name="_method" value="PUT">"#
        )
    );
}

#[test]
fn get_form_has_no_csrf() {
    let mut form = form_with_csrf("tok");
    form.get();
    let html = render(form.open().url("/search"));
    assert_eq!(html, r#"<form action="/search" method="get" autocomplete="off">"#);
}

#[test]
fn multipart_form() {
    let mut form = FormBuilder::new();
    form.multipart(true);
    let html = render(form.open());
    assert_eq!(
        html,
        r#"<form method="post" enctype="multipart/form-data" autocomplete="off">"#
    );
}

#[test]
fn unknown_method_submits_as_post() {
    let mut form = FormBuilder::new();
    form.method("PURGE");
    let html = render(form.open());
    assert!(html.starts_with(r#"<form method="post""#));
    assert!(html.ends_with(r#"value="PURGE">"#));
}

#[test]
fn route_resolves_action() {
    let form = FormBuilder::new().with_urls(
        RouteTable::new()
            .base_url("https://example.com")
            .named_route("users.update", "/users/{id}"),
    );
    let html = form
        .open()
        .route("users.update", &[("id", "42")])
        .unwrap()
        .render()
        .unwrap();
    assert!(html.contains(r#"action="https://example.com/users/42""#));

    let err = form.open().route("users.missing", &[]).unwrap_err();
    assert!(matches!(err, FormError::UnknownRoute(_)));
}

#[test]
fn fieldset_with_translated_legend() {
    let mut form = FormBuilder::new().with_translator(|key: &str| key.to_uppercase());
    form.locale("account");
    let html = render(form.fieldset_open(Some("details")).name("details"));
    assert!(html.starts_with(r#"<fieldset name="details" id="details">"#));
    assert!(html.contains("ACCOUNT.DETAILS"));
    assert!(html.ends_with("</legend>"));
    assert_eq!(form.fieldset_close(), "</fieldset>");
}

#[test]
fn custom_csrf_closure() {
    let form = FormBuilder::new().with_csrf(|| r#"<meta name="csrf" content="x">"#.to_string());
    let html = render(form.open());
    assert!(html.ends_with(r#"<meta name="csrf" content="x">"#));
}
