//! # oxide-bs-forms
//!
//! Fluent Bootstrap 4 form markup for server-rendered views.
//!
//! This crate provides:
//! - An ordered, normalizing HTML attribute container
//! - A form builder emitting wrapped, labeled and validated controls
//! - Vertical, horizontal and inline layouts
//! - Pluggable CSRF, method-override, URL, translation, old-input and
//!   validation-error collaborators
//!
//! ## Quick Start
//!
//! ```rust
//! use oxide_bs_forms::{FormBuilder, CsrfToken, ValidationErrors};
//! use serde_json::json;
//!
//! let errors = ValidationErrors::new().with("email", "Enter a valid email address.");
//! let mut form = FormBuilder::new()
//!     .with_csrf(CsrfToken("s3cr3t".to_string()))
//!     .with_errors(errors);
//! form.fill(&json!({"username": "bob", "role": "user"}));
//!
//! let mut html = form.open().url("/users").render().unwrap();
//! html += &form.text("username", "Username").render().unwrap();
//! html += &form.email("email", "Email").help("We never share it.").render().unwrap();
//! html += &form
//!     .select("role", "Role", [("admin", "Administrator"), ("user", "User")])
//!     .render()
//!     .unwrap();
//! html += &form.submit("Create").render().unwrap();
//! html += &form.close();
//!
//! assert!(html.contains(r#"value="bob""#));
//! assert!(html.contains(r#"<option value="user" selected>User</option>"#));
//! assert!(html.contains("is-invalid"));
//! ```
//!
//! ## Layouts
//!
//! ```rust
//! use oxide_bs_forms::{FormBuilder, HorizontalLayout};
//!
//! let mut form = FormBuilder::new();
//! form.horizontal_form(Some(HorizontalLayout::new("col-sm-2", "col-sm-10").unwrap()));
//!
//! let html = form.text("name", "Name").render().unwrap();
//! assert!(html.starts_with(r#"<div class="form-group row"><label for="name" class="col-sm-2">"#));
//! ```
//!
//! ## Attributes
//!
//! ```rust
//! use oxide_bs_forms::render_attrs;
//!
//! assert_eq!(
//!     render_attrs(r#"data-id=7 DISABLED title='a &amp; b'"#),
//!     r#"data-id="7" disabled title="a &amp; b""#
//! );
//! ```

pub mod attributes;
mod config;
mod error;
pub mod fields;
mod form;
pub mod services;
mod widgets;

pub use attributes::{html_escape, render_attrs, AttrValue, AttributeSet};
pub use config::{FormConfig, HorizontalLayout};
pub use error::{FormError, Result, ValidationErrors};
pub use fields::{FieldKind, FieldState, Label, SelectOptions};
pub use form::{Field, FormBuilder, FormState};
pub use services::{
    CsrfProvider, CsrfToken, ErrorStore, HiddenMethodField, KeyTranslator, MethodOverride,
    NoCsrf, OldInput, PassthroughUrls, RouteTable, Services, Translator, UrlResolver,
};
