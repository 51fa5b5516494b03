#![allow(dead_code)]

use std::collections::HashMap;

use oxide_bs_forms::{CsrfToken, Field, FormBuilder, ValidationErrors};
use serde_json::{Map, Value};

pub fn render(field: Field<'_>) -> String {
    field
        .render()
        .unwrap_or_else(|e| panic!("Failed to render field: {e}"))
}

pub fn form_with_csrf(token: &str) -> FormBuilder {
    FormBuilder::new().with_csrf(CsrfToken(token.to_string()))
}

pub fn form_with_errors(errors: &[(&str, &str)]) -> FormBuilder {
    let errors = errors
        .iter()
        .fold(ValidationErrors::new(), |acc, (field, message)| {
            acc.with(field, *message)
        });
    FormBuilder::new().with_errors(errors)
}

pub fn form_with_old_input(old: Value) -> FormBuilder {
    FormBuilder::new().with_old_input(object(old))
}

pub fn translations(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("Expected a JSON object, got {other}"),
    }
}
