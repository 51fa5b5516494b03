//! Collaborators supplied by the host application.
//!
//! The builder never reaches for ambient framework state. Everything it
//! needs from the request (CSRF tokens, resubmitted input, validation
//! results, URLs, translations) comes through the traits in this module.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::error::{FormError, Result, ValidationErrors};

/// Produces the markup inlined right after an opening `<form>` tag.
pub trait CsrfProvider: Send + Sync {
    /// Returns the CSRF fragment, inserted verbatim.
    fn csrf_field(&self) -> String;
}

/// Produces the hidden field that carries a spoofed HTTP method.
pub trait MethodOverride: Send + Sync {
    /// Returns the override fragment for `method` (e.g. `put`).
    fn method_field(&self, method: &str) -> String;
}

/// Previously submitted input, used to repopulate a form after a failed
/// submission.
pub trait OldInput: Send + Sync {
    /// Returns whether any resubmitted input exists at all.
    fn has_any(&self) -> bool;

    /// Returns the resubmitted value for a field.
    fn get(&self, name: &str) -> Option<Value>;
}

/// Turns paths and route names into URLs.
pub trait UrlResolver: Send + Sync {
    /// Resolves a path to a URL.
    fn url(&self, path: &str) -> String;

    /// Resolves a named route with its parameters.
    fn route(&self, name: &str, params: &[(&str, &str)]) -> Result<String>;
}

/// Looks up display strings by dotted key.
pub trait Translator: Send + Sync {
    /// Returns the translation for `key`, or `key` itself when unknown.
    fn translate(&self, key: &str) -> String;
}

/// Results of the last validation pass.
pub trait ErrorStore: Send + Sync {
    /// Returns whether a validation pass has occurred.
    fn has_run(&self) -> bool {
        true
    }

    /// Returns the first error message for a field.
    fn first(&self, field: &str) -> Option<&str>;
}

/// Emits no CSRF markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCsrf;

impl CsrfProvider for NoCsrf {
    fn csrf_field(&self) -> String {
        String::new()
    }
}

/// Emits a hidden `_token` input holding a fixed token.
#[derive(Debug, Clone)]
pub struct CsrfToken(pub String);

impl CsrfProvider for CsrfToken {
    fn csrf_field(&self) -> String {
        format!(
            r#"<input type="hidden" name="_token" value="{}">"#,
            crate::attributes::html_escape(&self.0)
        )
    }
}

impl<F> CsrfProvider for F
where
    F: Fn() -> String + Send + Sync,
{
    fn csrf_field(&self) -> String {
        self()
    }
}

/// Emits `<input type="hidden" name="_method" value="PUT">`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HiddenMethodField;

impl MethodOverride for HiddenMethodField {
    fn method_field(&self, method: &str) -> String {
        format!(
            r#"<input type="hidden" name="_method" value="{}">"#,
            method.to_uppercase()
        )
    }
}

impl OldInput for HashMap<String, Value> {
    fn has_any(&self) -> bool {
        !self.is_empty()
    }

    fn get(&self, name: &str) -> Option<Value> {
        HashMap::get(self, name).cloned()
    }
}

impl OldInput for Map<String, Value> {
    fn has_any(&self) -> bool {
        !self.is_empty()
    }

    fn get(&self, name: &str) -> Option<Value> {
        Map::get(self, name).cloned()
    }
}

/// Returns paths unchanged and knows no routes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughUrls;

impl UrlResolver for PassthroughUrls {
    fn url(&self, path: &str) -> String {
        path.to_string()
    }

    fn route(&self, name: &str, _params: &[(&str, &str)]) -> Result<String> {
        Err(FormError::UnknownRoute(name.to_string()))
    }
}

/// Named route patterns like `/posts/{id}`, reversed into paths.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    base_url: String,
    routes: HashMap<String, String>,
}

impl RouteTable {
    /// Creates an empty table whose URLs are relative.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefixes every generated URL with `base_url`.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Registers a named pattern.
    #[must_use]
    pub fn named_route(mut self, name: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.routes.insert(name.into(), pattern.into());
        self
    }

    fn reverse(pattern: &str, params: &[(&str, &str)]) -> Option<String> {
        let mut path = String::new();

        for part in pattern.split('/').filter(|s| !s.is_empty()) {
            path.push('/');
            match part.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                Some(param) => {
                    let name = param.trim_start_matches('*');
                    let (_, value) = params.iter().find(|(k, _)| *k == name)?;
                    path.push_str(value);
                }
                None => path.push_str(part),
            }
        }

        if path.is_empty() {
            path.push('/');
        }

        Some(path)
    }
}

impl UrlResolver for RouteTable {
    fn url(&self, path: &str) -> String {
        if path.contains("://") {
            return path.to_string();
        }
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn route(&self, name: &str, params: &[(&str, &str)]) -> Result<String> {
        let pattern = self
            .routes
            .get(name)
            .ok_or_else(|| FormError::UnknownRoute(name.to_string()))?;
        let path = Self::reverse(pattern, params).ok_or_else(|| {
            FormError::UnknownRoute(format!("{name} (missing route parameters)"))
        })?;
        Ok(format!("{}{path}", self.base_url))
    }
}

/// Returns every key untranslated.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyTranslator;

impl Translator for KeyTranslator {
    fn translate(&self, key: &str) -> String {
        key.to_string()
    }
}

impl Translator for HashMap<String, String> {
    fn translate(&self, key: &str) -> String {
        HashMap::get(self, key).cloned().unwrap_or_else(|| key.to_string())
    }
}

impl<F> Translator for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn translate(&self, key: &str) -> String {
        self(key)
    }
}

impl ErrorStore for ValidationErrors {
    fn first(&self, field: &str) -> Option<&str> {
        ValidationErrors::first(self, field)
    }
}

/// The full set of collaborators a [`FormBuilder`](crate::FormBuilder) uses.
pub struct Services {
    /// CSRF fragment provider.
    pub csrf: Box<dyn CsrfProvider>,
    /// Method-override fragment provider.
    pub method_override: Box<dyn MethodOverride>,
    /// Resubmitted input, if the request carries any.
    pub old_input: Option<Box<dyn OldInput>>,
    /// URL and route resolver.
    pub urls: Box<dyn UrlResolver>,
    /// Translation lookup, consulted only when a locale is set.
    pub translator: Box<dyn Translator>,
    /// Validation results; `None` means validation has not run.
    pub errors: Option<Box<dyn ErrorStore>>,
}

impl Default for Services {
    fn default() -> Self {
        Self {
            csrf: Box::new(NoCsrf),
            method_override: Box::new(HiddenMethodField),
            old_input: None,
            urls: Box::new(PassthroughUrls),
            translator: Box::new(KeyTranslator),
            errors: None,
        }
    }
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services")
            .field("old_input", &self.old_input.is_some())
            .field("errors", &self.errors.is_some())
            .finish_non_exhaustive()
    }
}
