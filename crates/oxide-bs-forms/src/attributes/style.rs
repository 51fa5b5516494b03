//! Inline `style` declaration handling.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

static DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([\w-]+)\s*:\s*([^;]+)\s*;?").expect("style declaration regex is valid")
});

/// Splits a style string into declarations keyed by property.
///
/// Parsing is tolerant: anything that does not look like `prop: value`
/// is skipped, and a repeated property keeps its last value.
pub fn explode_style(css: &str) -> BTreeMap<String, String> {
    DECLARATION
        .captures_iter(css)
        .map(|caps| {
            (
                caps[1].trim().to_lowercase(),
                caps[2].trim().to_string(),
            )
        })
        .collect()
}

/// Joins declarations back into `prop:value;prop:value`, sorted by property.
pub fn implode_style(declarations: &BTreeMap<String, String>) -> String {
    declarations
        .iter()
        .map(|(prop, value)| format!("{prop}:{value}"))
        .collect::<Vec<_>>()
        .join(";")
}

/// Normalizes a style string into its canonical sorted form.
pub fn normalize_style(css: &str) -> String {
    implode_style(&explode_style(css))
}
