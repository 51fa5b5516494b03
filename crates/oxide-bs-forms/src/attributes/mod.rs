//! Ordered HTML attribute container.
//!
//! [`AttributeSet`] keeps attributes in insertion order, normalizes names,
//! and treats `class` and `style` specially when they are written through
//! [`AttributeSet::set`]:
//!
//! ```
//! use oxide_bs_forms::AttributeSet;
//!
//! let mut attrs = AttributeSet::from(r#"id="name" disabled"#);
//! attrs.set("class", "form-control  is-valid form-control");
//! attrs.set("style", "width: 10px; color: red");
//!
//! assert_eq!(attrs.get("class").as_deref(), Some("form-control is-valid "));
//! assert_eq!(
//!     attrs.render(),
//!     r#"id="name" disabled class="form-control is-valid" style="color:red;width:10px""#
//! );
//! ```

mod parse;
mod style;

pub use parse::{decode_entities, parse_attributes};
pub use style::{explode_style, implode_style, normalize_style};

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use indexmap::IndexMap;

/// The value held by one attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// Rendered as `name="value"`.
    Text(String),
    /// The "no value" marker: rendered as a bare `name`, or left out
    /// entirely when the set suppresses empty attributes.
    Null,
    /// A boolean attribute such as `checked`: always rendered bare.
    Flag,
}

impl AttrValue {
    /// Returns the text, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Null | Self::Flag => None,
        }
    }

    fn trimmed(self) -> Self {
        match self {
            Self::Text(s) => Self::Text(s.trim().to_string()),
            other => other,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl<T: Into<String>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, |v| Self::Text(v.into()))
    }
}

/// Ordered, case-insensitive map of HTML attributes for one tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSet {
    data: IndexMap<String, AttrValue>,
    /// When true, [`AttrValue::Null`] attributes are left out of the output.
    pub suppress_empty: bool,
}

impl AttributeSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty set that suppresses [`AttrValue::Null`] attributes.
    pub fn suppressing_empty() -> Self {
        Self {
            data: IndexMap::new(),
            suppress_empty: true,
        }
    }

    /// Parses a raw attribute fragment. Unreadable input yields an empty set.
    pub fn from_attribute_string(input: &str) -> Self {
        let parsed = parse_attributes(input);
        if parsed.is_empty() && !input.trim().is_empty() {
            tracing::debug!(input, "No attributes found in fragment");
        }
        Self {
            data: parsed.into_iter().collect(),
            suppress_empty: false,
        }
    }

    /// Populates a set from name/value pairs.
    ///
    /// Names are normalized and text values trimmed. `class` and `style`
    /// are stored as given.
    pub fn from_mapping<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<AttrValue>,
    {
        Self {
            data: pairs
                .into_iter()
                .map(|(k, v)| (normalize_key(k.as_ref()), v.into().trimmed()))
                .collect(),
            suppress_empty: false,
        }
    }

    /// Raw union with `other`: its values overwrite ours key by key.
    ///
    /// This is a bulk import. The `class`/`style` normalization applied by
    /// [`set`](Self::set) is not re-run, so merged values land verbatim.
    pub fn merge(&mut self, other: &AttributeSet) {
        for (key, value) in &other.data {
            self.data.insert(key.clone(), value.clone());
        }
    }

    /// Sets an attribute, normalizing `class` and `style` text values.
    ///
    /// [`AttrValue::Null`] and [`AttrValue::Flag`] are stored unchanged for
    /// every key.
    pub fn set(&mut self, key: &str, value: impl Into<AttrValue>) {
        let key = normalize_key(key);
        match value.into() {
            AttrValue::Text(text) if key == "class" => self.set_class(&text),
            AttrValue::Text(text) if key == "style" => self.set_style(&text),
            value => {
                self.data.insert(key, value);
            }
        }
    }

    /// Sets `class` to the unique, non-empty tokens of `value` in
    /// first-seen order.
    pub fn set_class(&mut self, value: &str) {
        let mut tokens: Vec<&str> = Vec::new();
        for token in value.split_whitespace() {
            if !tokens.contains(&token) {
                tokens.push(token);
            }
        }
        self.data
            .insert("class".to_string(), AttrValue::Text(tokens.join(" ")));
    }

    /// Appends class tokens to the current `class`.
    pub fn add_class(&mut self, value: &str) {
        let current = self.get("class").unwrap_or_default();
        self.set_class(&format!("{current}{value}"));
    }

    /// Sets `style` to the sorted declarations parsed from `value`.
    pub fn set_style(&mut self, value: &str) {
        self.data
            .insert("style".to_string(), AttrValue::Text(normalize_style(value)));
    }

    /// Sets an attribute without any `class`/`style` handling.
    pub fn set_generic(&mut self, key: &str, value: impl Into<AttrValue>) {
        self.data.insert(normalize_key(key), value.into());
    }

    /// Returns an attribute's text.
    ///
    /// A non-blank `class` comes back with a trailing space and a non-blank
    /// `style` with a trailing `;`, so callers can append without checking.
    /// Missing attributes and non-text values return `None`.
    pub fn get(&self, key: &str) -> Option<String> {
        let key = normalize_key(key);
        let text = self.data.get(&key)?.as_text()?;
        if text.trim().is_empty() {
            return None;
        }
        let mut out = text.to_string();
        match key.as_str() {
            "class" => out.push(' '),
            "style" => out.push(';'),
            _ => {}
        }
        Some(out)
    }

    /// Returns the stored value without any decoration.
    pub fn get_raw(&self, key: &str) -> Option<&AttrValue> {
        self.data.get(&normalize_key(key))
    }

    /// Returns whether the attribute is present, whatever its value.
    pub fn has(&self, key: &str) -> bool {
        self.data.contains_key(&normalize_key(key))
    }

    /// Removes an attribute, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
        self.data.shift_remove(&normalize_key(key))
    }

    /// Returns the number of attributes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns whether the set holds no attributes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterates attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.data.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Serializes the set as an HTML attribute string.
    pub fn render(&self) -> String {
        self.data
            .iter()
            .filter_map(|(key, value)| match value {
                AttrValue::Text(text) => Some(format!(r#"{key}="{}""#, html_escape(text))),
                AttrValue::Null if self.suppress_empty => None,
                AttrValue::Null | AttrValue::Flag => Some(key.clone()),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Builds an attribute set from `attrs` and renders it in one go.
pub fn render_attrs(attrs: impl Into<AttributeSet>) -> String {
    attrs.into().render()
}

impl fmt::Display for AttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl FromStr for AttributeSet {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_attribute_string(s))
    }
}

impl From<&str> for AttributeSet {
    fn from(value: &str) -> Self {
        Self::from_attribute_string(value)
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for AttributeSet
where
    K: AsRef<str>,
    V: Into<AttrValue>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        Self::from_mapping(pairs)
    }
}

impl<K, V> FromIterator<(K, V)> for AttributeSet
where
    K: AsRef<str>,
    V: Into<AttrValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_mapping(iter)
    }
}

impl<K, V> Extend<(K, V)> for AttributeSet
where
    K: AsRef<str>,
    V: Into<AttrValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key.as_ref(), value);
        }
    }
}

/// Subscript reads return the stored [`AttrValue`] as is. Use
/// [`AttributeSet::get`] for the `class`/`style` trailing separators.
impl Index<&str> for AttributeSet {
    type Output = AttrValue;

    /// # Panics
    ///
    /// Panics if the attribute is not present.
    fn index(&self, key: &str) -> &AttrValue {
        match self.get_raw(key) {
            Some(value) => value,
            None => panic!("attribute `{key}` is not set"),
        }
    }
}

impl<'a> IntoIterator for &'a AttributeSet {
    type Item = (&'a String, &'a AttrValue);
    type IntoIter = indexmap::map::Iter<'a, String, AttrValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_tokens_are_unique_in_first_seen_order() {
        let mut attrs = AttributeSet::new();
        attrs.set("class", "b a  b");
        attrs.add_class("c a d");
        assert_eq!(attrs.get_raw("class"), Some(&AttrValue::from("b a c d")));
    }

    #[test]
    fn test_get_appends_separators() {
        let mut attrs = AttributeSet::new();
        attrs.set("class", "btn");
        attrs.set("style", "color:red");
        attrs.set("title", "Hi");
        assert_eq!(attrs.get("class").as_deref(), Some("btn "));
        assert_eq!(attrs.get("style").as_deref(), Some("color:red;"));
        assert_eq!(attrs.get("title").as_deref(), Some("Hi"));
    }

    #[test]
    fn test_get_blank_or_missing_is_none() {
        let mut attrs = AttributeSet::new();
        attrs.set("class", "   ");
        assert_eq!(attrs.get("class"), None);
        assert_eq!(attrs.get("style"), None);
        assert!(attrs.has("class"));
    }

    #[test]
    fn test_keys_are_case_insensitive() {
        let mut attrs = AttributeSet::new();
        attrs.set(" Data-Role ", "menu");
        assert!(attrs.has("data-role"));
        assert_eq!(attrs["DATA-ROLE"], AttrValue::from("menu"));
        assert_eq!(attrs.remove("data-ROLE"), Some(AttrValue::from("menu")));
        assert!(attrs.is_empty());
    }

    #[test]
    fn test_merge_does_not_normalize() {
        let mut base = AttributeSet::from([("class", "a")]);
        let other = AttributeSet::from_mapping([("class", "b  b"), ("id", "x")]);
        base.merge(&other);
        assert_eq!(base.get_raw("class"), Some(&AttrValue::from("b  b")));
        assert_eq!(base.render(), r#"class="b  b" id="x""#);
    }

    #[test]
    fn test_null_rendering_depends_on_suppress_empty() {
        let mut attrs = AttributeSet::new();
        attrs.set("id", None::<String>);
        attrs.set("checked", AttrValue::Flag);
        assert_eq!(attrs.render(), "id checked");

        attrs.suppress_empty = true;
        assert_eq!(attrs.render(), "checked");
    }

    #[test]
    fn test_render_escapes_values() {
        let attrs = AttributeSet::from([("title", r#"<"a" & 'b'>"#)]);
        assert_eq!(
            attrs.render(),
            r#"title="&lt;&quot;a&quot; &amp; &#x27;b&#x27;&gt;""#
        );
        assert_eq!(AttributeSet::new().render(), "");
    }

    #[test]
    fn test_extend_goes_through_set() {
        let mut attrs = AttributeSet::new();
        attrs.extend([("CLASS", "x x y"), ("style", "b:1;a:2")]);
        assert_eq!(attrs.render(), r#"class="x y" style="a:2;b:1""#);
    }

    #[test]
    fn test_render_attrs_helper() {
        assert_eq!(render_attrs(r#"href="/" hidden"#), r#"href="/" hidden"#);
    }

    #[test]
    fn test_index_returns_raw_value() {
        let mut attrs = AttributeSet::new();
        attrs.set("class", "btn");
        attrs.set("style", "color: red");
        assert_eq!(attrs["class"], AttrValue::from("btn"));
        assert_eq!(attrs["style"], AttrValue::from("color:red"));
        assert_eq!(attrs.get("class").as_deref(), Some("btn "));
    }

    #[test]
    #[should_panic(expected = "attribute `missing` is not set")]
    fn test_index_panics_on_missing() {
        let _ = &AttributeSet::new()["missing"];
    }
}
