//! Option lists for select inputs.

use indexmap::IndexMap;
use serde_json::Value;

use super::value::{display, is_truthy};
use crate::error::{FormError, Result};

/// Ordered `value => label` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectOptions(IndexMap<String, String>);

impl SelectOptions {
    /// Creates an empty option list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds options from `(value, label)` pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }

    /// Normalizes loosely-typed options.
    ///
    /// Empty values (`null`, `false`, `""`, `[]`, `{}`) give an empty list.
    /// Objects map keys to labels; arrays use their indexes as keys. Any
    /// other non-empty value is rejected.
    pub fn from_value(options: &Value) -> Result<Self> {
        match options {
            Value::Object(map) => Ok(Self(
                map.iter()
                    .map(|(k, v)| (k.clone(), display(v).unwrap_or_default()))
                    .collect(),
            )),
            Value::Array(items) => Ok(Self(
                items
                    .iter()
                    .enumerate()
                    .map(|(i, v)| (i.to_string(), display(v).unwrap_or_default()))
                    .collect(),
            )),
            other if !is_truthy(other) => Ok(Self::new()),
            other => Err(FormError::InvalidOptions(format!(
                "expected a list or a map of options, got {other}"
            ))),
        }
    }

    /// Builds options from a list of records, reading the option value and
    /// label from the named fields of each record.
    pub fn from_records(records: &Value, value_field: &str, label_field: &str) -> Result<Self> {
        let value_field = value_field.trim();
        let label_field = label_field.trim();
        if value_field.is_empty() || label_field.is_empty() {
            return Err(FormError::InvalidOptions(
                "record options need both a value field and a label field".to_string(),
            ));
        }

        let Value::Array(items) = records else {
            return Err(FormError::InvalidOptions(format!(
                "expected a list of records, got {records}"
            )));
        };

        let mut options = IndexMap::with_capacity(items.len());
        for record in items {
            let field = |name: &str| record.get(name).and_then(display);
            match (field(value_field), field(label_field)) {
                (Some(value), Some(label)) => {
                    options.insert(value, label);
                }
                _ => {
                    return Err(FormError::InvalidOptions(format!(
                        "record {record} lacks `{value_field}` or `{label_field}`"
                    )))
                }
            }
        }
        Ok(Self(options))
    }

    /// Returns the number of options.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether there are no options.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates `(value, label)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SelectOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for SelectOptions {
    fn from(pairs: [(K, V); N]) -> Self {
        Self::from_pairs(pairs)
    }
}

impl<K: Into<String>, V: Into<String>> From<Vec<(K, V)>> for SelectOptions {
    fn from(pairs: Vec<(K, V)>) -> Self {
        Self::from_pairs(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_object_keeps_order() {
        let options = SelectOptions::from_value(&json!({"z": "Zed", "a": "Ay", "1": 1})).unwrap();
        let pairs: Vec<_> = options.iter().collect();
        assert_eq!(pairs, vec![("z", "Zed"), ("a", "Ay"), ("1", "1")]);
    }

    #[test]
    fn test_from_value_array_uses_indexes() {
        let options = SelectOptions::from_value(&json!(["Red", "Green"])).unwrap();
        let pairs: Vec<_> = options.iter().collect();
        assert_eq!(pairs, vec![("0", "Red"), ("1", "Green")]);
    }

    #[test]
    fn test_from_value_empty_and_invalid() {
        assert!(SelectOptions::from_value(&json!(null)).unwrap().is_empty());
        assert!(SelectOptions::from_value(&json!("")).unwrap().is_empty());
        assert!(matches!(
            SelectOptions::from_value(&json!("red")),
            Err(FormError::InvalidOptions(_))
        ));
        assert!(matches!(
            SelectOptions::from_value(&json!(7)),
            Err(FormError::InvalidOptions(_))
        ));
    }

    #[test]
    fn test_from_records() {
        let records = json!([
            {"id": 1, "name": "Admin"},
            {"id": 2, "name": "Editor"},
        ]);
        let options = SelectOptions::from_records(&records, "id", "name").unwrap();
        let pairs: Vec<_> = options.iter().collect();
        assert_eq!(pairs, vec![("1", "Admin"), ("2", "Editor")]);

        assert!(SelectOptions::from_records(&records, "id", "title").is_err());
        assert!(SelectOptions::from_records(&records, "", "name").is_err());
        assert!(SelectOptions::from_records(&json!({"id": 1}), "id", "name").is_err());
    }
}
