//! Permissive tokenizer for raw HTML attribute fragments.

use std::sync::LazyLock;

use regex::Regex;

use super::AttrValue;

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([^\s"'<>/=]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#)
        .expect("attribute regex is valid")
});

/// Tokenizes a fragment such as `class="a b" data-x='1' disabled`.
///
/// Names are lower-cased and values trimmed and entity-decoded. A bare
/// name becomes [`AttrValue::Flag`]. Repeated names keep the first
/// occurrence, like an HTML parser does. Fragments that cannot be read
/// are skipped.
pub fn parse_attributes(input: &str) -> Vec<(String, AttrValue)> {
    let mut out: Vec<(String, AttrValue)> = Vec::new();

    for caps in ATTRIBUTE.captures_iter(input) {
        let name = caps[1].trim().to_lowercase();
        if out.iter().any(|(existing, _)| *existing == name) {
            continue;
        }

        let value = caps
            .get(2)
            .or_else(|| caps.get(3))
            .or_else(|| caps.get(4))
            .map_or(AttrValue::Flag, |m| {
                AttrValue::Text(decode_entities(m.as_str().trim()))
            });

        out.push((name, value));
    }

    out
}

/// Decodes the character references [`html_escape`](super::html_escape)
/// produces, plus the common numeric apostrophe.
pub fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    s.replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#039;", "'")
        .replace("&#x27;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
