//! Caller-name extraction strategies.
//!
//! The caller-ID endpoint answers in whatever shape it feels like: JSON with
//! one of several key spellings, JSON-ish text, a labeled line (Arabic or
//! English), or a bare HTML table. Strategies are tried in order and the
//! first hit wins. Extracted names are entity-unescaped and, when they carry
//! `\uXXXX` sequences, decoded as such.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use serde_json::Value;

/// JSON keys that may carry the caller name, in lookup order.
const NAME_KEYS: &[&str] = &["name", "Name", "callerName", "caller_name", "caller"];

static RAW_NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)"name"\s*:\s*"([^"]+)""#).expect("raw-name regex is hardcoded and valid")
});

static LABELED_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:الاسم|(?i:name))\s*[:\-]\s*([^<>\r\n]{2,60})")
        .expect("labeled-field regex is hardcoded and valid")
});

/// Extract a caller name from decoded response text.
///
/// Returns `None` when no strategy matches or the match is empty after
/// trimming.
#[must_use]
pub fn extract_name(text: &str) -> Option<String> {
    if let Ok(json) = serde_json::from_str::<Value>(text) {
        if let Some(name) = name_from_json(&json) {
            return finish(&name);
        }
    }

    if let Some(captures) = RAW_NAME_PATTERN.captures(text) {
        return finish(captures.get(1)?.as_str());
    }

    if let Some(captures) = LABELED_PATTERN.captures(text) {
        return finish(captures.get(1)?.as_str());
    }

    if let Some(name) = name_from_table(text) {
        return finish(&name);
    }

    None
}

/// Search top-level keys first, then one level into nested object values.
fn name_from_json(json: &Value) -> Option<String> {
    let object = json.as_object()?;

    for key in NAME_KEYS {
        if let Some(value) = object.get(*key).and_then(Value::as_str) {
            if !value.trim().is_empty() {
                return Some(value.to_string());
            }
        }
    }

    for nested in object.values().filter_map(Value::as_object) {
        for key in NAME_KEYS {
            if let Some(value) = nested.get(*key).and_then(Value::as_str) {
                if !value.trim().is_empty() {
                    return Some(value.to_string());
                }
            }
        }
    }

    None
}

/// Two-cell table pattern: a label cell mentioning "name"/"الاسم" followed
/// by a value cell.
fn name_from_table(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let cell_selector = Selector::parse("td").ok()?;
    let cells: Vec<_> = document.select(&cell_selector).collect();

    for pair in cells.windows(2) {
        let label = pair[0].text().collect::<String>().trim().to_lowercase();
        if label.contains("name") || label.contains("الاسم") {
            let value = pair[1].text().collect::<String>().trim().to_string();
            if value.chars().count() >= 2 {
                return Some(value);
            }
        }
    }

    None
}

/// Trim, unescape entities, decode `\uXXXX` runs; empty results become `None`.
fn finish(raw: &str) -> Option<String> {
    let mut name = unescape_entities(raw.trim());
    if name.contains("\\u") {
        name = decode_unicode_escapes(&name);
    }
    let name = name.trim().to_string();
    (!name.is_empty()).then_some(name)
}

fn unescape_entities(s: &str) -> String {
    s.replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

/// Decode JSON-style `\uXXXX` escapes by round-tripping through the JSON
/// parser; anything unparseable is kept as-is.
fn decode_unicode_escapes(s: &str) -> String {
    let quoted = format!("\"{}\"", s.replace('"', "\\\""));
    serde_json::from_str::<String>(&quoted).unwrap_or_else(|_| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_top_level_key() {
        assert_eq!(
            extract_name(r#"{"name":"Ali Hassan","status":"ok"}"#),
            Some("Ali Hassan".to_string())
        );
    }

    #[test]
    fn test_json_nested_key() {
        assert_eq!(
            extract_name(r#"{"status":"ok","data":{"caller_name":"Ali"}}"#),
            Some("Ali".to_string())
        );
    }

    #[test]
    fn test_json_key_spellings() {
        for key in ["name", "Name", "callerName", "caller_name", "caller"] {
            let body = format!(r#"{{"{key}":"Someone"}}"#);
            assert_eq!(extract_name(&body), Some("Someone".to_string()), "{key}");
        }
    }

    #[test]
    fn test_json_empty_value_skipped() {
        assert_eq!(extract_name(r#"{"name":"  ","caller":"Omar"}"#), Some("Omar".to_string()));
    }

    #[test]
    fn test_raw_text_name_pair() {
        let body = r#"<script>var data = {"Name": "Sara K"};</script>"#;
        assert_eq!(extract_name(body), Some("Sara K".to_string()));
    }

    #[test]
    fn test_arabic_labeled_field() {
        assert_eq!(
            extract_name("nonsense الاسم: محمد احمد\nrest"),
            Some("محمد احمد".to_string())
        );
    }

    #[test]
    fn test_english_labeled_field() {
        assert_eq!(
            extract_name("Caller info\nName - John Smith\n"),
            Some("John Smith".to_string())
        );
    }

    #[test]
    fn test_html_table_pattern() {
        let html = "<table><tr><td>الاسم</td><td>محمد</td></tr></table>";
        assert_eq!(extract_name(html), Some("محمد".to_string()));
    }

    #[test]
    fn test_entity_unescape() {
        assert_eq!(
            extract_name(r#"{"name":"Ali &amp; Omar"}"#),
            Some("Ali & Omar".to_string())
        );
    }

    #[test]
    fn test_unicode_escape_decode() {
        let body = r#"prefix "name": "\u0645\u062d\u0645\u062f" suffix"#;
        assert_eq!(extract_name(body), Some("محمد".to_string()));
    }

    #[test]
    fn test_no_match_returns_none() {
        assert_eq!(extract_name("completely unrelated text"), None);
        assert_eq!(extract_name(""), None);
        assert_eq!(extract_name(r#"{"status":"ok"}"#), None);
    }
}
