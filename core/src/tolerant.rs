//! Tolerant JSON decoding.
//!
//! The bundled data files are hand-edited and regularly carry a trailing
//! comma before a closing `}` or `]`. Those commas are stripped before the
//! text reaches serde_json. Anything else that is malformed still fails.

use crate::error::{DeskError, DeskResult};
use regex::Regex;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::sync::OnceLock;

/// Matches either a complete string literal (kept untouched) or a comma
/// followed by optional whitespace and a closing bracket.
fn trailing_comma_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#""(?:[^"\\]|\\.)*"|,\s*([}\]])"#).expect("trailing comma pattern is valid")
    })
}

/// Remove trailing commas before `}` and `]`, leaving string literals intact.
///
/// Returns the input unchanged (borrowed) when there is nothing to strip.
pub fn clean_json(text: &str) -> Cow<'_, str> {
    let pattern = trailing_comma_pattern();
    // String literals match too; only group 1 marks a comma to drop.
    let mut cleaned = String::new();
    let mut copied = 0;
    for caps in pattern.captures_iter(text) {
        let (Some(whole), Some(close)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        cleaned.push_str(&text[copied..whole.start()]);
        cleaned.push_str(close.as_str());
        copied = whole.end();
    }
    if copied == 0 {
        return Cow::Borrowed(text);
    }
    cleaned.push_str(&text[copied..]);
    Cow::Owned(cleaned)
}

/// Clean `text` and decode it as `T`.
///
/// `resource` names the input in the error message (usually a file name).
pub fn parse_tolerant<T: DeserializeOwned>(resource: &str, text: &str) -> DeskResult<T> {
    let cleaned = clean_json(text);
    serde_json::from_str(&cleaned).map_err(|source| DeskError::Parse {
        resource: resource.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_input_is_borrowed() {
        let text = r#"{"a": [1, 2]}"#;
        assert!(matches!(clean_json(text), Cow::Borrowed(_)));
    }

    #[test]
    fn strips_commas_across_newlines() {
        let text = "[\n  {\"a\": 1,\n  },\n]";
        assert_eq!(clean_json(text), "[\n  {\"a\": 1}]");
    }

    #[test]
    fn escaped_quotes_do_not_end_a_string() {
        let text = r#"{"a": "say \",}\"",}"#;
        assert_eq!(clean_json(text), r#"{"a": "say \",}\""}"#);
    }
}
