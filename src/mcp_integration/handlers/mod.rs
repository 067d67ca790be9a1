//! Tool execution handlers.
//!
//! One module per resource family, mirroring the schema modules in
//! `tools/`. Handlers are free async functions taking the server and the raw
//! JSON arguments; they never fail at the protocol level, since every
//! problem becomes an error [`ToolResult`] the agent can read.

pub mod advisor;
pub mod alerting;
pub mod contexts;
pub mod devices;
pub mod interfaces;
pub mod org;
pub mod synthetics;
pub mod system_info;

use crate::mcp_integration::core::ToolResult;
use serde_json::Value;

/// Pretty-print a payload for the agent; falls back to the compact form if
/// pretty-printing fails.
pub(crate) fn format_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Extract a required, non-empty string argument, or the error result to
/// hand back to the agent.
pub(crate) fn require_str<'a>(arguments: &'a Value, name: &str) -> Result<&'a str, ToolResult> {
    optional_str(arguments, name)
        .ok_or_else(|| ToolResult::error(format!("Missing required parameter: {name}")))
}

/// Extract an optional string argument; absent and empty are equivalent.
pub(crate) fn optional_str<'a>(arguments: &'a Value, name: &str) -> Option<&'a str> {
    arguments
        .get(name)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Truncate to a maximum number of characters (not bytes, so multi-byte
/// names cannot split a code point).
pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        text.chars().take(max_chars).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn require_str_rejects_missing_and_empty() {
        let arguments = json!({"present": "x", "empty": ""});
        assert_eq!(require_str(&arguments, "present").unwrap(), "x");
        assert!(require_str(&arguments, "empty").is_err());
        assert!(require_str(&arguments, "absent").is_err());
    }

    #[test]
    fn optional_str_trims_whitespace() {
        let arguments = json!({"padded": "  value  ", "blank": "   "});
        assert_eq!(optional_str(&arguments, "padded"), Some("value"));
        assert_eq!(optional_str(&arguments, "blank"), None);
    }

    #[test]
    fn truncate_is_char_safe() {
        assert_eq!(truncate("abcdef", 4), "abcd");
        assert_eq!(truncate("ab", 4), "ab");
        assert_eq!(truncate("ü-link-äöü", 6), "ü-link");
    }
}
