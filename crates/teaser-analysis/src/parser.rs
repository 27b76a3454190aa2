//! Parse generation output into a JSON tree

use serde_json::Value;

/// Parse the raw generation text as JSON.
///
/// Generators sometimes wrap JSON in markdown code fences even in JSON mode;
/// those are stripped first. A parse failure is returned as a plain message
/// and counts against the attempt budget.
pub(crate) fn parse_result(response: &str) -> Result<Value, String> {
    let json_str = strip_fences(response);
    serde_json::from_str(&json_str).map_err(|e| format!("malformed JSON: {}", e))
}

fn strip_fences(response: &str) -> String {
    let trimmed = response.trim();
    if trimmed.starts_with("```") {
        let lines: Vec<&str> = trimmed.lines().collect();
        let inner = &lines[1..lines.len().saturating_sub(1)];
        inner.join("\n")
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_raw_json() {
        let value = parse_result(r#"{"sector": "Tech"}"#).unwrap();
        assert_eq!(value, json!({"sector": "Tech"}));
    }

    #[test]
    fn test_parse_fenced_json() {
        let response = "```json\n{\"sector\": \"Tech\"}\n```";
        let value = parse_result(response).unwrap();
        assert_eq!(value["sector"], json!("Tech"));
    }

    #[test]
    fn test_parse_fence_without_language() {
        let response = "```\n{\"ok\": true}\n```";
        assert_eq!(parse_result(response).unwrap()["ok"], json!(true));
    }

    #[test]
    fn test_parse_garbage_is_error() {
        let result = parse_result("I could not produce JSON today");
        assert!(result.unwrap_err().contains("malformed JSON"));
    }
}
