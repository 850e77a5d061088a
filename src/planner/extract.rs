use once_cell::sync::Lazy;
use regex::Regex;

static FENCED_JSON: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```(?:json)?\s*(\{.*?\})\s*```").expect("fenced json pattern is valid")
});

/// Pulls a JSON object out of a markdown code fence if the model wrapped its
/// answer in one. Only the first fence is considered; without a fence the
/// text is returned as-is.
pub fn extract_json_payload(text: &str) -> &str {
    FENCED_JSON
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or(text)
}
