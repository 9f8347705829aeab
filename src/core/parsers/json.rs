use serde_json::Value;

/// Decode JSON content, keeping key order as written.
pub fn parse_json(content: &str) -> Result<Value, String> {
    // Tolerate a UTF-8 BOM written by some editors.
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    serde_json::from_str(content).map_err(|e| e.to_string())
}
