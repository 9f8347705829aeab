//! Renders the messages script from the bundled template.

use super::error::GenerateError;
use super::merge::AggregateMapping;

/// Marker replaced by the runtime library source (or nothing).
pub const LIBRARY_PLACEHOLDER: &str = "'{ langjs }';";

/// Marker replaced by the serialized messages.
pub const MESSAGES_PLACEHOLDER: &str = "'{ messages }'";

/// Template every generated script is built from.
pub const DEFAULT_TEMPLATE: &str = include_str!("../../templates/messages.js");

/// Client-side lookup library, embedded verbatim.
pub const RUNTIME_LIBRARY: &str = include_str!("../../templates/lang.js");

#[derive(Debug, Clone, Copy)]
pub struct Template<'a> {
    text: &'a str,
}

impl Default for Template<'static> {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE)
    }
}

impl<'a> Template<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// Fill both placeholders.
    ///
    /// The library placeholder becomes empty when `include_library` is false.
    pub fn render(
        &self,
        messages: &AggregateMapping,
        include_library: bool,
    ) -> Result<String, GenerateError> {
        let library = if include_library { RUNTIME_LIBRARY } else { "" };
        let payload = serialize_payload(messages)?;
        self.fill(library, &payload)
    }

    /// Substitute at the marker positions found in the template itself, so
    /// replacement text is never scanned for markers.
    fn fill(&self, library: &str, payload: &str) -> Result<String, GenerateError> {
        let library_at = find_once(self.text, LIBRARY_PLACEHOLDER)?;
        let messages_at = find_once(self.text, MESSAGES_PLACEHOLDER)?;

        let mut slots = [
            (library_at, LIBRARY_PLACEHOLDER.len(), library),
            (messages_at, MESSAGES_PLACEHOLDER.len(), payload),
        ];
        slots.sort_by_key(|(at, _, _)| *at);

        let mut output = String::with_capacity(self.text.len() + library.len() + payload.len());
        let mut cursor = 0;
        for (at, len, replacement) in slots {
            output.push_str(&self.text[cursor..at]);
            output.push_str(replacement);
            cursor = at + len;
        }
        output.push_str(&self.text[cursor..]);

        Ok(output)
    }
}

fn find_once(text: &str, placeholder: &'static str) -> Result<usize, GenerateError> {
    let mut found = text.match_indices(placeholder).map(|(at, _)| at);
    match (found.next(), found.count()) {
        (Some(at), 0) => Ok(at),
        (first, rest) => Err(GenerateError::Template {
            placeholder,
            occurrences: usize::from(first.is_some()) + rest,
        }),
    }
}

/// Render with the bundled template.
pub fn render(messages: &AggregateMapping, include_library: bool) -> Result<String, GenerateError> {
    Template::default().render(messages, include_library)
}

/// Compact JSON for embedding into the script.
///
/// Single quotes are written as `\u0027` so a message can never spell out a
/// placeholder marker. U+2028 and U+2029 are escaped too; older engines treat
/// them as line terminators inside string literals.
pub fn serialize_payload(messages: &AggregateMapping) -> Result<String, GenerateError> {
    let json = serde_json::to_string(messages)?;
    Ok(json
        .replace('\'', "\\u0027")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029"))
}

/// Standalone JSON document, used when exporting messages without a script.
pub fn render_json(messages: &AggregateMapping) -> Result<String, GenerateError> {
    let json = serde_json::to_string_pretty(messages)?;
    Ok(format!("{}\n", json))
}
