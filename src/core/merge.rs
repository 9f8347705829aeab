//! Merges translation files into one flat, dotted-key mapping.
//!
//! Keys have the shape `locale.[namespace::]group.path.to.key`, for example
//! `en.messages.welcome` or `en.acme::forum.thread.title`.

use std::path::PathBuf;

use serde::Serialize;
use serde_json::{Map, Value};

use super::error::GenerateError;
use super::parsers::parse_resource;
use super::source::{NAMESPACE_SEPARATOR, ResourceFile};

/// Flat mapping from dotted key to message, in insertion order.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AggregateMapping {
    entries: Map<String, Value>,
}

impl AggregateMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a message, returning the value it replaced.
    pub fn insert(&mut self, key: String, value: String) -> Option<String> {
        match self.entries.insert(key, Value::String(value)) {
            Some(Value::String(previous)) => Some(previous),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.as_str().map(|v| (k.as_str(), v)))
    }

    /// Reorder entries by key (byte order).
    pub fn sorted(self) -> Self {
        let mut entries: Vec<(String, Value)> = self.entries.into_iter().collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        Self {
            entries: entries.into_iter().collect(),
        }
    }
}

/// Ordered set of group identities restricting which files are merged.
///
/// Entries use the same form as [`ResourceFile::group_id`]: `messages`,
/// `forum/thread` or `acme::messages`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupFilter {
    groups: Vec<String>,
}

impl GroupFilter {
    /// Build a filter; an empty list means "include everything" and yields `None`.
    pub fn from_entries<I, S>(entries: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut groups: Vec<String> = Vec::new();
        for entry in entries {
            let entry = normalize_group(entry.as_ref());
            if !entry.is_empty() && !groups.contains(&entry) {
                groups.push(entry);
            }
        }
        (!groups.is_empty()).then_some(Self { groups })
    }

    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    pub fn allows(&self, file: &ResourceFile) -> bool {
        let id = file.group_id();
        self.groups.iter().any(|g| *g == id)
    }
}

/// Trim whitespace and surrounding slashes, and unify path separators.
fn normalize_group(entry: &str) -> String {
    let entry = entry.trim().replace('\\', "/");
    match entry.split_once(NAMESPACE_SEPARATOR) {
        Some((namespace, group)) => format!(
            "{}{}{}",
            namespace.trim(),
            NAMESPACE_SEPARATOR,
            group.trim().trim_matches('/')
        ),
        None => entry.trim_matches('/').to_string(),
    }
}

/// A file that contributed to the mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedFile {
    pub path: PathBuf,
    pub locale: String,
    pub group_id: String,
    pub key_count: usize,
}

#[derive(Debug, Default)]
pub struct MergeOutcome {
    pub messages: AggregateMapping,
    pub merged: Vec<MergedFile>,
    /// Files excluded by the group filter.
    pub filtered: Vec<PathBuf>,
    /// Keys written more than once; the last file in scan order won.
    pub overwritten: Vec<String>,
}

/// Merge `files` in order into a single mapping.
///
/// Stops at the first file that cannot be read or decoded.
pub fn merge(
    files: &[ResourceFile],
    filter: Option<&GroupFilter>,
) -> Result<MergeOutcome, GenerateError> {
    let mut outcome = MergeOutcome::default();

    for file in files {
        if let Some(filter) = filter
            && !filter.allows(file)
        {
            outcome.filtered.push(file.path.clone());
            continue;
        }

        let value = parse_resource(file)?;
        let before = outcome.messages.len() + outcome.overwritten.len();
        flatten_into(
            &value,
            file.key_prefix(),
            &mut outcome.messages,
            &mut outcome.overwritten,
        );
        let key_count = outcome.messages.len() + outcome.overwritten.len() - before;

        outcome.merged.push(MergedFile {
            path: file.path.clone(),
            locale: file.locale.clone(),
            group_id: file.group_id(),
            key_count,
        });
    }

    Ok(outcome)
}

/// Walk `value` and write every leaf under `prefix`.
///
/// Strings are emitted as-is, numbers and booleans as their literal text,
/// arrays by index. `null` and empty containers produce nothing.
pub fn flatten_into(
    value: &Value,
    prefix: String,
    messages: &mut AggregateMapping,
    overwritten: &mut Vec<String>,
) {
    let leaf = match value {
        Value::Object(map) => {
            for (key, val) in map {
                flatten_into(val, format!("{}.{}", prefix, key), messages, overwritten);
            }
            return;
        }
        Value::Array(items) => {
            for (index, val) in items.iter().enumerate() {
                flatten_into(val, format!("{}.{}", prefix, index), messages, overwritten);
            }
            return;
        }
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => return,
    };

    if messages.insert(prefix.clone(), leaf).is_some() {
        overwritten.push(prefix);
    }
}
