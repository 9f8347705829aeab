//! Translation directory scanner.
//!
//! Discovers translation files laid out as:
//!
//! - `<locale>/<group>.<ext>` and `<locale>/<dir>/<group>.<ext>` (plain groups)
//! - `<locale>/vendor/<namespace>/<group>.<ext>` (namespaced groups)
//! - `vendor/<namespace>/<locale>/<group>.<ext>` (package override layout)
//! - `<locale>.json` at the root (flat JSON strings, group `strings`)
//!
//! Anything else under the root is skipped without error.

use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use super::error::GenerateError;

/// Directory name introducing a namespace.
pub const VENDOR_DIR: &str = "vendor";

/// Group assigned to root-level `<locale>.json` files.
pub const STRINGS_GROUP: &str = "strings";

/// Separator between a namespace and its group path.
pub const NAMESPACE_SEPARATOR: &str = "::";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Toml,
}

impl SourceFormat {
    /// Every extension the scanner accepts.
    pub const ALL: &'static [SourceFormat] = &[SourceFormat::Json, SourceFormat::Toml];

    pub fn extension(self) -> &'static str {
        match self {
            SourceFormat::Json => "json",
            SourceFormat::Toml => "toml",
        }
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.extension() == ext)
    }
}

/// One translation file found under the source root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceFile {
    pub locale: String,
    pub namespace: Option<String>,
    /// Group path with `/` between directory segments, e.g. `forum/thread`.
    pub group: String,
    /// Path relative to the source root.
    pub relative_path: PathBuf,
    /// Path as found on disk (source root joined with `relative_path`).
    pub path: PathBuf,
    pub format: SourceFormat,
}

impl ResourceFile {
    /// Identity used by group filters: `forum/thread` or `acme::messages`.
    pub fn group_id(&self) -> String {
        match &self.namespace {
            Some(namespace) => format!("{}{}{}", namespace, NAMESPACE_SEPARATOR, self.group),
            None => self.group.clone(),
        }
    }

    /// Dotted prefix shared by every key of this file, e.g. `en.acme::forum.thread`.
    pub fn key_prefix(&self) -> String {
        format!("{}.{}", self.locale, self.group_id().replace('/', "."))
    }
}

/// Result of scanning the source root.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub files: Vec<ResourceFile>,
    /// Files that did not match any recognized layout or extension.
    pub skipped: Vec<PathBuf>,
}

/// Walk `root` and collect every translation file, sorted by path.
pub fn scan_source_tree(root: impl AsRef<Path>) -> Result<ScanResult, GenerateError> {
    let root = root.as_ref();

    if !root.exists() {
        return Err(GenerateError::SourceNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(GenerateError::SourceNotDirectory(root.to_path_buf()));
    }

    let mut result = ScanResult::default();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|source| GenerateError::Walk {
            path: root.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };

        match classify(relative) {
            Some(file) => result.files.push(ResourceFile {
                path: path.to_path_buf(),
                ..file
            }),
            None => result.skipped.push(path.to_path_buf()),
        }
    }

    Ok(result)
}

/// Map a root-relative path onto a resource descriptor.
///
/// The returned descriptor's `path` equals `relative`; the scanner replaces it.
pub fn classify(relative: &Path) -> Option<ResourceFile> {
    let format = relative
        .extension()
        .and_then(|e| e.to_str())
        .and_then(SourceFormat::from_extension)?;

    let mut segments = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => segments.push(part.to_str()?),
            _ => return None,
        }
    }
    if segments.iter().any(|s| s.starts_with('.')) {
        return None;
    }

    let file_name = segments.pop()?;
    let stem = file_name
        .strip_suffix(format.extension())
        .and_then(|s| s.strip_suffix('.'))
        .filter(|s| !s.is_empty())?;

    let (locale, namespace, dirs): (&str, Option<&str>, &[&str]) = match segments.as_slice() {
        [] if format == SourceFormat::Json && stem != VENDOR_DIR => {
            return Some(ResourceFile {
                locale: stem.to_string(),
                namespace: None,
                group: STRINGS_GROUP.to_string(),
                relative_path: relative.to_path_buf(),
                path: relative.to_path_buf(),
                format,
            });
        }
        [] => return None,
        [VENDOR_DIR, namespace, locale, dirs @ ..] => (*locale, Some(*namespace), dirs),
        [VENDOR_DIR, ..] => return None,
        [locale, VENDOR_DIR, namespace, dirs @ ..] => (*locale, Some(*namespace), dirs),
        [_, VENDOR_DIR] => return None,
        [locale, dirs @ ..] => (*locale, None, dirs),
    };

    let group = dirs
        .iter()
        .copied()
        .chain(std::iter::once(stem))
        .collect::<Vec<_>>()
        .join("/");

    Some(ResourceFile {
        locale: locale.to_string(),
        namespace: namespace.map(str::to_string),
        group,
        relative_path: relative.to_path_buf(),
        path: relative.to_path_buf(),
        format,
    })
}
