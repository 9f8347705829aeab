//! Scan, merge and render in one call.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::GenerateError;
use super::merge::{AggregateMapping, GroupFilter, MergedFile, merge};
use super::render::{DEFAULT_TEMPLATE, Template, render_json};
use super::source::scan_source_tree;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Script built from the template.
    #[default]
    Js,
    /// Bare JSON document of the messages.
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    pub include_library: bool,
    pub format: OutputFormat,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            include_library: true,
            format: OutputFormat::Js,
        }
    }
}

/// What a generation run looked at and produced.
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub merged: Vec<MergedFile>,
    pub filtered: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    pub overwritten: Vec<String>,
    pub message_count: usize,
}

#[derive(Debug)]
pub struct Generated {
    pub output: String,
    pub messages: AggregateMapping,
    pub report: GenerationReport,
}

/// Builds the messages script for one translations directory.
#[derive(Debug, Clone)]
pub struct Generator {
    source_root: PathBuf,
    filter: Option<GroupFilter>,
    sort: bool,
    template: String,
}

impl Generator {
    pub fn new(source_root: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
            filter: None,
            sort: true,
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }

    pub fn with_filter(mut self, filter: Option<GroupFilter>) -> Self {
        self.filter = filter;
        self
    }

    /// Sort keys in the output (default). When off, keys keep scan order.
    pub fn with_sort(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    /// Collect the aggregate mapping without rendering it.
    pub fn collect(&self) -> Result<(AggregateMapping, GenerationReport), GenerateError> {
        let scan = scan_source_tree(&self.source_root)?;
        let outcome = merge(&scan.files, self.filter.as_ref())?;

        let messages = if self.sort {
            outcome.messages.sorted()
        } else {
            outcome.messages
        };

        let report = GenerationReport {
            merged: outcome.merged,
            filtered: outcome.filtered,
            skipped: scan.skipped,
            overwritten: outcome.overwritten,
            message_count: messages.len(),
        };
        Ok((messages, report))
    }

    pub fn generate(&self, options: &GenerateOptions) -> Result<Generated, GenerateError> {
        let (messages, report) = self.collect()?;

        let output = match options.format {
            OutputFormat::Js => {
                Template::new(&self.template).render(&messages, options.include_library)?
            }
            OutputFormat::Json => render_json(&messages)?,
        };

        Ok(Generated {
            output,
            messages,
            report,
        })
    }
}
