//! Generation core: scan the translations tree, merge it into one mapping,
//! render the messages script.
//!
//! - `source`: discovers translation files and their locale/namespace/group
//! - `parsers`: decodes JSON and TOML translation files
//! - `merge`: flattens decoded files into dotted keys, applying group filters
//! - `render`: fills the script template
//! - `generator`: runs the three steps for one invocation

pub mod error;
pub mod generator;
pub mod merge;
pub mod parsers;
pub mod render;
pub mod source;

pub use error::GenerateError;
pub use generator::{GenerateOptions, Generated, GenerationReport, Generator, OutputFormat};
pub use merge::{AggregateMapping, GroupFilter, MergeOutcome, MergedFile, merge};
pub use render::{LIBRARY_PLACEHOLDER, MESSAGES_PLACEHOLDER, RUNTIME_LIBRARY, Template, render};
pub use source::{ResourceFile, ScanResult, SourceFormat, scan_source_tree};
