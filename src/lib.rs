//! langjs - bundle translation files into a client-side messages script
//!
//! langjs scans a translations directory laid out as
//! `<locale>/[vendor/<namespace>/]<group>.json`, flattens every file into
//! dotted keys such as `en.messages.welcome` or `en.acme::messages.hello`,
//! and renders them, optionally with a small lookup runtime, into one
//! JavaScript file that browsers can load.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Scan, merge and render pipeline
//! - `writer`: Output file writing

pub mod cli;
pub mod config;
pub mod core;
pub mod writer;
