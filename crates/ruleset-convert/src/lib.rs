//! Conversion pipeline and CLI for ruleset-rs.
//!
//! Reads one rule source (a file or standard input), converts it with
//! [`ruleset_rules`] and writes each resulting rule-set twice: as sing-box
//! JSON source and as a binary `.srs` file from [`ruleset_srs`].

pub mod cli;
pub mod convert;
pub mod emit;
pub mod error;
pub mod output;
pub mod source;

pub use cli::{ConvertArgs, resolve_config, run};
pub use convert::convert;
pub use emit::Emitter;
pub use error::ConvertError;
pub use output::{artifact_path, output_stem};
pub use source::load_source;
