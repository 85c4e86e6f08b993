//! Core constants shared across ruleset crates.
//!
//! This crate provides:
//! - Default conversion settings
//! - Output naming constants

pub mod defaults;

pub use defaults::*;
