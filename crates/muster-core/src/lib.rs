//! Core functionality for the muster linter
//!
//! This crate provides the core linting functionality including:
//! - Parsing JS/TS/JSX files and dispatching nodes to rules
//! - Diagnostic generation and fix application
//! - Configuration management
//! - File discovery and processing

pub mod analyze;
pub mod check;
pub mod config;
pub mod diagnostic;
pub mod discovery;
pub mod error;
pub mod fix;
pub mod fs;
pub mod imports;
pub mod lints;
pub mod location;
pub mod rule_set;
pub mod settings;
pub mod shape;
pub mod toml;
pub mod utils_ast;
pub mod vcs;
