//! urlseg CLI library
//!
//! This library provides the command-line interface for the urlseg
//! URL-aware tokenizer.

pub mod affix_source;
pub mod commands;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::CliError;
