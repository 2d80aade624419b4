//! Quire Core - Core library for changelog fragments
//!
//! This crate provides the error types, configuration, and source-literal
//! lookup shared by the quire changelog crates.

pub mod config;
pub mod error;
pub mod literals;

pub use config::{Config, HeaderChars};
pub use error::{ConfigError, LiteralError, QuireError, Result};
pub use literals::{find_literal, find_literal_in_file};
