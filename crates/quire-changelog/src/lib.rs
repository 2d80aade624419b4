//! Quire Changelog - Changelog fragment parsing and rendering
//!
//! This crate turns RST changelog fragments into ordered sections of entries,
//! renders sections back to RST, and assembles collected entries into a
//! changelog document.

pub mod collector;
pub mod formatter;
pub mod insert;
pub mod parser;
pub mod types;

pub use collector::{entry_title, merge_sections, order_sections, EntryCollector};
pub use formatter::{format_header, format_sections, FormatterRegistry, FragmentFormat, RstFormat};
pub use insert::insert_entry;
pub use parser::{parse_sections, strip_comments, LineRole};
pub use types::{ParsedSections, Section};
