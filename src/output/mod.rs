//! Output formatting for calculator results.
//!
//! - [`terminal`] - key/value table, plain text and view rendering
//! - [`csv`] - address export as CSV
//! - [`json`] - JSON documents
//! - [`target`] - copy/download capabilities

mod csv;
mod json;
mod target;
mod terminal;

pub use csv::{csv_filename, render_csv, CSV_HEADER, CSV_MIME};
pub use json::{summary_json, to_json};
pub use target::{ConsoleTarget, ExportTarget};
pub use terminal::{
    format_field, render_address_view, render_bits, render_subnets, render_table, render_text,
};
