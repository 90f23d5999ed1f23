//! Rendering of flat records
//!
//! Two modes: an indented JSON array, or a table with a fixed header that
//! downstream tools parse. The table is space-aligned for terminals and
//! tab-separated otherwise. On a terminal of known width the message column
//! is shortened to fit.

mod json;
mod table;

use std::io::Write;

pub use json::render_json;
pub use table::{
    render_table,
    TableStyle,
    HEADERS,
};

use crate::domain::FlatRecord;
use crate::error::CoreResult;

/// Where the rendered records end up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// An interactive terminal, with its column count when known
    Terminal { width: Option<usize> },
    /// A pipe or a file
    Pipe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table(TableStyle),
}

impl OutputFormat {
    /// JSON when requested, otherwise a table styled for the destination
    pub fn select(json: bool, destination: Destination) -> Self {
        match (json, destination) {
            (true, _) => OutputFormat::Json,
            (false, Destination::Terminal { width }) => {
                OutputFormat::Table(TableStyle::Aligned { max_width: width })
            }
            (false, Destination::Pipe) => OutputFormat::Table(TableStyle::Tabs),
        }
    }
}

pub fn render<W: Write>(records: &[FlatRecord], format: OutputFormat, out: &mut W) -> CoreResult<()> {
    match format {
        OutputFormat::Json => render_json(records, out),
        OutputFormat::Table(style) => render_table(records, style, out),
    }
}
