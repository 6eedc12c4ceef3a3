//! Output formatting for CIDR results.
//!
//! This module handles formatting and outputting results:
//! - [`csv`] - CSV table output
//! - [`json`] - JSON array output
//! - [`terminal`] - Plain lines and colored log summary

mod csv;
mod json;
mod terminal;

use crate::error::Result;
use crate::models::IpCidr;
use clap::ValueEnum;

pub use csv::{address_count, render_csv};
pub use json::render_json;
pub use terminal::{format_field, log_summary, render_plain};

/// How results are written to stdout.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One CIDR per line
    #[default]
    Plain,
    /// Quoted CSV table with address ranges
    Csv,
    /// JSON array of CIDR strings
    Json,
}

/// Render `cidrs` in the requested format.
pub fn render(cidrs: &[IpCidr], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Plain => Ok(render_plain(cidrs)),
        OutputFormat::Csv => render_csv(cidrs),
        OutputFormat::Json => render_json(cidrs),
    }
}
