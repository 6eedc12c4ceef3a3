//! Terminal output utilities.
//!
//! Provides formatting helpers for terminal output.

use crate::models::IpCidr;
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");

    if quoted.len() >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// One plain line per CIDR.
pub fn render_plain(cidrs: &[IpCidr]) -> String {
    cidrs.iter().map(|c| format!("{c}\n")).collect()
}

/// Log a colored count of the result, split by family.
pub fn log_summary(cidrs: &[IpCidr]) {
    let v4 = cidrs.iter().filter(|c| c.is_ipv4()).count();
    let v6 = cidrs.len() - v4;
    if cidrs.is_empty() {
        log::warn!("{}", "Result is empty".on_red());
    } else {
        log::info!(
            "Result: {} block(s), {} IPv4 and {} IPv6",
            cidrs.len().to_string().green(),
            v4,
            v6
        );
    }
}
