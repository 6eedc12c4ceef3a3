//! Plain-text CIDR lists.
//!
//! One or more CIDRs per line, separated by whitespace or commas. `#` starts a
//! comment that runs to the end of the line.

use crate::error::{CidrError, Result};
use crate::models::IpCidr;
use regex::Regex;
use std::io::Read;
use std::sync::OnceLock;

/// Regex matching one token between whitespace/comma separators.
static TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_token_regex() -> &'static Regex {
    TOKEN_REGEX.get_or_init(|| Regex::new(r"[^\s,]+").expect("Invalid Regex"))
}

/// Split a line into CIDR tokens, dropping any `#` comment.
fn split_tokens(line: &str) -> Vec<&str> {
    let line = match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    };
    get_token_regex()
        .find_iter(line)
        .map(|m| m.as_str())
        .collect()
}

/// Parse every CIDR in `input`, failing on the first invalid one.
pub fn parse_cidr_list(input: &str) -> Result<Vec<IpCidr>> {
    let mut cidrs = Vec::new();
    for (line_no, line) in input.lines().enumerate() {
        for token in split_tokens(line) {
            let cidr = IpCidr::new(token).inspect_err(|e| {
                log::warn!("line {}: {}", line_no + 1, e);
            })?;
            cidrs.push(cidr);
        }
    }
    log::debug!("Parsed {} CIDR(s)", cidrs.len());
    Ok(cidrs)
}

/// Read a CIDR list from `path`; `-` reads stdin.
pub fn read_cidr_file(path: &str) -> Result<Vec<IpCidr>> {
    let io_err = |source| CidrError::Io {
        path: path.to_string(),
        source,
    };

    let text = if path == "-" {
        log::info!("Reading CIDRs from stdin");
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map_err(io_err)?;
        buf
    } else {
        log::info!("Reading CIDRs from file: {path}");
        std::fs::read_to_string(path).map_err(io_err)?
    };

    parse_cidr_list(&text)
}
