//! CSV output formatting for CIDR results.

use super::terminal::format_field;
use crate::error::Result;
use crate::models::{IpCidr, IPV4_BITS, IPV6_BITS};

/// Number of addresses in the block as a decimal string.
///
/// `::/0` holds 2^128 addresses, one more than `u128::MAX`.
pub fn address_count(cidr: &IpCidr) -> String {
    let width = if cidr.is_ipv4() { IPV4_BITS } else { IPV6_BITS };
    let host_bits = width.saturating_sub(cidr.prefix());
    if host_bits >= 128 {
        "340282366920938463463374607431768211456".to_string()
    } else {
        (1u128 << host_bits).to_string()
    }
}

/// Render CIDRs as a CSV table with a header row.
pub fn render_csv(cidrs: &[IpCidr]) -> Result<String> {
    let mut out = String::new();
    out.push_str(&format!(
        "{cnt},{cidr},{first},{last},{addresses}\n",
        cnt = format_field("cnt", 6),
        cidr = format_field("cidr", 20),
        first = format_field("first", 18),
        last = format_field("last", 18),
        addresses = format_field("addresses", 12),
    ));

    for (i, cidr) in cidrs.iter().enumerate() {
        let (first, last) = cidr.range()?;
        out.push_str(&format!(
            "{cnt},{cidr},{first},{last},{addresses}\n",
            cnt = format_field(i + 1, 6),
            cidr = format_field(cidr, 20),
            first = format_field(first, 18),
            last = format_field(last, 18),
            addresses = format_field(address_count(cidr), 12),
        ));
    }

    Ok(out)
}
