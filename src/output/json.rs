//! JSON output.

use crate::error::{CidrError, Result};
use crate::models::IpCidr;

/// Pretty JSON array of CIDR strings.
pub fn render_json(cidrs: &[IpCidr]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(cidrs).map_err(|e| CidrError::Json {
        path: ".".to_string(),
        message: e.to_string(),
    })?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_json() {
        let cidrs = vec![
            IpCidr::new("192.0.128.0/23").unwrap(),
            IpCidr::new("2001:db8::/62").unwrap(),
        ];
        let json = render_json(&cidrs).unwrap();
        assert_eq!(json, "[\n  \"192.0.128.0/23\",\n  \"2001:db8::/62\"\n]\n");
    }

    #[test]
    fn test_render_json_empty() {
        assert_eq!(render_json(&[]).unwrap(), "[]\n");
    }
}
