//! Mixed-family entry points.
//!
//! Splits IPv4 and IPv6 input into separate groups, runs the range algebra
//! per width and concatenates the results, IPv4 first.

use super::merge::merge;
use super::remove::remove;
use crate::error::Result;
use crate::models::{CidrBlock, IpCidr};
use itertools::{Either, Itertools};

/// Partition mixed CIDRs into IPv4 and IPv6 blocks, keeping input order.
pub fn split_families(cidrs: &[IpCidr]) -> (Vec<CidrBlock<u32>>, Vec<CidrBlock<u128>>) {
    cidrs.iter().partition_map(|cidr| match cidr {
        IpCidr::V4(block) => Either::Left(*block),
        IpCidr::V6(block) => Either::Right(*block),
    })
}

fn join_families(v4: Vec<CidrBlock<u32>>, v6: Vec<CidrBlock<u128>>) -> Vec<IpCidr> {
    v4.into_iter()
        .map(IpCidr::from)
        .chain(v6.into_iter().map(IpCidr::from))
        .collect()
}

/// Merge a mixed list of CIDRs into the smallest equivalent list.
pub fn merge_ip_cidrs(cidrs: &[IpCidr]) -> Result<Vec<IpCidr>> {
    let (v4, v6) = split_families(cidrs);
    log::debug!("merge: {} IPv4 and {} IPv6 block(s)", v4.len(), v6.len());

    Ok(join_families(merge(&v4)?, merge(&v6)?))
}

/// Remove `removes` from `cidrs`; each family is subtracted independently.
///
/// Both lists are merged first, so the result is always minimal even when
/// nothing overlaps.
pub fn remove_ip_cidrs(cidrs: &[IpCidr], removes: &[IpCidr]) -> Result<Vec<IpCidr>> {
    let (v4, v6) = split_families(&merge_ip_cidrs(cidrs)?);
    let (rm4, rm6) = split_families(&merge_ip_cidrs(removes)?);
    log::debug!(
        "remove: {} IPv4 and {} IPv6 block(s) minus {} IPv4 and {} IPv6 block(s)",
        v4.len(),
        v6.len(),
        rm4.len(),
        rm6.len()
    );

    Ok(join_families(remove(&v4, &rm4)?, remove(&v6, &rm6)?))
}

fn parse_all<S: AsRef<str>>(cidrs: &[S]) -> Result<Vec<IpCidr>> {
    cidrs.iter().map(|s| IpCidr::new(s.as_ref())).collect()
}

fn to_strings(cidrs: &[IpCidr]) -> Vec<String> {
    cidrs.iter().map(|c| c.to_string()).collect()
}

/// Merge CIDR strings of either family.
///
/// # Returns
/// * `Ok(None)` - no list was supplied
/// * `Ok(Some(vec![]))` - an empty list was supplied
/// * `Ok(Some(cidrs))` - the merged list, IPv4 before IPv6
///
/// # Errors
/// The first string that fails to parse aborts the call.
pub fn merge_cidrs<S: AsRef<str>>(cidrs: Option<&[S]>) -> Result<Option<Vec<String>>> {
    let Some(cidrs) = cidrs else {
        return Ok(None);
    };
    if cidrs.is_empty() {
        return Ok(Some(Vec::new()));
    }

    let parsed = parse_all(cidrs)?;
    Ok(Some(to_strings(&merge_ip_cidrs(&parsed)?)))
}

/// Remove CIDR strings from CIDR strings.
///
/// # Returns
/// * `Ok(None)` - no input list was supplied
/// * `Ok(Some(vec![]))` - the input list was empty, or everything was removed
/// * `Ok(Some(cidrs))` - the input returned as given when there is nothing to
///   remove, otherwise the minimal remaining list, IPv4 before IPv6
///
/// # Errors
/// The first string in either list that fails to parse aborts the call.
pub fn remove_cidrs<S: AsRef<str>, R: AsRef<str>>(
    cidrs: Option<&[S]>,
    removes: Option<&[R]>,
) -> Result<Option<Vec<String>>> {
    let Some(cidrs) = cidrs else {
        return Ok(None);
    };
    if cidrs.is_empty() {
        return Ok(Some(Vec::new()));
    }

    let parsed = parse_all(cidrs)?;
    let removes = match removes {
        Some(removes) if !removes.is_empty() => parse_all(removes)?,
        _ => {
            log::debug!("remove: nothing to remove, returning input unchanged");
            return Ok(Some(
                cidrs.iter().map(|s| s.as_ref().trim().to_string()).collect(),
            ));
        }
    };

    Ok(Some(to_strings(&remove_ip_cidrs(&parsed, &removes)?)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CidrError;

    const NONE: Option<&[&str]> = None;

    #[test]
    fn test_merge_cidrs_none_and_empty() {
        assert_eq!(merge_cidrs(NONE).unwrap(), None);
        assert_eq!(merge_cidrs::<&str>(Some(&[])).unwrap(), Some(vec![]));
    }

    #[test]
    fn test_merge_cidrs_mixed() {
        let input = [
            "2001:db8:0:2::/64",
            "2001:db8:0:3::/64",
            "192.0.128.0/24",
            "192.0.129.0/24",
        ];
        assert_eq!(
            merge_cidrs(Some(&input[..])).unwrap(),
            Some(vec![
                "192.0.128.0/23".to_string(),
                "2001:db8:0:2::/63".to_string()
            ])
        );
    }

    #[test]
    fn test_merge_cidrs_parse_error() {
        let input = ["10.0.0.0/8", "10.0.0.0/33"];
        assert!(matches!(
            merge_cidrs(Some(&input[..])),
            Err(CidrError::InvalidPrefix { prefix: 33, .. })
        ));
    }

    #[test]
    fn test_remove_cidrs_none_and_empty() {
        let ten = ["10.0.0.0/8"];
        assert_eq!(remove_cidrs(NONE, NONE).unwrap(), None);
        assert_eq!(remove_cidrs(NONE, Some(&ten[..])).unwrap(), None);
        assert_eq!(remove_cidrs::<&str, &str>(Some(&[]), None).unwrap(), Some(vec![]));
        assert_eq!(remove_cidrs::<&str, &str>(Some(&[]), Some(&[])).unwrap(), Some(vec![]));
        assert_eq!(
            remove_cidrs(Some(&ten[..]), NONE).unwrap(),
            Some(vec!["10.0.0.0/8".to_string()])
        );
    }

    #[test]
    fn test_remove_cidrs_nothing_to_remove_returns_input() {
        let input = ["10.0.0.0/8", "0.0.0.0/0"];
        assert_eq!(
            remove_cidrs::<&str, &str>(Some(&input[..]), Some(&[])).unwrap(),
            Some(vec!["10.0.0.0/8".to_string(), "0.0.0.0/0".to_string()])
        );
        let bad = ["10.0.0.0/8", "nonsense"];
        assert!(remove_cidrs::<&str, &str>(Some(&bad[..]), None).is_err());
    }

    #[test]
    fn test_remove_cidrs_all_removed_is_empty_not_none() {
        let input = ["10.0.0.0/8"];
        assert_eq!(
            remove_cidrs(Some(&input[..]), Some(&input[..])).unwrap(),
            Some(vec![])
        );
    }

    #[test]
    fn test_remove_cidrs_other_family_untouched() {
        let v6 = ["fd00::/8"];
        let v4 = ["10.0.0.0/8"];
        assert_eq!(
            remove_cidrs(Some(&v6[..]), Some(&v4[..])).unwrap(),
            Some(vec!["fd00::/8".to_string()])
        );
        assert_eq!(
            remove_cidrs(Some(&v4[..]), Some(&v6[..])).unwrap(),
            Some(vec!["10.0.0.0/8".to_string()])
        );
    }

    #[test]
    fn test_remove_cidrs_mixed() {
        let input = [
            "10.0.0.0/8",
            "2001:db8:0:2::/64",
            "2001:db8:0:3::/64",
            "192.0.128.0/24",
            "192.0.129.0/24",
        ];
        let removes = ["192.0.128.0/24", "2001:db8:0:3::/64"];
        assert_eq!(
            remove_cidrs(Some(&input[..]), Some(&removes[..])).unwrap(),
            Some(vec![
                "10.0.0.0/8".to_string(),
                "192.0.129.0/24".to_string(),
                "2001:db8:0:2::/64".to_string(),
            ])
        );
    }

    #[test]
    fn test_split_families_keeps_order() {
        let cidrs: Vec<IpCidr> = ["::/0", "10.0.0.0/8", "fd00::/8", "1.0.0.0/8"]
            .iter()
            .map(|s| IpCidr::new(s).unwrap())
            .collect();
        let (v4, v6) = split_families(&cidrs);
        assert_eq!(v4.len(), 2);
        assert_eq!(v6.len(), 2);
        assert_eq!(v4[0].to_string(), "10.0.0.0/8");
        assert_eq!(v6[1].to_string(), "fd00::/8");
    }
}
