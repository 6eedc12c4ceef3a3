//! CIDR text notation for both address families.
//!
//! Provides [`IpCidr`], the parsed form of `"10.0.0.0/24"` or `"2001:db8::/32"`,
//! which the family dispatch splits into per-width [`CidrBlock`] lists.

use super::address::{IPV4_BITS, IPV6_BITS};
use super::block::CidrBlock;
use crate::error::{CidrError, Result};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// A CIDR block of either address family.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum IpCidr {
    V4(CidrBlock<u32>),
    V6(CidrBlock<u128>),
}

impl IpCidr {
    /// Parse a CIDR string (e.g. "10.0.0.0/24").
    ///
    /// A bare address is taken as a single host, `/32` or `/128`. The address
    /// is kept as written; host bits are only cleared by merge/remove.
    pub fn new(addr_cidr: &str) -> Result<IpCidr> {
        let addr_cidr = addr_cidr.trim();
        let (addr_part, prefix_part) = match addr_cidr.split_once('/') {
            Some((addr, prefix)) => (addr, Some(prefix)),
            None => (addr_cidr, None),
        };
        if addr_part.is_empty() || prefix_part.is_some_and(|p| p.contains('/')) {
            return Err(CidrError::InvalidNotation(addr_cidr.to_string()));
        }

        let addr: IpAddr = addr_part
            .parse()
            .map_err(|_| CidrError::InvalidAddress(addr_part.to_string()))?;

        let max_prefix = match addr {
            IpAddr::V4(_) => IPV4_BITS,
            IpAddr::V6(_) => IPV6_BITS,
        };
        let prefix = match prefix_part {
            None => max_prefix,
            Some(p) => {
                let prefix = p
                    .parse::<u32>()
                    .map_err(|_| CidrError::InvalidNotation(addr_cidr.to_string()))?;
                u8::try_from(prefix)
                    .ok()
                    .filter(|&p| p <= max_prefix)
                    .ok_or(CidrError::InvalidPrefix {
                        prefix,
                        width: max_prefix,
                    })?
            }
        };

        match addr {
            IpAddr::V4(ip) => Ok(IpCidr::V4(CidrBlock::from_ip(ip, prefix)?)),
            IpAddr::V6(ip) => Ok(IpCidr::V6(CidrBlock::from_ip(ip, prefix)?)),
        }
    }

    pub fn prefix(&self) -> u8 {
        match self {
            IpCidr::V4(block) => block.prefix,
            IpCidr::V6(block) => block.prefix,
        }
    }

    pub fn is_ipv4(&self) -> bool {
        matches!(self, IpCidr::V4(_))
    }

    /// Same block with the host bits cleared.
    pub fn network(&self) -> Result<IpCidr> {
        Ok(match self {
            IpCidr::V4(block) => IpCidr::V4(block.normalized()?),
            IpCidr::V6(block) => IpCidr::V6(block.normalized()?),
        })
    }

    /// Lowest and highest address covered, as `IpAddr`.
    pub fn range(&self) -> Result<(IpAddr, IpAddr)> {
        Ok(match self {
            IpCidr::V4(block) => {
                let i = block.interval()?;
                (
                    IpAddr::V4(Ipv4Addr::from(i.first)),
                    IpAddr::V4(Ipv4Addr::from(i.last)),
                )
            }
            IpCidr::V6(block) => {
                let i = block.interval()?;
                (
                    IpAddr::V6(Ipv6Addr::from(i.first)),
                    IpAddr::V6(Ipv6Addr::from(i.last)),
                )
            }
        })
    }

    /// True if `ip` is inside this block. Addresses of the other family never are.
    pub fn contains(&self, ip: IpAddr) -> bool {
        match (self, ip) {
            (IpCidr::V4(block), IpAddr::V4(ip)) => block
                .interval()
                .is_ok_and(|i| i.first <= u32::from(ip) && u32::from(ip) <= i.last),
            (IpCidr::V6(block), IpAddr::V6(ip)) => block
                .interval()
                .is_ok_and(|i| i.first <= u128::from(ip) && u128::from(ip) <= i.last),
            _ => false,
        }
    }
}

impl FromStr for IpCidr {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self> {
        IpCidr::new(s)
    }
}

impl std::fmt::Display for IpCidr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            IpCidr::V4(block) => write!(f, "{block}"),
            IpCidr::V6(block) => write!(f, "{block}"),
        }
    }
}

impl From<CidrBlock<u32>> for IpCidr {
    fn from(block: CidrBlock<u32>) -> Self {
        IpCidr::V4(block)
    }
}

impl From<CidrBlock<u128>> for IpCidr {
    fn from(block: CidrBlock<u128>) -> Self {
        IpCidr::V6(block)
    }
}

impl Serialize for IpCidr {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for IpCidr {
    fn deserialize<D>(deserializer: D) -> std::result::Result<IpCidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        IpCidr::new(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ipv4() {
        let cidr = IpCidr::new(" 10.1.2.3/16 ").unwrap();
        assert!(cidr.is_ipv4());
        assert_eq!(cidr.prefix(), 16);
        assert_eq!(cidr.to_string(), "10.1.2.3/16");
        assert_eq!(cidr.network().unwrap().to_string(), "10.1.0.0/16");
    }

    #[test]
    fn test_parse_ipv6() {
        let cidr: IpCidr = "2001:db8:0:0::/64".parse().unwrap();
        assert!(!cidr.is_ipv4());
        assert_eq!(cidr.to_string(), "2001:db8::/64");

        let host: IpCidr = "fd00:0:1:2:12::53".parse().unwrap();
        assert_eq!(host.to_string(), "fd00:0:1:2:12::53/128");
    }

    #[test]
    fn test_bare_address_is_host() {
        assert_eq!(IpCidr::new("1.2.3.4").unwrap().to_string(), "1.2.3.4/32");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            IpCidr::new("10.0.0.0/33"),
            Err(CidrError::InvalidPrefix {
                prefix: 33,
                width: 32
            })
        ));
        assert!(matches!(
            IpCidr::new("::/129"),
            Err(CidrError::InvalidPrefix { prefix: 129, .. })
        ));
        assert!(matches!(
            IpCidr::new("10.0.0.0/999"),
            Err(CidrError::InvalidPrefix {
                prefix: 999,
                width: 32
            })
        ));
        assert_eq!(
            IpCidr::new("fd00::/300").unwrap_err().to_string(),
            "Invalid prefix length /300 for a 128-bit address"
        );
        assert!(matches!(
            IpCidr::new("10.0.0.0/99999999999"),
            Err(CidrError::InvalidNotation(_))
        ));
        assert!(matches!(
            IpCidr::new("10.0.0.0/abc"),
            Err(CidrError::InvalidNotation(_))
        ));
        assert!(matches!(
            IpCidr::new("10.0.0.0/8/8"),
            Err(CidrError::InvalidNotation(_))
        ));
        assert!(matches!(
            IpCidr::new("/8"),
            Err(CidrError::InvalidNotation(_))
        ));
        assert!(matches!(
            IpCidr::new("10.0.0.300/8"),
            Err(CidrError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_range_and_contains() {
        let cidr = IpCidr::new("192.168.1.0/24").unwrap();
        let (first, last) = cidr.range().unwrap();
        assert_eq!(first.to_string(), "192.168.1.0");
        assert_eq!(last.to_string(), "192.168.1.255");
        assert!(cidr.contains("192.168.1.77".parse().unwrap()));
        assert!(!cidr.contains("192.168.2.0".parse().unwrap()));
        assert!(!cidr.contains("::1".parse().unwrap()));
    }

    #[test]
    fn test_serde_round_trip() {
        let cidrs = vec![
            IpCidr::new("10.0.0.0/8").unwrap(),
            IpCidr::new("2001:db8::/32").unwrap(),
        ];
        let json = serde_json::to_string(&cidrs).unwrap();
        assert_eq!(json, r#"["10.0.0.0/8","2001:db8::/32"]"#);
        let back: Vec<IpCidr> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cidrs);
        assert!(serde_json::from_str::<IpCidr>(r#""10.0.0.0/40""#).is_err());
    }
}
