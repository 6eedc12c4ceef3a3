// cargo watch -x 'fmt' -x 'test'

//! Merge and subtract lists of IPv4/IPv6 CIDR blocks.
//!
//! The range algebra in [`processing`] works on one address width at a time,
//! `u32` for IPv4 and `u128` for IPv6; [`merge_cidrs`] and [`remove_cidrs`]
//! take mixed CIDR strings and dispatch per family.
//!
//! ```
//! let merged = cidr_merge::merge_cidrs(Some(&["10.0.0.0/24", "10.0.1.0/24"][..]))
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(merged, vec!["10.0.0.0/23"]);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{CidrError, Result};
pub use models::{CidrBlock, Interval, IpCidr};
pub use processing::{merge, merge_cidrs, merge_ip_cidrs, remove, remove_cidrs, remove_ip_cidrs};
