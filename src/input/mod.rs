//! Reading CIDR input.
//!
//! - [`text`] - Plain-text CIDR lists from files or stdin
//! - [`request`] - JSON request files

mod request;
mod text;

pub use request::{read_request_file, Request};
pub use text::{parse_cidr_list, read_cidr_file};
