//! JSON request files.
//!
//! A request carries the CIDRs to work on and, optionally, CIDRs to remove:
//!
//! ```json
//! { "cidrs": ["10.0.0.0/24", "10.0.1.0/24"], "remove": ["10.0.0.128/25"] }
//! ```

use crate::error::{CidrError, Result};
use crate::models::IpCidr;
use crate::processing::{merge_ip_cidrs, remove_ip_cidrs};
use serde::{Deserialize, Serialize};

/// A merge (no `remove`) or remove request.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Request {
    pub cidrs: Vec<IpCidr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove: Option<Vec<IpCidr>>,
}

impl Request {
    /// Parse a request, reporting the JSON path of the first bad value.
    pub fn from_json(json: &str) -> Result<Request> {
        let de = &mut serde_json::Deserializer::from_str(json);
        serde_path_to_error::deserialize(de).map_err(|e| CidrError::Json {
            path: e.path().to_string(),
            message: e.inner().to_string(),
        })
    }

    /// Merge `cidrs`, or subtract `remove` from them when present.
    pub fn run(&self) -> Result<Vec<IpCidr>> {
        match &self.remove {
            Some(removes) => remove_ip_cidrs(&self.cidrs, removes),
            None => merge_ip_cidrs(&self.cidrs),
        }
    }
}

/// Read and parse a request file.
pub fn read_request_file(path: &str) -> Result<Request> {
    let json = std::fs::read_to_string(path).map_err(|source| CidrError::Io {
        path: path.to_string(),
        source,
    })?;
    log::info!("Reading request file: {path}");
    Request::from_json(&json)
}
