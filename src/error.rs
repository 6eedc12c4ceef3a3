//! Error type shared by the range algebra and the text/file adapters.

use thiserror::Error;

/// Everything that can abort a merge or remove call.
///
/// Addresses carried in the variants are widened to `u128` so one error type
/// serves both the 32-bit and the 128-bit instantiation.
#[derive(Error, Debug)]
pub enum CidrError {
    /// Prefix length outside `[0, width]`, as written in the input.
    #[error("Invalid prefix length /{prefix} for a {width}-bit address")]
    InvalidPrefix { prefix: u32, width: u8 },

    /// Requested range is not inside the network being split.
    #[error("Range {lo:#x}-{hi:#x} out of range for network {base:#x}/{prefix}, broadcast {broadcast:#x}")]
    RangeOutOfBounds {
        lo: u128,
        hi: u128,
        base: u128,
        prefix: u8,
        broadcast: u128,
    },

    /// Text is not `addr/prefix` or a bare address.
    #[error("Invalid CIDR notation: '{0}'")]
    InvalidNotation(String),

    /// Address part of a CIDR does not parse.
    #[error("Invalid IP address: '{0}'")]
    InvalidAddress(String),

    #[error("Error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Bad value in the environment or `.env` file.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// JSON request did not match the expected layout; `path` is the JSON path.
    #[error("Error parsing JSON at '{path}': {message}")]
    Json { path: String, message: String },
}

pub type Result<T> = std::result::Result<T, CidrError>;
