//! Command line interface.

use crate::error::Result;
use crate::input::{read_cidr_file, read_request_file};
use crate::models::IpCidr;
use crate::output::OutputFormat;
use crate::processing::{merge_ip_cidrs, remove_ip_cidrs};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "cidr-merge")]
#[command(about = "Merge or subtract lists of IPv4/IPv6 CIDR blocks.")]
#[command(version)]
pub struct Cli {
    /// Output format, overrides CIDR_MERGE_FORMAT
    #[arg(long, short = 'o', value_enum, global = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Merge CIDR blocks into the smallest equivalent list
    #[command(alias = "m")]
    Merge {
        /// CIDR blocks or bare addresses
        cidrs: Vec<IpCidr>,
        /// Read more CIDRs from a file ('-' for stdin)
        #[arg(short, long)]
        file: Option<String>,
    },
    /// Remove CIDR blocks from a list of CIDR blocks
    #[command(alias = "r")]
    Remove {
        /// CIDR blocks to remove from
        cidrs: Vec<IpCidr>,
        /// Read more CIDRs from a file ('-' for stdin)
        #[arg(short, long)]
        file: Option<String>,
        /// CIDR blocks to remove
        #[arg(short, long = "remove", num_args = 1..)]
        remove: Vec<IpCidr>,
        /// Read CIDRs to remove from a file
        #[arg(long)]
        remove_file: Option<String>,
    },
    /// Run a JSON request file
    Request {
        /// Path to the request file
        path: String,
    },
}

/// Inline CIDRs followed by those read from `file`.
fn collect_cidrs(inline: &[IpCidr], file: Option<&str>) -> Result<Vec<IpCidr>> {
    let mut cidrs = inline.to_vec();
    if let Some(path) = file {
        cidrs.extend(read_cidr_file(path)?);
    }
    Ok(cidrs)
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Commands {
    /// Execute the command and return the resulting CIDR list.
    pub fn run(&self) -> Result<Vec<IpCidr>> {
        match self {
            Commands::Merge { cidrs, file } => {
                let cidrs = collect_cidrs(cidrs, file.as_deref())?;
                log::info!("#Start merge of {} CIDR(s)", cidrs.len());
                merge_ip_cidrs(&cidrs)
            }
            Commands::Remove {
                cidrs,
                file,
                remove,
                remove_file,
            } => {
                let cidrs = collect_cidrs(cidrs, file.as_deref())?;
                let removes = collect_cidrs(remove, remove_file.as_deref())?;
                log::info!(
                    "#Start remove of {} CIDR(s) from {} CIDR(s)",
                    removes.len(),
                    cidrs.len()
                );
                remove_ip_cidrs(&cidrs, &removes)
            }
            Commands::Request { path } => read_request_file(path)?.run(),
        }
    }
}
