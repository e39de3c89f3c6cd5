//! IPv4 CIDR and subnet calculator.
//!
//! Computes a [`NetworkBlock`](models::NetworkBlock) from an address and a
//! prefix length, and derives subnet listings, paged and exported address
//! lists and bit breakdowns from it.
//!
//! # Modules
//!
//! - [`models`] - addresses, prefixes and blocks
//! - [`processing`] - subnet, address and bit views
//! - [`output`] - table, text, JSON and CSV rendering, export targets
//! - [`session`] - owner of the last computed block
//! - [`config`] - output caps
//! - [`cli`] - command line interface
//! - [`error`] - error types

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;
pub mod session;

pub use error::{CalcError, ExportError};
pub use models::{format_addr, parse_addr, BlockSummary, NetworkBlock, Prefix};
pub use session::Session;

/// Compute a block from an address and a prefix numeral.
///
/// # Examples
/// ```
/// let block = cidr_calculator::calculate("192.168.1.10", "24").unwrap();
/// assert_eq!(block.cidr().to_string(), "192.168.1.0/24");
/// assert_eq!(block.usable_hosts(), 254);
/// ```
pub fn calculate(address: &str, prefix: &str) -> Result<NetworkBlock, CalcError> {
    NetworkBlock::compute(address, prefix)
}
