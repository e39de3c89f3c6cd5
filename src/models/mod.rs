//! Domain models for the calculator.
//!
//! - [`ipv4`] - address parsing and formatting, masks, [`Prefix`] and [`Cidr`]
//! - [`block`] - [`NetworkBlock`] and its host range policy

mod block;
mod ipv4;

// Re-export public types
pub use block::{format_optional, BlockSummary, HostRange, NetworkBlock, NOT_APPLICABLE};
pub use ipv4::{
    broadcast_addr, cut_addr, format_addr, get_cidr_mask, parse_addr, wildcard_mask, Cidr, Prefix,
    MAX_LENGTH,
};
