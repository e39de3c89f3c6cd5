//! Views derived from a computed block.
//!
//! - [`subnets`] - partitioning into equal sub-blocks
//! - [`addresses`] - address enumeration, paging and bounded export
//! - [`bits`] - per-bit breakdown

mod addresses;
mod bits;
mod subnets;

// Re-export public functions
pub use addresses::{
    address_page, address_role, addresses, addresses_between, clamp_page, export_addresses,
    AddressExport, AddressIter, AddressPage, AddressRecord, AddressRole, AddressView,
};
pub use bits::{bit_breakdown, BitKind, BitRow};
pub use subnets::{enumerate_subnets, parse_target_prefix, SubnetListing, SubnetRow};
