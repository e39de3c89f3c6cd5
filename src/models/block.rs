//! Network block derived from an address and a prefix length.

use super::ipv4::{format_addr, parse_addr, wildcard_mask, Cidr, Prefix};
use crate::error::CalcError;
use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;

/// Text shown in place of values the host policy does not define.
pub const NOT_APPLICABLE: &str = "N/A";

/// Host range policy of a block, chosen by its prefix length.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HostRange {
    /// Prefix 0 to 30: network and broadcast are reserved.
    Standard { first: u32, last: u32, broadcast: u32 },
    /// Prefix 31: both addresses are usable hosts (RFC 3021).
    PointToPoint,
    /// Prefix 32: the block is one host.
    SingleHost,
}

impl HostRange {
    /// Apply the policy to the block starting at `network`.
    pub fn for_block(network: u32, prefix: Prefix) -> HostRange {
        match prefix.value() {
            0..=30 => {
                let broadcast = network | wildcard_mask(prefix.mask());
                HostRange::Standard {
                    first: network + 1,
                    last: broadcast - 1,
                    broadcast,
                }
            }
            31 => HostRange::PointToPoint,
            _ => HostRange::SingleHost,
        }
    }

    /// Number of usable host addresses under this policy.
    pub fn usable_hosts(&self, prefix: Prefix) -> u64 {
        match self {
            HostRange::Standard { .. } => prefix.block_size() - 2,
            HostRange::PointToPoint => 2,
            HostRange::SingleHost => 1,
        }
    }

    pub fn broadcast(&self) -> Option<u32> {
        match self {
            HostRange::Standard { broadcast, .. } => Some(*broadcast),
            _ => None,
        }
    }

    pub fn first_host(&self) -> Option<u32> {
        match self {
            HostRange::Standard { first, .. } => Some(*first),
            _ => None,
        }
    }

    pub fn last_host(&self) -> Option<u32> {
        match self {
            HostRange::Standard { last, .. } => Some(*last),
            _ => None,
        }
    }
}

/// Render an optional address, using [`NOT_APPLICABLE`] for `None`.
pub fn format_optional(addr: Option<u32>) -> String {
    addr.map(format_addr)
        .unwrap_or_else(|| NOT_APPLICABLE.to_string())
}

/// Everything derived from one (address, prefix) input.
///
/// Immutable once computed; a new input produces a new block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkBlock {
    input: String,
    address: u32,
    prefix: Prefix,
    hosts: HostRange,
}

impl NetworkBlock {
    /// Parse and compute a block from user-supplied text.
    ///
    /// The address is validated before the prefix, so input with both wrong
    /// reports the address.
    pub fn compute(address: &str, prefix: &str) -> Result<NetworkBlock, CalcError> {
        let addr = parse_addr(address)?;
        let prefix: Prefix = prefix.parse()?;
        Ok(Self::build(address.trim(), addr, prefix))
    }

    /// Compute a block from an address string and an already numeric prefix.
    pub fn with_prefix(address: &str, prefix: i64) -> Result<NetworkBlock, CalcError> {
        let addr = parse_addr(address)?;
        let prefix = Prefix::try_from(prefix)?;
        Ok(Self::build(address.trim(), addr, prefix))
    }

    /// Compute a block from an already parsed address.
    pub fn from_parts(address: u32, prefix: Prefix) -> NetworkBlock {
        Self::build(&format_addr(address), address, prefix)
    }

    fn build(address_text: &str, address: u32, prefix: Prefix) -> NetworkBlock {
        let network = address & prefix.mask();
        let block = NetworkBlock {
            input: format!("{address_text}/{prefix}"),
            address,
            prefix,
            hosts: HostRange::for_block(network, prefix),
        };
        log::debug!(
            "computed {} from input {} ({} addresses)",
            block.cidr(),
            block.input,
            block.total_addresses()
        );
        block
    }

    /// Original input as `address/prefix`.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn address(&self) -> u32 {
        self.address
    }

    pub fn prefix(&self) -> Prefix {
        self.prefix
    }

    pub fn mask(&self) -> u32 {
        self.prefix.mask()
    }

    pub fn wildcard(&self) -> u32 {
        wildcard_mask(self.mask())
    }

    pub fn network(&self) -> u32 {
        self.address & self.mask()
    }

    /// Broadcast address, `None` for /31 and /32.
    pub fn broadcast(&self) -> Option<u32> {
        self.hosts.broadcast()
    }

    pub fn first_host(&self) -> Option<u32> {
        self.hosts.first_host()
    }

    pub fn last_host(&self) -> Option<u32> {
        self.hosts.last_host()
    }

    pub fn host_range(&self) -> HostRange {
        self.hosts
    }

    /// 2^(32-prefix); needs 64 bits at prefix 0.
    pub fn total_addresses(&self) -> u64 {
        self.prefix.block_size()
    }

    pub fn usable_hosts(&self) -> u64 {
        self.hosts.usable_hosts(self.prefix)
    }

    /// Highest address of the block whatever the host policy.
    pub fn last_address(&self) -> u32 {
        self.network() | self.wildcard()
    }

    pub fn cidr(&self) -> Cidr {
        Cidr {
            addr: Ipv4Addr::from(self.network()),
            prefix: self.prefix,
        }
    }

    /// Result record in its external, string-valued form.
    pub fn summary(&self) -> BlockSummary {
        BlockSummary {
            input: self.input.clone(),
            network: format_addr(self.network()),
            broadcast: format_optional(self.broadcast()),
            first_host: format_optional(self.first_host()),
            last_host: format_optional(self.last_host()),
            total_addresses: self.total_addresses(),
            usable_hosts: self.usable_hosts(),
            netmask: format_addr(self.mask()),
            wildcard: format_addr(self.wildcard()),
            cidr: self.cidr().to_string(),
        }
    }
}

impl fmt::Display for NetworkBlock {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.cidr())
    }
}

/// The result record rendered by the table, text and JSON outputs.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BlockSummary {
    pub input: String,
    pub network: String,
    pub broadcast: String,
    pub first_host: String,
    pub last_host: String,
    pub total_addresses: u64,
    pub usable_hosts: u64,
    pub netmask: String,
    pub wildcard: String,
    pub cidr: String,
}

impl BlockSummary {
    /// Labelled fields in display order.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Input", self.input.clone()),
            ("Network Address", self.network.clone()),
            ("Netmask", self.netmask.clone()),
            ("Wildcard Mask", self.wildcard.clone()),
            ("Broadcast Address", self.broadcast.clone()),
            ("First Host", self.first_host.clone()),
            ("Last Host", self.last_host.clone()),
            ("Total Addresses", self.total_addresses.to_string()),
            ("Usable Hosts", self.usable_hosts.to_string()),
            ("CIDR Notation", self.cidr.clone()),
        ]
    }
}
