//! Partitioning a block into equal sub-blocks.

use crate::error::CalcError;
use crate::models::{Cidr, HostRange, NetworkBlock, Prefix};
use serde::Serialize;
use std::net::Ipv4Addr;

/// One sub-block of a partition.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubnetRow {
    pub cidr: Cidr,
    #[serde(skip)]
    pub hosts: HostRange,
    pub usable_hosts: u64,
}

impl SubnetRow {
    fn new(network: u32, prefix: Prefix) -> SubnetRow {
        let hosts = HostRange::for_block(network, prefix);
        SubnetRow {
            cidr: Cidr {
                addr: Ipv4Addr::from(network),
                prefix,
            },
            hosts,
            usable_hosts: hosts.usable_hosts(prefix),
        }
    }

    pub fn first_host(&self) -> Option<u32> {
        self.hosts.first_host()
    }

    pub fn last_host(&self) -> Option<u32> {
        self.hosts.last_host()
    }
}

/// The (possibly capped) result of partitioning a block.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubnetListing {
    pub base: Cidr,
    pub target: Prefix,
    /// How many sub-blocks the partition has in total, 2^(target-base).
    pub subnet_count: u64,
    pub rows: Vec<SubnetRow>,
}

impl SubnetListing {
    /// Sub-blocks left out because of the row cap.
    pub fn omitted(&self) -> u64 {
        self.subnet_count - self.rows.len() as u64
    }

    pub fn is_truncated(&self) -> bool {
        self.omitted() > 0
    }
}

/// Validate a subnet target against the base prefix of `block`.
pub fn parse_target_prefix(block: &NetworkBlock, target: &str) -> Result<Prefix, CalcError> {
    let base = block.prefix();
    let invalid = || CalcError::InvalidTargetPrefix {
        base: base.value(),
        target: target.to_string(),
    };
    let prefix: Prefix = target.parse().map_err(|_| invalid())?;
    if prefix < base {
        return Err(invalid());
    }
    Ok(prefix)
}

/// Partition `block` into sub-blocks of prefix `target`.
///
/// At most `limit` rows are produced, starting from the network address;
/// the full count is still reported in [`SubnetListing::subnet_count`].
pub fn enumerate_subnets(
    block: &NetworkBlock,
    target: &str,
    limit: usize,
) -> Result<SubnetListing, CalcError> {
    let target = parse_target_prefix(block, target)?;
    let subnet_count = 1u64 << (target.value() - block.prefix().value());
    let block_size = target.block_size();
    let rows_to_show = subnet_count.min(limit as u64);

    log::debug!(
        "partition {} into /{}: {} subnets, listing {}",
        block.cidr(),
        target,
        subnet_count,
        rows_to_show
    );
    if subnet_count > rows_to_show {
        log::warn!(
            "subnet listing of {} capped at {} of {} rows",
            block.cidr(),
            rows_to_show,
            subnet_count
        );
    }

    let network = block.network() as u64;
    let rows = (0..rows_to_show)
        // Every start lies inside the base block, so it fits in 32 bits.
        .map(|i| SubnetRow::new((network + i * block_size) as u32, target))
        .collect();

    Ok(SubnetListing {
        base: block.cidr(),
        target,
        subnet_count,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{format_addr, parse_addr};

    #[test]
    fn test_enumerate_subnets_22_to_24() {
        let block = NetworkBlock::compute("192.168.0.0", "22").unwrap();
        let listing = enumerate_subnets(&block, "24", 1024).unwrap();
        let cidrs: Vec<String> = listing.rows.iter().map(|r| r.cidr.to_string()).collect();
        assert_eq!(
            cidrs,
            vec![
                "192.168.0.0/24",
                "192.168.1.0/24",
                "192.168.2.0/24",
                "192.168.3.0/24"
            ]
        );
        assert_eq!(listing.subnet_count, 4);
        assert!(!listing.is_truncated());
        assert_eq!(listing.rows[1].usable_hosts, 254);
        assert_eq!(format_addr(listing.rows[1].first_host().unwrap()), "192.168.1.1");
        assert_eq!(format_addr(listing.rows[1].last_host().unwrap()), "192.168.1.254");
    }

    #[test]
    fn test_enumerate_subnets_same_prefix() {
        let block = NetworkBlock::compute("10.1.2.3", "16").unwrap();
        let listing = enumerate_subnets(&block, "16", 1024).unwrap();
        assert_eq!(listing.rows.len(), 1);
        assert_eq!(listing.rows[0].cidr.to_string(), "10.1.0.0/16");
    }

    #[test]
    fn test_enumerate_subnets_small_targets() {
        let block = NetworkBlock::compute("10.0.0.0", "30").unwrap();
        let p2p = enumerate_subnets(&block, "31", 1024).unwrap();
        assert_eq!(p2p.rows.len(), 2);
        assert!(p2p.rows.iter().all(|r| r.usable_hosts == 2));
        assert!(p2p.rows.iter().all(|r| r.first_host().is_none()));

        let single = enumerate_subnets(&block, "32", 1024).unwrap();
        assert_eq!(single.rows.len(), 4);
        assert!(single.rows.iter().all(|r| r.usable_hosts == 1));
        assert_eq!(single.rows[3].cidr.to_string(), "10.0.0.3/32");
    }

    #[test]
    fn test_enumerate_subnets_capped() {
        let block = NetworkBlock::compute("0.0.0.0", "0").unwrap();
        let listing = enumerate_subnets(&block, "32", 1024).unwrap();
        assert_eq!(listing.subnet_count, 1u64 << 32);
        assert_eq!(listing.rows.len(), 1024);
        assert_eq!(listing.omitted(), (1u64 << 32) - 1024);
        assert!(listing.is_truncated());
        assert_eq!(listing.rows[1023].cidr.to_string(), "0.0.3.255/32");
    }

    #[test]
    fn test_enumerate_subnets_top_of_space() {
        let block = NetworkBlock::compute("255.255.255.255", "24").unwrap();
        let listing = enumerate_subnets(&block, "26", 1024).unwrap();
        let last = listing.rows.last().unwrap();
        assert_eq!(last.cidr.to_string(), "255.255.255.192/26");
        assert_eq!(last.last_host(), Some(parse_addr("255.255.255.254").unwrap()));
    }

    #[test]
    fn test_invalid_target_prefix() {
        let block = NetworkBlock::compute("192.168.0.0", "22").unwrap();
        for bad in ["21", "33", "", "x", "-1"] {
            assert_eq!(
                enumerate_subnets(&block, bad, 1024),
                Err(CalcError::InvalidTargetPrefix {
                    base: 22,
                    target: bad.to_string()
                }),
                "target {bad:?} should be rejected"
            );
        }
    }
}
