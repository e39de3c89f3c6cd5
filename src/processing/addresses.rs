//! Address enumeration: lazy iteration, paging and bounded export.

use crate::models::NetworkBlock;
use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;

/// What an address is within its block.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AddressRole {
    Network,
    Broadcast,
    Host,
}

impl fmt::Display for AddressRole {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let role = match self {
            AddressRole::Network => "network",
            AddressRole::Broadcast => "broadcast",
            AddressRole::Host => "host",
        };
        f.write_str(role)
    }
}

/// Role of `addr` in `block`; /31 and /32 have host addresses only.
pub fn address_role(block: &NetworkBlock, addr: u32) -> AddressRole {
    if block.prefix().value() >= 31 {
        return AddressRole::Host;
    }
    if addr == block.network() {
        AddressRole::Network
    } else if Some(addr) == block.broadcast() {
        AddressRole::Broadcast
    } else {
        AddressRole::Host
    }
}

/// One enumerated address. `index` is the 1-based row number.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressRecord {
    pub index: u64,
    #[serde(rename = "ip")]
    pub addr: Ipv4Addr,
    pub role: AddressRole,
}

/// Lazy walk over a range of a block's addresses.
///
/// A clone continues independently from the same position.
#[derive(Debug, Clone)]
pub struct AddressIter<'a> {
    block: &'a NetworkBlock,
    // Offsets from the network address, end exclusive.
    next: u64,
    end: u64,
}

impl<'a> Iterator for AddressIter<'a> {
    type Item = AddressRecord;

    fn next(&mut self) -> Option<AddressRecord> {
        if self.next >= self.end {
            return None;
        }
        let offset = self.next;
        self.next += 1;
        // offset < total, so network + offset stays within 32 bits.
        let addr = (self.block.network() as u64 + offset) as u32;
        Some(AddressRecord {
            index: offset + 1,
            addr: Ipv4Addr::from(addr),
            role: address_role(self.block, addr),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end.saturating_sub(self.next);
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

/// Every address of `block`, network first.
pub fn addresses(block: &NetworkBlock) -> AddressIter<'_> {
    AddressIter {
        block,
        next: 0,
        end: block.total_addresses(),
    }
}

/// Addresses with row offsets in `start..end` (clamped to the block).
pub fn addresses_between(block: &NetworkBlock, start: u64, end: u64) -> AddressIter<'_> {
    let total = block.total_addresses();
    AddressIter {
        block,
        next: start.min(total),
        end: end.min(total),
    }
}

/// One page of addresses.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AddressPage {
    /// Zero-based page number after clamping.
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
    pub total: u64,
    pub records: Vec<AddressRecord>,
}

impl AddressPage {
    /// 1-based row number of the first record.
    pub fn from(&self) -> u64 {
        self.page * self.page_size + 1
    }

    /// 1-based row number of the last record.
    pub fn to(&self) -> u64 {
        self.page * self.page_size + self.records.len() as u64
    }
}

/// Outcome of asking for a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressView {
    Page(AddressPage),
    /// Block too large to page through; use the bulk export instead.
    ExportOnly { total: u64 },
}

/// Clamp a requested page index into `[0, total_pages - 1]`.
pub fn clamp_page(page: i64, total_pages: u64) -> u64 {
    let last = total_pages.saturating_sub(1);
    u64::try_from(page.max(0)).unwrap_or(0).min(last)
}

/// Build page `page` of `block` with `page_size` rows per page.
///
/// A page size of 0 is treated as 1. Blocks with more than `max_total`
/// addresses are refused with [`AddressView::ExportOnly`].
pub fn address_page(
    block: &NetworkBlock,
    page_size: usize,
    page: i64,
    max_total: u64,
) -> AddressView {
    let total = block.total_addresses();
    if total > max_total {
        log::info!(
            "{} has {} addresses, above the paging limit {}",
            block.cidr(),
            total,
            max_total
        );
        return AddressView::ExportOnly { total };
    }

    let page_size = page_size.max(1) as u64;
    let total_pages = total.div_ceil(page_size);
    let page = clamp_page(page, total_pages);
    let start = page * page_size;
    let records = addresses_between(block, start, start + page_size).collect();

    AddressView::Page(AddressPage {
        page,
        page_size,
        total_pages,
        total,
        records,
    })
}

/// Flat, capped list of address records for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressExport {
    pub records: Vec<AddressRecord>,
    pub total: u64,
    pub limit: u64,
}

impl AddressExport {
    pub fn is_truncated(&self) -> bool {
        self.total > self.limit
    }
}

/// Collect at most `limit` records of `block`.
pub fn export_addresses(block: &NetworkBlock, limit: u64) -> AddressExport {
    let total = block.total_addresses();
    if total > limit {
        log::warn!(
            "address export of {} truncated at {} of {} rows",
            block.cidr(),
            limit,
            total
        );
    }
    AddressExport {
        records: addresses_between(block, 0, limit).collect(),
        total,
        limit,
    }
}
