//! Bit-level breakdown of a block.

use crate::models::{format_addr, NetworkBlock};
use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BitKind {
    Network,
    Host,
}

/// One 32-bit value split into bits, most significant first.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct BitRow {
    pub label: &'static str,
    pub value: u32,
    pub dotted: String,
    #[serde(skip)]
    prefix: u8,
}

impl BitRow {
    fn new(label: &'static str, value: u32, prefix: u8) -> BitRow {
        BitRow {
            label,
            value,
            dotted: format_addr(value),
            prefix,
        }
    }

    /// Bit at `position`, 0 being the most significant.
    pub fn bit(&self, position: u8) -> bool {
        (self.value >> (31 - position)) & 1 == 1
    }

    pub fn kind(&self, position: u8) -> BitKind {
        if position < self.prefix {
            BitKind::Network
        } else {
            BitKind::Host
        }
    }

    /// All 32 bits with their kind.
    pub fn bits(&self) -> impl Iterator<Item = (bool, BitKind)> + '_ {
        (0..32u8).map(move |i| (self.bit(i), self.kind(i)))
    }

    /// The value as a 32 character string of 0 and 1.
    pub fn binary(&self) -> String {
        format!("{:032b}", self.value)
    }
}

/// IP, Mask, Wildcard and Network rows for `block`.
pub fn bit_breakdown(block: &NetworkBlock) -> Vec<BitRow> {
    let prefix = block.prefix().value();
    vec![
        BitRow::new("IP", block.address(), prefix),
        BitRow::new("Mask", block.mask(), prefix),
        BitRow::new("Wildcard", block.wildcard(), prefix),
        BitRow::new("Network", block.network(), prefix),
    ]
}
