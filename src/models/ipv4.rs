//! IPv4 address and CIDR notation utilities.
//!
//! Addresses are carried as `u32` inside the calculator and converted to
//! dotted-decimal text only at the edges. Provides [`Prefix`] for validated
//! prefix lengths and [`Cidr`] for `network/prefix` pairs.

use crate::error::CalcError;
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

lazy_static! {
    // ASCII only, `\d` would also accept other Unicode digits.
    static ref NUMERAL_RE: Regex = Regex::new(r"^[0-9]+$").expect("Invalid Regex?");
}

/// Parse a base-10 numeral with no sign, tolerating leading zeros.
///
/// Returns `None` for anything that is not all ASCII digits or that does not
/// fit in a `u32` once leading zeros are dropped.
fn parse_numeral(text: &str) -> Option<u32> {
    if !NUMERAL_RE.is_match(text) {
        return None;
    }
    let significant = text.trim_start_matches('0');
    if significant.is_empty() {
        return Some(0);
    }
    significant.parse::<u32>().ok()
}

/// Parse a dotted-decimal IPv4 address into its 32-bit value.
///
/// # Examples
/// ```
/// use cidr_calculator::models::parse_addr;
/// assert_eq!(parse_addr("192.168.1.10").unwrap(), 0xC0A8010A);
/// assert!(parse_addr("999.1.1.1").is_err());
/// ```
pub fn parse_addr(text: &str) -> Result<u32, CalcError> {
    let invalid = || CalcError::InvalidAddress(text.to_string());
    let parts: Vec<&str> = text.trim().split('.').collect();
    if parts.len() != 4 {
        return Err(invalid());
    }
    parts.iter().try_fold(0u32, |acc, part| {
        let octet = parse_numeral(part).filter(|n| *n <= 255).ok_or_else(invalid)?;
        Ok((acc << 8) | octet)
    })
}

/// Format a 32-bit value as four dot-separated octets.
pub fn format_addr(value: u32) -> String {
    [24, 16, 8, 0]
        .iter()
        .map(|shift| (value >> shift) & 255)
        .join(".")
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use cidr_calculator::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// assert_eq!(get_cidr_mask(0).unwrap(), 0);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, CalcError> {
    if len > MAX_LENGTH {
        Err(CalcError::InvalidPrefix(len.to_string()))
    } else {
        // Shift in 64 bits so that a 32 bit shift at /0 is well defined.
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Bitwise complement of a subnet mask.
pub fn wildcard_mask(mask: u32) -> u32 {
    !mask
}

/// Get the network address for a given address and prefix length.
pub fn cut_addr(addr: u32, len: u8) -> Result<u32, CalcError> {
    Ok(addr & get_cidr_mask(len)?)
}

/// Calculate the broadcast address for a given address and prefix length.
pub fn broadcast_addr(addr: u32, len: u8) -> Result<u32, CalcError> {
    let mask = get_cidr_mask(len)?;
    Ok((addr & mask) | wildcard_mask(mask))
}

/// A validated prefix length in `0..=32`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Prefix(u8);

impl Prefix {
    /// Create a prefix, rejecting values above 32.
    pub fn new(len: u8) -> Result<Prefix, CalcError> {
        if len > MAX_LENGTH {
            return Err(CalcError::InvalidPrefix(len.to_string()));
        }
        Ok(Prefix(len))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn mask(self) -> u32 {
        // Range was checked on construction.
        get_cidr_mask(self.0).unwrap_or(u32::MAX)
    }

    pub fn host_bits(self) -> u8 {
        MAX_LENGTH - self.0
    }

    /// Number of addresses in a block of this size, 2^(32-prefix).
    pub fn block_size(self) -> u64 {
        1u64 << self.host_bits()
    }
}

impl FromStr for Prefix {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_numeral(s.trim())
            .and_then(|n| u8::try_from(n).ok())
            .ok_or_else(|| CalcError::InvalidPrefix(s.to_string()))
            .and_then(|n| Prefix::new(n).map_err(|_| CalcError::InvalidPrefix(s.to_string())))
    }
}

impl TryFrom<i64> for Prefix {
    type Error = CalcError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| CalcError::InvalidPrefix(value.to_string()))
            .and_then(Prefix::new)
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A network address paired with its prefix length.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Cidr {
    /// The network address.
    pub addr: Ipv4Addr,
    /// The prefix length.
    pub prefix: Prefix,
}

impl Cidr {
    /// Build the block containing `addr`, with host bits cleared.
    pub fn containing(addr: u32, prefix: Prefix) -> Cidr {
        Cidr {
            addr: Ipv4Addr::from(addr & prefix.mask()),
            prefix,
        }
    }

    /// Get the lowest (network) address in the block.
    pub fn lo(&self) -> u32 {
        u32::from(self.addr) & self.prefix.mask()
    }

    /// Get the highest address in the block.
    pub fn hi(&self) -> u32 {
        self.lo() | wildcard_mask(self.prefix.mask())
    }
}

impl Serialize for Cidr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl fmt::Display for Cidr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}
