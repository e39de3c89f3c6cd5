//! Output caps and defaults.
//!
//! The caps keep every view bounded; they are usability guards, not
//! correctness limits. Each can be overridden through the environment
//! (a `.env` file is loaded by the binary).

use std::env;

/// Maximum subnet rows listed at once.
pub const SUBNET_ROW_LIMIT: usize = 1024;
/// Blocks larger than this are not paged, only exported.
pub const PAGED_ADDRESS_LIMIT: u64 = 1 << 16;
/// Maximum address rows written to a CSV export.
pub const CSV_ROW_LIMIT: u64 = 1 << 17;
pub const DEFAULT_PAGE_SIZE: usize = 256;
pub const DEFAULT_PREFIX: u8 = 24;

pub const ENV_SUBNET_ROW_LIMIT: &str = "CIDR_SUBNET_ROW_LIMIT";
pub const ENV_PAGED_ADDRESS_LIMIT: &str = "CIDR_PAGED_ADDRESS_LIMIT";
pub const ENV_CSV_ROW_LIMIT: &str = "CIDR_CSV_ROW_LIMIT";
pub const ENV_PAGE_SIZE: &str = "CIDR_PAGE_SIZE";

/// Effective caps for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub subnet_rows: usize,
    pub paged_addresses: u64,
    pub csv_rows: u64,
    pub page_size: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            subnet_rows: SUBNET_ROW_LIMIT,
            paged_addresses: PAGED_ADDRESS_LIMIT,
            csv_rows: CSV_ROW_LIMIT,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Limits {
    /// Defaults overridden by any valid `CIDR_*` environment variables.
    pub fn from_env() -> Limits {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build limits from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Limits
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Limits::default();
        Limits {
            subnet_rows: read_positive(&lookup, ENV_SUBNET_ROW_LIMIT)
                .unwrap_or(defaults.subnet_rows as u64) as usize,
            paged_addresses: read_positive(&lookup, ENV_PAGED_ADDRESS_LIMIT)
                .unwrap_or(defaults.paged_addresses),
            csv_rows: read_positive(&lookup, ENV_CSV_ROW_LIMIT).unwrap_or(defaults.csv_rows),
            page_size: read_positive(&lookup, ENV_PAGE_SIZE).unwrap_or(defaults.page_size as u64)
                as usize,
        }
    }
}

fn read_positive<F>(lookup: &F, key: &str) -> Option<u64>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<u64>() {
        Ok(0) | Err(_) => {
            log::warn!("Ignoring {key}={raw:?}, expected a positive integer");
            None
        }
        Ok(value) => {
            log::debug!("{key} overridden to {value}");
            Some(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let limits = Limits::from_lookup(lookup_from(&[]));
        assert_eq!(limits, Limits::default());
        assert_eq!(limits.subnet_rows, 1024);
        assert_eq!(limits.paged_addresses, 65536);
        assert_eq!(limits.csv_rows, 131072);
    }

    #[test]
    fn test_overrides() {
        let limits = Limits::from_lookup(lookup_from(&[
            (ENV_SUBNET_ROW_LIMIT, "16"),
            (ENV_CSV_ROW_LIMIT, " 100 "),
            (ENV_PAGE_SIZE, "32"),
        ]));
        assert_eq!(limits.subnet_rows, 16);
        assert_eq!(limits.csv_rows, 100);
        assert_eq!(limits.page_size, 32);
        assert_eq!(limits.paged_addresses, PAGED_ADDRESS_LIMIT);
    }

    #[test]
    fn test_bad_overrides_ignored() {
        let limits = Limits::from_lookup(lookup_from(&[
            (ENV_SUBNET_ROW_LIMIT, "0"),
            (ENV_PAGED_ADDRESS_LIMIT, "lots"),
            (ENV_PAGE_SIZE, "-3"),
        ]));
        assert_eq!(limits, Limits::default());
    }
}
